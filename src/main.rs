//! rswhatweb CLI入口：批量扫描URL并输出技术指纹

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rswhatweb::{ConfigManager, OutputFormat, Scanner, report};

#[derive(Parser, Debug)]
#[command(
    name = "rswhatweb",
    version,
    about = "WhatWeb-style website technology fingerprinting tool / 网站技术栈指纹识别工具"
)]
struct Cli {
    /// 待扫描的目标URL（支持多个，缺省scheme时按http处理）
    #[arg(required = true)]
    urls: Vec<String>,

    /// 输出格式
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// 请求超时时间（秒）
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// 自定义User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// 输出详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志初始化：--verbose 提升到debug级别，日志走stderr不污染报告输出
    let default_filter = if cli.verbose {
        "rswhatweb=debug"
    } else {
        "rswhatweb=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = ConfigManager::custom()
        .http_timeout(cli.timeout)
        .verbose(cli.verbose);
    if let Some(user_agent) = cli.user_agent.clone() {
        builder = builder.user_agent(user_agent);
    }
    let config = builder.build();

    // 签名目录编译失败属于启动期致命错误
    let scanner = Scanner::new(config)?;

    // 逐URL顺序扫描；单个URL失败记录日志并输出空结果，不中断批量流程
    for (index, url) in cli.urls.iter().enumerate() {
        info!("Scanning {}...", url);

        let results = match scanner.scan(url).await {
            Ok(results) => results,
            Err(e) => {
                error!("扫描 {} 失败：{}", url, e);
                Vec::new()
            }
        };

        println!("{}", report::render(url, &results, cli.format)?);

        if index + 1 < cli.urls.len() {
            println!();
        }
    }

    Ok(())
}
