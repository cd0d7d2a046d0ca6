//! 扫描编排：单URL抓取→页面模型→全量签名匹配→Server合成

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::compiler::SignatureCatalog;
use crate::config::GlobalConfig;
use crate::error::RswResult;
use crate::extractor::PageModel;
use crate::rule::DetectionResult;
use crate::transport::HttpTransport;
use super::matcher::SignatureMatcher;

/// 技术扫描器
/// 签名目录进程内只读共享；每次扫描相互独立，可安全并发
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: Arc<SignatureCatalog>,
    transport: HttpTransport,
}

impl Scanner {
    /// 创建扫描器（编译内置签名表，失败属启动期致命错误）
    pub fn new(config: GlobalConfig) -> RswResult<Self> {
        let catalog = SignatureCatalog::load()?;
        Self::with_catalog(config, Arc::new(catalog))
    }

    /// 使用外部签名目录创建扫描器
    pub fn with_catalog(config: GlobalConfig, catalog: Arc<SignatureCatalog>) -> RswResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { catalog, transport })
    }

    /// 扫描单个URL
    ///
    /// 传输失败以错误返回，由调用方决定如何降级；
    /// 批量扫描时单个URL失败不应中断其余URL
    pub async fn scan(&self, url: &str) -> RswResult<Vec<DetectionResult>> {
        // 1. 规范化scheme并校验URL
        let target = normalize_scheme(url);
        Url::parse(&target)?;
        debug!("开始扫描：{}", target);

        // 2. 抓取响应
        let response = self.transport.fetch(&target).await?;

        // 3. 构建页面模型
        let page = PageModel::extract(&response.body);

        // 4. 按目录顺序逐签名匹配
        let mut results = Vec::new();
        for signature in self.catalog.signatures() {
            if let Some(detection) =
                SignatureMatcher::detect(signature, &response.headers, &response.body, &page)
            {
                results.push(detection);
            }
        }

        // 5. 追加Server合成结果
        if let Some(server) = SignatureMatcher::synthesize_server(&response.headers) {
            results.push(server);
        }

        debug!("扫描完成：{}，检出技术数={}", target, results.len());
        Ok(results)
    }
}

/// URL缺少scheme时补全http://
pub fn normalize_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
