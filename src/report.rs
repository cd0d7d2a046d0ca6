//! 扫描结果渲染：text / json 两种输出格式

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::RswResult;
use crate::rule::DetectionResult;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 单URL扫描报告（JSON输出的顶层结构）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlReport {
    pub url: String,
    pub technologies: Vec<DetectionResult>,
}

/// 渲染扫描结果
pub fn render(url: &str, results: &[DetectionResult], format: OutputFormat) -> RswResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(url, results)),
        OutputFormat::Json => render_json(url, results),
    }
}

/// JSON渲染：技术按检出顺序排列，键序固定
fn render_json(url: &str, results: &[DetectionResult]) -> RswResult<String> {
    let report = UrlReport {
        url: url.to_string(),
        technologies: results.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 文本渲染：按分类首次出现顺序分组
fn render_text(url: &str, results: &[DetectionResult]) -> String {
    let mut output = vec![format!("Scanning: {}", url), "=".repeat(50)];

    if results.is_empty() {
        output.push("No technologies detected.".to_string());
        return output.join("\n");
    }

    let mut categories: Vec<(&str, Vec<&DetectionResult>)> = Vec::new();
    for result in results {
        match categories
            .iter_mut()
            .find(|(category, _)| *category == result.category)
        {
            Some((_, entries)) => entries.push(result),
            None => categories.push((result.category.as_str(), vec![result])),
        }
    }

    for (category, techs) in categories {
        output.push(format!("\n{}:", category));
        for tech in techs {
            // 置信度100时不输出后缀
            let confidence_suffix = if tech.confidence < 100 {
                format!(" ({}%)", tech.confidence)
            } else {
                String::new()
            };
            output.push(format!("  - {}{}", tech, confidence_suffix));
        }
    }

    output.join("\n")
}
