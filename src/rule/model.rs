//! 签名数据模型定义
//! 仅存储签名数据，无任何业务逻辑

use std::fmt;
use serde::{Deserialize, Serialize};

/// 技术签名：一个技术对应一组有序的匹配规则
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub name: &'static str,
    pub category: &'static str,
    pub rules: &'static [Rule],
}

/// 匹配规则：针对单一数据源的一次正则测试
/// `version_group`指定提取版本号的捕获分组；`confidence`缺省时按100处理
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// 匹配指定名称的响应头
    Header {
        name: &'static str,
        pattern: &'static str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    },
    /// 匹配指定name的meta标签content
    Meta {
        name: &'static str,
        pattern: &'static str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    },
    /// 匹配完整响应体
    Body {
        pattern: &'static str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    },
    /// 逐条匹配script标签的src
    ScriptSrc {
        pattern: &'static str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    },
    /// 逐条匹配link标签的href
    LinkHref {
        pattern: &'static str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    },
}

/// 技术检测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub name: String,
    pub version: Option<String>,
    pub category: String,
    pub confidence: u8,
}

// ======== 为 DetectionResult 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) if !v.is_empty() => write!(f, "{} {}", self.name, v),
            _ => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_version() {
        let result = DetectionResult {
            name: "nginx".to_string(),
            version: Some("1.18.0".to_string()),
            category: "Web Server".to_string(),
            confidence: 100,
        };
        assert_eq!(result.to_string(), "nginx 1.18.0");
    }

    #[test]
    fn test_display_without_version() {
        let result = DetectionResult {
            name: "Cloudflare".to_string(),
            version: None,
            category: "CDN".to_string(),
            confidence: 100,
        };
        assert_eq!(result.to_string(), "Cloudflare");
    }
}
