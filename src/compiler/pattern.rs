//! 编译后签名模型
//! 正则编译后的结构，进程内只读共享

use regex::Regex;

use crate::error::RswResult;
use super::compiler::RuleCompiler;

/// 编译后的正则模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub regex: Regex,
    pub version_group: Option<usize>,
    pub confidence: Option<u8>,
}

/// 编译后的匹配规则（Header/Meta的查找名已统一小写）
#[derive(Debug, Clone)]
pub enum CompiledRule {
    Header { name: String, pattern: CompiledPattern },
    Meta { name: String, pattern: CompiledPattern },
    Body { pattern: CompiledPattern },
    ScriptSrc { pattern: CompiledPattern },
    LinkHref { pattern: CompiledPattern },
}

impl CompiledRule {
    /// 获取规则的编译模式
    pub fn pattern(&self) -> &CompiledPattern {
        match self {
            CompiledRule::Header { pattern, .. }
            | CompiledRule::Meta { pattern, .. }
            | CompiledRule::Body { pattern }
            | CompiledRule::ScriptSrc { pattern }
            | CompiledRule::LinkHref { pattern } => pattern,
        }
    }

    /// 规则数据源描述（用于日志输出）
    pub fn source_name(&self) -> &'static str {
        match self {
            CompiledRule::Header { .. } => "header",
            CompiledRule::Meta { .. } => "meta",
            CompiledRule::Body { .. } => "body",
            CompiledRule::ScriptSrc { .. } => "script-src",
            CompiledRule::LinkHref { .. } => "link-href",
        }
    }
}

/// 编译后的技术签名
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub name: &'static str,
    pub category: &'static str,
    pub rules: Vec<CompiledRule>,
}

/// 签名目录：全部签名编译后的只读集合
#[derive(Debug, Clone)]
pub struct SignatureCatalog {
    pub(crate) signatures: Vec<CompiledSignature>,
}

impl SignatureCatalog {
    /// 加载内置签名表（任一正则非法即整体失败，属启动期致命错误）
    pub fn load() -> RswResult<Self> {
        RuleCompiler::compile(crate::rule::BUILTIN)
    }

    /// 按声明顺序返回全部签名
    pub fn signatures(&self) -> &[CompiledSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = SignatureCatalog::load().unwrap();
        assert!(!catalog.is_empty());

        // 签名顺序与内置表一致
        assert_eq!(catalog.signatures()[0].name, "Apache");
        assert!(catalog.signatures().iter().any(|s| s.name == "Cloudflare"));
        assert_eq!(catalog.len(), crate::rule::BUILTIN.len());
    }

    #[test]
    fn test_header_lookup_names_are_lowercased() {
        let catalog = SignatureCatalog::load().unwrap();
        let php = catalog
            .signatures()
            .iter()
            .find(|s| s.name == "PHP")
            .unwrap();

        match &php.rules[0] {
            CompiledRule::Header { name, .. } => assert_eq!(name, "x-powered-by"),
            other => panic!("unexpected rule kind: {}", other.source_name()),
        }
    }
}
