//! 签名编译器：将内置签名表编译为可执行正则

use regex::RegexBuilder;

use crate::error::RswResult;
use crate::rule::model::{Rule, Signature};
use super::pattern::{CompiledPattern, CompiledRule, CompiledSignature, SignatureCatalog};

/// 签名编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译签名表
    /// 非法正则在此处失败，扫描期不会出现模式错误
    pub fn compile(signatures: &'static [Signature]) -> RswResult<SignatureCatalog> {
        let mut compiled = Vec::with_capacity(signatures.len());

        for signature in signatures {
            let mut rules = Vec::with_capacity(signature.rules.len());
            for rule in signature.rules {
                rules.push(Self::compile_rule(rule)?);
            }
            compiled.push(CompiledSignature {
                name: signature.name,
                category: signature.category,
                rules,
            });
        }

        Ok(SignatureCatalog {
            signatures: compiled,
        })
    }

    /// 编译单条规则（Header/Meta查找名统一小写）
    fn compile_rule(rule: &Rule) -> RswResult<CompiledRule> {
        Ok(match *rule {
            Rule::Header {
                name,
                pattern,
                version_group,
                confidence,
            } => CompiledRule::Header {
                name: name.to_lowercase(),
                pattern: Self::compile_pattern(pattern, version_group, confidence)?,
            },
            Rule::Meta {
                name,
                pattern,
                version_group,
                confidence,
            } => CompiledRule::Meta {
                name: name.to_lowercase(),
                pattern: Self::compile_pattern(pattern, version_group, confidence)?,
            },
            Rule::Body {
                pattern,
                version_group,
                confidence,
            } => CompiledRule::Body {
                pattern: Self::compile_pattern(pattern, version_group, confidence)?,
            },
            Rule::ScriptSrc {
                pattern,
                version_group,
                confidence,
            } => CompiledRule::ScriptSrc {
                pattern: Self::compile_pattern(pattern, version_group, confidence)?,
            },
            Rule::LinkHref {
                pattern,
                version_group,
                confidence,
            } => CompiledRule::LinkHref {
                pattern: Self::compile_pattern(pattern, version_group, confidence)?,
            },
        })
    }

    /// 编译单个模式（匹配统一大小写不敏感）
    fn compile_pattern(
        pattern: &str,
        version_group: Option<usize>,
        confidence: Option<u8>,
    ) -> RswResult<CompiledPattern> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(CompiledPattern {
            regex,
            version_group,
            confidence,
        })
    }
}
