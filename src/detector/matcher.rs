//! 签名匹配器：对单个签名逐规则评估，输出至多一条检测结果

use std::collections::HashMap;

use tracing::debug;

use crate::compiler::{CompiledRule, CompiledSignature};
use crate::extractor::PageModel;
use crate::rule::DetectionResult;
use crate::utils::VersionExtractor;

/// 签名匹配器（无状态，可并发调用）
pub struct SignatureMatcher;

impl SignatureMatcher {
    /// 对一个签名评估全部规则，任一规则命中即判定检出
    ///
    /// 规则按声明顺序全部评估，不在首次命中后短路；
    /// 版本与置信度由最后一条设置它们的规则决定（后命中覆盖先命中）
    pub fn detect(
        signature: &CompiledSignature,
        headers: &HashMap<String, String>,
        body: &str,
        page: &PageModel,
    ) -> Option<DetectionResult> {
        let mut detected = false;
        let mut version: Option<String> = None;
        let mut confidence: u8 = 100;

        for rule in &signature.rules {
            // 1. 按规则类型选择数据源并执行匹配
            //    script/link规则逐条测试，首个命中的条目即满足该规则
            let captures = match rule {
                CompiledRule::Header { name, pattern } => headers
                    .get(name)
                    .and_then(|value| pattern.regex.captures(value)),
                CompiledRule::Meta { name, pattern } => page
                    .meta_tags
                    .get(name)
                    .and_then(|content| pattern.regex.captures(content)),
                CompiledRule::Body { pattern } => pattern.regex.captures(body),
                CompiledRule::ScriptSrc { pattern } => page
                    .script_srcs
                    .iter()
                    .find_map(|src| pattern.regex.captures(src)),
                CompiledRule::LinkHref { pattern } => page
                    .link_hrefs
                    .iter()
                    .find_map(|link| pattern.regex.captures(&link.href)),
            };

            let Some(captures) = captures else {
                continue;
            };

            // 2. 标记检出
            detected = true;
            let pattern = rule.pattern();

            // 3. 版本提取：仅在分组实际捕获时覆盖先前版本
            if let Some(extracted) = VersionExtractor::extract(pattern.version_group, &captures) {
                version = Some(extracted);
            }

            // 4. 置信度：仅在规则显式给出时覆盖
            if let Some(value) = pattern.confidence {
                confidence = value;
            }

            debug!(
                "规则命中：技术={}，来源={}，版本={:?}，置信度={}",
                signature.name,
                rule.source_name(),
                version,
                confidence
            );
        }

        detected.then(|| DetectionResult {
            name: signature.name.to_string(),
            version,
            category: signature.category.to_string(),
            confidence,
        })
    }

    /// 根据Server头合成一条附加结果，独立于签名表，追加在所有签名结果之后
    pub fn synthesize_server(headers: &HashMap<String, String>) -> Option<DetectionResult> {
        headers.get("server").map(|value| DetectionResult {
            name: "Server".to_string(),
            version: Some(value.clone()),
            category: "Server Info".to_string(),
            confidence: 100,
        })
    }
}
