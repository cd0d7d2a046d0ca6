//! 版本提取工具模块
//! 负责从正则捕获结果中，按规则指定的分组序号提取合法的技术版本号

use regex::Captures;

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 从正则捕获结果中提取有效版本号
    ///
    /// # 参数
    /// - `version_group`: 规则指定的捕获分组序号（0为整体匹配，不用于版本提取）
    /// - `captures`: 正则捕获结果
    ///
    /// # 返回值
    /// - `Some(String)`: 提取到的有效版本号（前后空白已清理）
    /// - `None`: 规则未指定分组 / 分组未参与匹配 / 提取结果为空
    pub fn extract(version_group: Option<usize>, captures: &Captures) -> Option<String> {
        let group = version_group?;

        captures
            .get(group)
            .map(|matched| matched.as_str().trim().to_string())
            .filter(|version| !version.is_empty())
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn captures_for<'a>(pattern: &str, input: &'a str) -> Captures<'a> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
            .captures(input)
            .unwrap()
    }

    #[test]
    fn test_extract_valid_version() {
        let captures = captures_for(r"nginx(?:/([\d.]+))?", "nginx/1.21.6");
        let version = VersionExtractor::extract(Some(1), &captures);
        assert_eq!(version, Some("1.21.6".to_string()));
    }

    #[test]
    fn test_extract_without_group_returns_none() {
        // 测试场景：规则未指定分组，命中但不提取版本
        let captures = captures_for(r"cloudflare", "cloudflare");
        assert_eq!(VersionExtractor::extract(None, &captures), None);
    }

    #[test]
    fn test_extract_unmatched_optional_group() {
        // 测试场景：可选分组未参与匹配，应返回 None
        let captures = captures_for(r"nginx(?:/([\d.]+))?", "nginx");
        assert_eq!(VersionExtractor::extract(Some(1), &captures), None);
    }

    #[test]
    fn test_extract_out_of_range_group() {
        let captures = captures_for(r"apache/([\d.]+)", "apache/2.4.57");
        assert_eq!(VersionExtractor::extract(Some(3), &captures), None);
    }

    #[test]
    fn test_extract_trims_whitespace() {
        let captures = captures_for(r"nginx/(\s*[\d.]+\s*)", "nginx/ 1.21.6 ");
        assert_eq!(
            VersionExtractor::extract(Some(1), &captures),
            Some("1.21.6".to_string())
        );
    }
}
