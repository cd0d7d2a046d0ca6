//! Header格式转换工具
//! 在传输层边界把响应头规范化为扫描用的单值映射

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use tracing::debug;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将HeaderMap规范化为HashMap<String, String>
    /// 键统一小写（HTTP头名称不区分大小写），同名头取第一个非空值
    pub fn to_scan_headers(header_map: &HeaderMap) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = HashMap::new();

        for (key, value) in header_map.iter() {
            let Ok(value_str) = value.to_str() else {
                continue;
            };
            if value_str.is_empty() {
                continue;
            }

            map.entry(key.as_str().to_lowercase())
                .or_insert_with(|| value_str.to_string());
        }

        debug!("Header规范化完成，生成{}条记录", map.len());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn test_header_names_normalized_to_lowercase() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"Server").unwrap(),
            HeaderValue::from_static("nginx/1.18.0"),
        );
        headers.insert(
            HeaderName::from_bytes(b"X-Powered-By").unwrap(),
            HeaderValue::from_static("PHP/8.2.1"),
        );

        let map = HeaderConverter::to_scan_headers(&headers);
        assert_eq!(map.get("server").map(String::as_str), Some("nginx/1.18.0"));
        assert_eq!(map.get("x-powered-by").map(String::as_str), Some("PHP/8.2.1"));
    }

    #[test]
    fn test_first_non_empty_value_kept() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2"));

        let map = HeaderConverter::to_scan_headers(&headers);
        assert_eq!(map.get("set-cookie").map(String::as_str), Some("a=1"));
    }

    #[test]
    fn test_empty_values_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("server", HeaderValue::from_static(""));

        let map = HeaderConverter::to_scan_headers(&headers);
        assert!(map.get("server").is_none());
    }
}
