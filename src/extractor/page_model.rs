//! 页面模型：单次扫描内只读的HTML结构化视图

use std::collections::HashMap;

use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};
use tendril::StrTendril;

use super::html_extractor::HtmlExtractor;

/// link标签引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    pub href: String,
    pub rel: String,
}

/// 页面模型：每次响应新建，匹配结束即丢弃
#[derive(Debug, Default, Clone)]
pub struct PageModel {
    pub title: String,
    pub meta_tags: HashMap<String, String>,
    pub script_srcs: Vec<String>,
    pub link_hrefs: Vec<LinkRef>,
    pub comments: Vec<String>,
}

impl PageModel {
    /// 从HTML字符串构建页面模型
    /// 输入可以是任意残缺HTML，解析失败的片段被跳过而非报错
    pub fn extract(html: &str) -> PageModel {
        let tokenizer = Tokenizer::new(HtmlExtractor::new(), TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink.into_page_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_page_model() {
        let html = r#"
            <html><head>
            <title> Demo Site </title>
            <meta name="Author" content="test_user">
            <meta name="generator" content="WordPress 6.0" />
            <script src="/jquery.min.js"></script>
            <link rel="stylesheet" href="/css/bootstrap.min.css">
            <!-- built by hand -->
            <script src="/vue.global.js"></script>
            </head><body></body></html>
        "#;

        let page = PageModel::extract(html);

        assert_eq!(page.title, "Demo Site");
        assert_eq!(page.meta_tags.get("author").map(String::as_str), Some("test_user"));
        assert_eq!(page.meta_tags.get("generator").map(String::as_str), Some("WordPress 6.0"));
        assert_eq!(
            page.script_srcs,
            vec!["/jquery.min.js".to_string(), "/vue.global.js".to_string()]
        );
        assert_eq!(
            page.link_hrefs,
            vec![LinkRef {
                href: "/css/bootstrap.min.css".to_string(),
                rel: "stylesheet".to_string(),
            }]
        );
        assert_eq!(page.comments, vec!["built by hand".to_string()]);
    }

    #[test]
    fn test_meta_last_occurrence_wins() {
        let html = r#"
            <meta name="generator" content="Drupal 9">
            <meta name="GENERATOR" content="Drupal 10">
        "#;

        let page = PageModel::extract(html);
        assert_eq!(page.meta_tags.get("generator").map(String::as_str), Some("Drupal 10"));
    }

    #[test]
    fn test_meta_without_content_records_empty() {
        let page = PageModel::extract(r#"<meta name="robots">"#);
        assert_eq!(page.meta_tags.get("robots").map(String::as_str), Some(""));
    }

    #[test]
    fn test_empty_src_and_href_skipped() {
        let html = r#"
            <script src=""></script>
            <script></script>
            <link href="" rel="icon">
            <link rel="preload">
        "#;

        let page = PageModel::extract(html);
        assert!(page.script_srcs.is_empty());
        assert!(page.link_hrefs.is_empty());
    }

    #[test]
    fn test_link_without_rel() {
        let page = PageModel::extract(r#"<link href="/style.css">"#);
        assert_eq!(
            page.link_hrefs,
            vec![LinkRef {
                href: "/style.css".to_string(),
                rel: String::new(),
            }]
        );
    }

    #[test]
    fn test_malformed_html_degrades_gracefully() {
        // 测试场景：残缺标签不报错，已完成的片段正常提取
        let html = r#"<meta name="generator" content="Joomla! 4"><script src="/a.js"><div <<< broken"#;

        let page = PageModel::extract(html);
        assert_eq!(page.meta_tags.get("generator").map(String::as_str), Some("Joomla! 4"));
        assert_eq!(page.script_srcs, vec!["/a.js".to_string()]);
    }

    #[test]
    fn test_script_body_not_parsed_as_markup() {
        // 脚本体内的字符串不应产生伪标签
        let html = r#"<script>var s = "<meta name='generator' content='Fake 1.0'>";</script>"#;

        let page = PageModel::extract(html);
        assert!(page.meta_tags.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <script src="/first.js"></script>
            <link href="/one.css" rel="stylesheet">
            <script src="/second.js"></script>
            <link href="/two.css" rel="stylesheet">
            <script src="/third.js"></script>
        "#;

        let page = PageModel::extract(html);
        assert_eq!(
            page.script_srcs,
            vec!["/first.js", "/second.js", "/third.js"]
        );
        assert_eq!(page.link_hrefs[0].href, "/one.css");
        assert_eq!(page.link_hrefs[1].href, "/two.css");
    }
}
