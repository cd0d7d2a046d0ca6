//! HTML标签提取器
//! 流式解析HTML，收集meta/script/link/title/注释；容错解析，永不报错

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{Tag, TagKind, Token, TokenSink, TokenSinkResult};
use markup5ever::interface::Attribute;

use super::page_model::{LinkRef, PageModel};

#[derive(Debug, Default)]
pub struct HtmlExtractor {
    title: RefCell<String>,
    meta_tags: RefCell<HashMap<String, String>>,
    script_srcs: RefCell<Vec<String>>,
    link_hrefs: RefCell<Vec<LinkRef>>,
    comments: RefCell<Vec<String>>,
    in_title: Cell<bool>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => self.process_tag(tag),
            Token::CharacterTokens(text) => {
                if self.in_title.get() {
                    self.title.borrow_mut().push_str(text.trim());
                }
                TokenSinkResult::Continue
            }
            Token::CommentToken(text) => {
                self.comments.borrow_mut().push(text.trim().to_string());
                TokenSinkResult::Continue
            }
            // 解析错误等其余token直接跳过
            _ => TokenSinkResult::Continue,
        }
    }
}

impl HtmlExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    /// 转换为页面模型
    pub fn into_page_model(self) -> PageModel {
        PageModel {
            title: self.title.into_inner(),
            meta_tags: self.meta_tags.into_inner(),
            script_srcs: self.script_srcs.into_inner(),
            link_hrefs: self.link_hrefs.into_inner(),
            comments: self.comments.into_inner(),
        }
    }

    fn process_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        match (tag.kind, tag.name.as_ref()) {
            (TagKind::StartTag, "meta") => self.extract_meta(&tag.attrs),
            (TagKind::StartTag, "script") => {
                self.extract_script_src(&tag.attrs);
                // 切换原始文本状态，脚本体不会被当作标签解析
                if !tag.self_closing {
                    return TokenSinkResult::RawData(RawKind::ScriptData);
                }
            }
            (TagKind::StartTag, "link") => self.extract_link_href(&tag.attrs),
            (TagKind::StartTag, "title") => {
                if !tag.self_closing {
                    self.in_title.set(true);
                    return TokenSinkResult::RawData(RawKind::Rcdata);
                }
            }
            (TagKind::EndTag, "title") => self.in_title.set(false),
            _ => {}
        }
        TokenSinkResult::Continue
    }

    /// 提取meta标签（name小写存储，同名后者覆盖前者）
    fn extract_meta(&self, attrs: &[Attribute]) {
        let mut name = None;
        let mut content = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "name" => name = Some(attr.value.to_string().to_lowercase()),
                "content" => content = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.meta_tags
                .borrow_mut()
                .insert(name, content.unwrap_or_default());
        }
    }

    /// 提取script-src（按文档顺序）
    fn extract_script_src(&self, attrs: &[Attribute]) {
        for attr in attrs {
            if attr.name.local.as_ref() == "src" && !attr.value.is_empty() {
                self.script_srcs.borrow_mut().push(attr.value.to_string());
                break;
            }
        }
    }

    /// 提取link-href（按文档顺序，rel可为空）
    fn extract_link_href(&self, attrs: &[Attribute]) {
        let mut href = None;
        let mut rel = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "href" => href = Some(attr.value.to_string()),
                "rel" => rel = Some(attr.value.to_string()),
                _ => {}
            }
        }

        if let Some(href) = href.filter(|h| !h.is_empty()) {
            self.link_hrefs.borrow_mut().push(LinkRef {
                href,
                rel: rel.unwrap_or_default(),
            });
        }
    }
}
