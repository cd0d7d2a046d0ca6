//! 提取模块：从响应体构建页面模型
pub mod html_extractor;
pub mod page_model;

pub use self::html_extractor::HtmlExtractor;
pub use self::page_model::{LinkRef, PageModel};
