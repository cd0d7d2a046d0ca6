//! rswhatweb - Rust WhatWeb风格网站技术栈指纹识别工具

// 导出全局错误类型
pub use self::error::{RswhatwebError, RswResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, DEFAULT_USER_AGENT, GlobalConfig};

// 导出签名模块核心接口
pub use self::rule::{DetectionResult, Rule, Signature};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledPattern, CompiledRule, CompiledSignature, RuleCompiler, SignatureCatalog,
};

// 导出提取模块核心接口
pub use self::extractor::{HtmlExtractor, LinkRef, PageModel};

// 导出工具模块核心接口
pub use self::utils::{HeaderConverter, VersionExtractor};

// 导出检测模块核心接口
pub use self::detector::{Scanner, SignatureMatcher, normalize_scheme};

// 导出传输与渲染接口
pub use self::report::{OutputFormat, UrlReport};
pub use self::transport::{HttpResponse, HttpTransport};

// 声明所有子模块
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod report;
pub mod rule;
pub mod transport;
pub mod utils;
