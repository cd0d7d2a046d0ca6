//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RswhatwebError {
    // 签名目录相关错误（加载期致命，不进入扫描流程）
    #[error("签名正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 网络相关错误（按URL恢复，不中断批量扫描）
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
}

// 全局Result类型
pub type RswResult<T> = Result<T, RswhatwebError>;
