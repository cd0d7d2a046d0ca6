//! 签名模块：签名数据模型与内置签名表
pub mod builtin;
pub mod model;

// 导出核心接口
pub use self::builtin::BUILTIN;
pub use self::model::{DetectionResult, Rule, Signature};
