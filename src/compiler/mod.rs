//! 编译模块：将内置签名表编译为可执行的正则模式
pub mod compiler;
pub mod pattern;

pub use self::compiler::RuleCompiler;
pub use self::pattern::{CompiledPattern, CompiledRule, CompiledSignature, SignatureCatalog};
