//! Infrastructure Layer - 基础设施
//!
//! 包含：
//! - source: domain.list 文件数据源
//! - logging: tracing 日志初始化

pub mod logging;
pub mod source;

pub use source::{FileDomainSource, UnconfiguredSource};
