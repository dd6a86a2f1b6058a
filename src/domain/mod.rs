//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 域记录与清单文档
//! - repositories: 数据源接口（输入端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, Result};
pub use models::{DomainEntry, DomainRecord, Inventory};
pub use repositories::{DomainSource, InMemorySource};
