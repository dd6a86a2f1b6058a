//! psoft-inventory - PeopleSoft 域清单 → Ansible 动态清单
//!
//! 分层结构，遵循 Clean Architecture 原则

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

// 重新导出常用类型
pub use domain::{DomainError, DomainRecord, Inventory, Result};
