//! 命令处理器
//!
//! 每个运行模式一个模块，实现 CommandHandler trait

use crate::domain::error::Result;

pub mod host;
pub mod list;

pub use host::HostCommand;
pub use list::ListCommand;

/// 命令上下文
#[derive(Debug)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令，返回要写到 stdout 的内容
    fn execute(&self, ctx: &CommandContext) -> Result<String>;
}

/// 命令输出
pub trait CommandOutput {
    /// 打印结果
    fn print(&self);
}

impl CommandOutput for String {
    fn print(&self) {
        println!("{}", self);
    }
}
