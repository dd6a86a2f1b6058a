//! 领域层错误类型

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("无法读取清单文件 {path:?}: {reason}")]
    #[diagnostic(
        code(inventory::input_unavailable),
        help("通过 INVENTORY_FILE 环境变量或 --inventory-file 指定可读的 domain.list")
    )]
    InputUnavailable { path: PathBuf, reason: String },

    #[error("第 {line} 行格式错误: 需要 10 个字段，实际 {found} 个")]
    #[diagnostic(
        code(inventory::malformed_record),
        help("字段之间使用单个空格分隔: name type app env rpt purpose serverName host tools_ver weblogic_ver")
    )]
    MalformedRecord { line: usize, found: usize },

    #[error("序列化错误: {0}")]
    #[diagnostic(code(inventory::serialization))]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误码 + 完整错误链 + 帮助
    /// verbose = false: 仅一行关键信息
    pub fn report(&self, verbose: bool) {
        use std::error::Error as _;

        if !verbose {
            eprintln!("错误: {}", self);
            return;
        }

        match self.code() {
            Some(code) => eprintln!("❌ [{}] {}", code, self),
            None => eprintln!("❌ {}", self),
        }

        let mut current = self.source();
        while let Some(cause) = current {
            eprintln!("  └─ 原因: {}", cause);
            current = cause.source();
        }

        if let Some(help) = self.help() {
            eprintln!("  提示: {}", help);
        }
    }
}
