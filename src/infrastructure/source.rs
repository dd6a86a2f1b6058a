//! domain.list 文件数据源

use crate::domain::error::{DomainError, Result};
use crate::domain::models::DomainRecord;
use crate::domain::repositories::DomainSource;
use std::path::{Path, PathBuf};

/// 文件数据源
///
/// 第一行是表头，直接丢弃；空行跳过；其余每行一条记录。
pub struct FileDomainSource {
    path: PathBuf,
}

impl FileDomainSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 解析文件内容，行号从 1 开始（表头为第 1 行）
    ///
    /// # Errors
    ///
    /// 任一数据行字段数不是 10 时返回 `DomainError::MalformedRecord`。
    pub fn parse(content: &str) -> Result<Vec<DomainRecord>> {
        content
            .split_inclusive('\n')
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim_end_matches(['\n', '\r']).is_empty())
            .map(|(idx, line)| DomainRecord::parse_line(line, idx + 1))
            .collect()
    }
}

impl DomainSource for FileDomainSource {
    fn load(&self) -> Result<Vec<DomainRecord>> {
        tracing::debug!(path = %self.path.display(), "reading inventory file");

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| DomainError::InputUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        Self::parse(&content)
    }
}

/// 未配置路径时使用的数据源，读取即报错
pub struct UnconfiguredSource;

impl DomainSource for UnconfiguredSource {
    fn load(&self) -> Result<Vec<DomainRecord>> {
        Err(DomainError::InputUnavailable {
            path: PathBuf::from("$INVENTORY_FILE"),
            reason: "INVENTORY_FILE 未设置".to_string(),
        })
    }
}
