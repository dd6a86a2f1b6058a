//! 数据源接口定义（输入端口）

use crate::domain::error::Result;
use crate::domain::models::DomainRecord;

/// 域记录数据源
pub trait DomainSource {
    /// 按输入顺序读取全部记录（不含表头）
    fn load(&self) -> Result<Vec<DomainRecord>>;
}

/// 内存数据源，供测试和嵌入使用
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<DomainRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<DomainRecord>) -> Self {
        Self { records }
    }
}

impl DomainSource for InMemorySource {
    fn load(&self) -> Result<Vec<DomainRecord>> {
        Ok(self.records.clone())
    }
}
