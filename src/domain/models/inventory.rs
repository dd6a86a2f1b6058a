//! 清单文档模型 (Ansible 动态清单 JSON 结构)

use super::domain_record::DomainRecord;
use crate::domain::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 所有主机使用的 Python 解释器
pub const PYTHON_INTERPRETER: &str = "python3";

/// 按首次出现顺序排列、不重复的主机名列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostList(Vec<String>);

impl HostList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加主机，已存在则忽略。返回是否为新主机
    pub fn insert(&mut self, host: &str) -> bool {
        if self.contains(host) {
            return false;
        }
        self.0.push(host.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, host: &str) -> bool {
        self.0.iter().any(|h| h == host)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// 主机分组
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub hosts: HostList,
}

/// hostvars 中的单个域条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub app: String,
    /// 重映射后的环境名
    pub env: String,
    pub rpt: String,
    pub purpose: String,
    pub server_name: String,
    pub tools_ver: String,
    pub weblogic_ver: String,
}

impl From<&DomainRecord> for DomainEntry {
    fn from(record: &DomainRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind.clone(),
            app: record.app.clone(),
            env: record.effective_env().to_string(),
            rpt: record.rpt.clone(),
            purpose: record.purpose.clone(),
            server_name: record.server_name.clone(),
            tools_ver: record.tools_ver.clone(),
            weblogic_ver: record.weblogic_ver.clone(),
        }
    }
}

/// 单台主机的变量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVars {
    pub domains: Vec<DomainEntry>,
    pub ansible_python_interpreter: String,
}

impl Default for HostVars {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            ansible_python_interpreter: PYTHON_INTERPRETER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// 完整清单文档
///
/// 顶层是分组名 → `{ "hosts": [...] }`，外加保留键 `_meta`。
/// `meta` 声明在 `groups` 之后，同名分组会被 `_meta` 覆盖。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(flatten)]
    pub groups: BTreeMap<String, Group>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl Inventory {
    /// 空清单 `{"_meta": {"hostvars": {}}}`
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// 确保分组存在并加入主机
    pub fn add_to_group(&mut self, group: &str, host: &str) -> bool {
        self.groups
            .entry(group.to_string())
            .or_default()
            .hosts
            .insert(host)
    }

    /// 追加主机上的一个域，首次出现时初始化 hostvars
    pub fn add_domain(&mut self, host: &str, entry: DomainEntry) {
        self.meta
            .hostvars
            .entry(host.to_string())
            .or_default()
            .domains
            .push(entry);
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn host_names(&self) -> impl Iterator<Item = &str> {
        self.meta.hostvars.keys().map(String::as_str)
    }

    /// 序列化为 JSON：每一层的键按字典序排列，2 空格缩进
    ///
    /// 先转成 `serde_json::Value`，其对象类型为 `BTreeMap`，
    /// 结构体字段因此也会被排序。
    ///
    /// # Errors
    ///
    /// 序列化失败时返回 `DomainError::Serialization`。
    pub fn to_json_pretty(&self) -> Result<String> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
