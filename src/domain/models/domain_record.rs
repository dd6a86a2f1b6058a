//! 域记录实体模型 (domain.list 中的一行)

use crate::domain::error::{DomainError, Result};

/// 每行记录的字段数
pub const FIELD_COUNT: usize = 10;

/// 报表域标记
pub const REPORTING_FLAG: &str = "Y";

/// 一个域 (应用在某台主机上的部署单元)
///
/// 字段顺序与输入文件一致：
/// `name type app env rpt purpose serverName host tools_ver weblogic_ver`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: String,
    /// 域类型 ("web" / "app" / "prc" ...)
    pub kind: String,
    pub app: String,
    /// 原始环境名，未经报表域重映射
    pub env: String,
    pub rpt: String,
    pub purpose: String,
    pub server_name: String,
    pub host: String,
    pub tools_ver: String,
    pub weblogic_ver: String,
}

impl DomainRecord {
    /// 解析单行记录
    ///
    /// 规则：
    /// - 去掉行尾的 `\n` / `\r\n`（只影响最后一个字段 weblogic_ver）
    /// - 按单个空格切分，必须恰好 10 个字段
    /// - 不校验字段取值
    ///
    /// # Errors
    ///
    /// 字段数不是 10 时返回 `DomainError::MalformedRecord`。
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let fields: Vec<&str> = line.split(' ').collect();

        let [name, kind, app, env, rpt, purpose, server_name, host, tools_ver, weblogic_ver] =
            fields.as_slice()
        else {
            return Err(DomainError::MalformedRecord {
                line: line_no,
                found: fields.len(),
            });
        };

        Ok(Self {
            name: name.to_string(),
            kind: kind.to_string(),
            app: app.to_string(),
            env: env.to_string(),
            rpt: rpt.to_string(),
            purpose: purpose.to_string(),
            server_name: server_name.to_string(),
            host: host.to_string(),
            tools_ver: tools_ver.to_string(),
            weblogic_ver: weblogic_ver.to_string(),
        })
    }

    /// 是否为报表域
    #[must_use]
    pub fn is_reporting(&self) -> bool {
        self.rpt == REPORTING_FLAG
    }

    /// 生效环境名
    ///
    /// 报表域: qat → qrpt, prd → rpt；其余保持不变。
    /// 每次调用都从原始 env 重新计算，不做缓存。
    #[must_use]
    pub fn effective_env(&self) -> &str {
        match (self.is_reporting(), self.env.as_str()) {
            (true, "qat") => "qrpt",
            (true, "prd") => "rpt",
            (_, env) => env,
        }
    }
}
