//! --host 命令处理器
//!
//! 主机变量已经在 --list 的 `_meta.hostvars` 中返回，这里只输出空清单。

use super::{CommandContext, CommandHandler};
use crate::application::services::InventoryService;
use crate::domain::error::Result;
use std::sync::Arc;

/// --host 命令（也用于无参数调用）
pub struct HostCommand {
    inventory_service: Arc<InventoryService>,
    host: Option<String>,
}

impl HostCommand {
    pub fn new(inventory_service: Arc<InventoryService>, host: Option<String>) -> Self {
        Self {
            inventory_service,
            host,
        }
    }
}

impl CommandHandler for HostCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<String> {
        if let Some(host) = &self.host {
            tracing::debug!(host = %host, "host lookup not supported, returning empty inventory");
        }
        self.inventory_service.empty().to_json_pretty()
    }
}
