//! --list 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::InventoryService;
use crate::domain::error::Result;
use std::sync::Arc;

/// --list 命令
pub struct ListCommand {
    inventory_service: Arc<InventoryService>,
}

impl ListCommand {
    pub fn new(inventory_service: Arc<InventoryService>) -> Self {
        Self { inventory_service }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<String> {
        let inventory = self.inventory_service.build()?;
        if ctx.verbose {
            tracing::info!(
                groups = inventory.groups.len(),
                hosts = inventory.meta.hostvars.len(),
                "inventory ready"
            );
        }
        inventory.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DomainRecord;
    use crate::domain::repositories::InMemorySource;

    #[test]
    fn test_list_outputs_groups_and_meta() {
        let record = DomainRecord::parse_line("domA app cs dev N main srvA hostA 8.5 PT8.60", 2)
            .unwrap();
        let service = InventoryService::new(Arc::new(InMemorySource::new(vec![record])));

        let output = ListCommand::new(Arc::new(service))
            .execute(&CommandContext { verbose: false })
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["csdev"]["hosts"], serde_json::json!(["hostA"]));
        assert_eq!(
            value["_meta"]["hostvars"]["hostA"]["domains"][0]["server_name"],
            "srvA"
        );
    }
}
