//! 应用程序容器
//!
//! 负责把配置装配成数据源、服务和命令

use crate::application::services::InventoryService;
use crate::cli::{Cli, Mode};
use crate::commands::{CommandContext, CommandHandler, HostCommand, ListCommand};
use crate::domain::repositories::DomainSource;
use crate::infrastructure::source::{FileDomainSource, UnconfiguredSource};
use std::path::PathBuf;
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    /// 来自 --inventory-file 或 INVENTORY_FILE
    pub inventory_file: Option<PathBuf>,
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            inventory_file: cli
                .inventory_file
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
        }
    }
}

/// 应用程序容器
pub struct Application {
    pub config: AppConfig,
    /// 清单构建服务
    pub inventory_service: Arc<InventoryService>,
}

impl Application {
    /// 创建应用程序实例
    pub fn new(config: AppConfig) -> Self {
        let source: Arc<dyn DomainSource> = match &config.inventory_file {
            Some(path) => Arc::new(FileDomainSource::new(path.clone())),
            None => Arc::new(UnconfiguredSource),
        };

        Self::with_source(config, source)
    }

    /// 使用指定数据源创建
    pub fn with_source(config: AppConfig, source: Arc<dyn DomainSource>) -> Self {
        let inventory_service = Arc::new(InventoryService::new(source));
        Self {
            config,
            inventory_service,
        }
    }

    /// 按运行模式选择命令
    pub fn command(&self, mode: Mode) -> Box<dyn CommandHandler> {
        match mode {
            Mode::List => Box::new(ListCommand::new(Arc::clone(&self.inventory_service))),
            Mode::Host(host) => Box::new(HostCommand::new(
                Arc::clone(&self.inventory_service),
                host,
            )),
        }
    }

    pub fn context(&self) -> CommandContext {
        CommandContext {
            verbose: self.config.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn test_list_without_file_is_input_unavailable() {
        let app = Application::new(AppConfig::default());
        let err = app.command(Mode::List).execute(&app.context()).unwrap_err();
        assert!(matches!(err, DomainError::InputUnavailable { .. }));
    }

    #[test]
    fn test_host_without_file_succeeds() {
        let app = Application::new(AppConfig::default());
        let output = app
            .command(Mode::Host(Some("web01".to_string())))
            .execute(&app.context())
            .unwrap();
        assert!(output.contains("\"hostvars\": {}"));
    }
}
