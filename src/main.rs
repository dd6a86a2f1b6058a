//! psoft-inventory 主程序入口
//!
//! 设计原则：
//! - stdout 只输出清单 JSON
//! - 日志与错误写 stderr，失败退出码为 1

use clap::Parser;
use psoft_inventory::app::{AppConfig, Application};
use psoft_inventory::cli::Cli;
use psoft_inventory::commands::CommandOutput;
use psoft_inventory::infrastructure::logging;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::from(&cli);
    let app = Application::new(config);

    let mode = cli.mode();
    tracing::debug!(?mode, "selected mode");

    match app.command(mode).execute(&app.context()) {
        Ok(output) => output.print(),
        Err(e) => {
            e.report(app.config.verbose);
            std::process::exit(1);
        }
    }
}
