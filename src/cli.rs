//! CLI 参数定义

use clap::Parser;
use std::path::PathBuf;

/// 清单文件路径的环境变量
pub const INVENTORY_FILE_ENV: &str = "INVENTORY_FILE";

/// PeopleSoft 域清单 → Ansible 动态清单
#[derive(Parser, Debug)]
#[command(
    name = "psoft-inventory",
    version,
    about = "PeopleSoft 域清单转换为 Ansible 动态清单",
    long_about = "读取 domain.list（每行一个域），按 app / env / app+env / type+env 分组输出 Ansible 动态清单 JSON"
)]
pub struct Cli {
    /// 输出完整清单
    #[arg(long)]
    pub list: bool,

    /// 查询单台主机（未实现，始终返回空清单）
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// domain.list 路径
    #[arg(long, value_name = "PATH", env = "INVENTORY_FILE")]
    pub inventory_file: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 运行模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--list`
    List,
    /// `--host <name>` 或无参数
    Host(Option<String>),
}

impl Cli {
    /// `--list` 优先于 `--host`
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else {
            Mode::Host(self.host.clone())
        }
    }
}
