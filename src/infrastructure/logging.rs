//! 日志初始化
//!
//! 日志只写 stderr，stdout 留给清单 JSON。

use tracing_subscriber::EnvFilter;

/// 默认日志级别
pub const DEFAULT_LEVEL: &str = "warn";

/// 详细模式日志级别
pub const VERBOSE_LEVEL: &str = "debug";

/// 初始化 tracing
///
/// `RUST_LOG` 优先；否则按 verbose 选择级别。可重复调用，后续调用无效果。
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
