//! 文件日志
//!
//! TUI 占用整个终端，日志只能写文件。代码里统一用 `log` 宏，
//! 由 tracing-subscriber 的 `tracing-log` 桥接到这里安装的 subscriber。

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "deeploy-tui.log";

/// `RUST_LOG` 未设置时的过滤规则
const DEFAULT_FILTER: &str = "info";

/// 安装全局 subscriber，日志追加写入 `dir/deeploy-tui.log`
///
/// 返回的 [`WorkerGuard`] 需要持有到程序结束，drop 时才会把缓冲写完。
pub fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    let (writer, guard) = open_log_writer(dir)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(env_filter()),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    Ok(tracing_appender::non_blocking(file))
}
