//!
//! src/util/mod.rs
//! Util 层：与页面逻辑无关的基础设施
//!
//! ```text
//!     terminal.rs   raw mode / 备用屏幕的进入与恢复
//!     logging.rs    文件日志（tracing-subscriber + tracing-appender）
//!     env.rs        GO_ENV 决定的运行环境与资源路径
//! ```
//!
//! 启动顺序（见 main.rs）：
//!
//! ```text
//!     let _guard = init_logging(&Environment::from_env().log_dir())?;
//!     let mut terminal = init_terminal()?;
//!     let result = app::run(&mut terminal, app).await;
//!     restore_terminal(&mut terminal)?;     // 无论 run 成功与否
//! ```
//!
//! 日志必须先于终端初始化：进入备用屏幕后任何写到 stderr 的内容都会弄花界面。
//!

mod env;
mod logging;
mod terminal;

pub use env::{ENV_VAR, Environment};
pub use logging::{LOG_FILE_NAME, init_logging};
pub use terminal::{Term, init_terminal, restore_terminal};
