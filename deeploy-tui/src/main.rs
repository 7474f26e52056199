//!
//! main.rs
//! deeploy TUI 的程序入口
//!
//! fn main() {
//!
//!     init_logging()          // 日志写文件，目录由 GO_ENV 决定
//!     init_terminal()         // raw mode + 备用屏幕
//!     App::new(context)       // 首页为 Dashboard，服务读写 ~/.config/deeploy/config.json
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use deeploy_client::ConfigStore;
use deeploy_tui::app;
use deeploy_tui::backend::ApiProjectService;
use deeploy_tui::model::{App, Context};
use deeploy_tui::util::{Environment, init_logging, init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {e:#}");
            eprintln!("deeploy: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 1. 日志（必须在进入备用屏幕之前）
    let environment = Environment::from_env();
    let _guard = init_logging(&environment.log_dir())?;
    log::info!("Starting deeploy TUI ({environment:?})");

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let service = Arc::new(ApiProjectService::new(ConfigStore::default()));
    let app = App::new(Context::new(service));

    // 4. 运行主循环
    let result = app::run(&mut terminal, app).await;

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
