//! deeploy TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 页面状态与页面栈 (`model/`)
//! - **Message**: 消息与副作用命令 (`message/`)
//! - **Update**: 状态更新，返回 Command (`update/`)
//! - **View**: 渲染成文本 (`view/`)
//! - **Event**: 终端事件翻译 (`event/`)
//! - **Backend**: 项目服务与后台任务 (`backend/`)
//! - **Util**: 终端、日志、运行环境 (`util/`)
//!
//! 页面树：
//!
//! ```text
//!     App.page
//!       ├── Dashboard
//!       ├── Connect
//!       └── Projects ── stack: [ProjectList, ProjectForm | ProjectDelete]
//! ```
//!
//! `update` 和 `view` 都不做 I/O；网络请求包装在 `Command::Perform` 里，
//! 由 `app::run` 交给 tokio 执行，结果以消息的形式回到 `update`。
//! 因此整个导航逻辑可以在测试里不开终端、不连服务器地驱动。

pub mod app;
pub mod backend;
pub mod event;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;

#[cfg(test)]
mod test_utils;
