//!
//! src/backend/mod.rs
//! Backend 层：与 deeploy API 交互
//!
//! Update 层不直接发请求，而是通过 `tasks` 构造 `Command::Perform`；
//! future 内部调用 `ProjectService`，再把结果翻译成消息：
//!
//! ```text
//!     成功                      → Project(InitData / Created / Updated / Deleted)
//!     未连接 / 配置无效 / 401    → ChangePage(Connect)
//!     其他失败                  → Project(Error)
//! ```
//!
//!
//! 有模块结构：
//! ```text
//!     src/backend/mod.rs
//!         mod project_service;    // ProjectService trait 及其实现
//!         pub mod tasks;          // 副作用构造函数
//! ```
//!

mod project_service;
pub mod tasks;

pub use project_service::{ApiProjectService, MockProjectService, ProjectService};
