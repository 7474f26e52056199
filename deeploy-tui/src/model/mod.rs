//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 这一层只包含数据结构和纯粹的状态变换（选择移动、列表合并等），
//! 不发起任何 I/O。消息的解释在 Update 层，渲染在 View 层。
//!
//!
//! 有模块结构：
//! ```text
//!     src/model/mod.rs
//!         mod app;            // 路由：当前顶层页面 + 终端尺寸 + 退出标志
//!         mod context;        // 构造副作用所需的服务句柄
//!         mod page;           // Page 枚举：所有页面的封闭集合
//!         mod stack;          // PageStack：分区内的页面栈
//!         pub mod state;      // 各页面的状态
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面树
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     App
//!      └── Page（顶层，ChangePage 替换）
//!            ├── Dashboard
//!            ├── Connect
//!            └── Projects（分区，持有 PageStack）
//!                  ├── ProjectList      （栈底，首次 Resize 时创建）
//!                  ├── ProjectForm      （Push）
//!                  └── ProjectDelete    （Push）
//!
//!     页面之间没有反向引用；导航目标作为值随消息传递。
//! ```
//!

mod app;
mod context;
mod page;
mod stack;
pub mod state;

pub use app::App;
pub use context::Context;
pub use page::Page;
pub use stack::PageStack;
pub use state::{
    ConnectField, ConnectPage, DashboardItem, DashboardPage, FormField, ProjectDeletePage,
    ProjectFormPage, ProjectListPage, ProjectsPage, TextInput,
};
