//!
//! src/message/mod.rs
//! Message 层：事件消息与副作用定义
//!
//! 所有输入、导航意图和异步结果都通过 Message 表达，
//! Update 层消费 Message 并返回一个 Command（副作用描述）。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 Message
//!         mod project;        // 项目数据生命周期消息 + 栈导航消息
//!         mod connect;        // 连接页消息
//!         mod command;        // Command：副作用
//!
//!
//! 消息分为几族：
//!     - 输入：Key / Resize
//!     - 全局导航：ChangePage / Quit
//!     - 栈导航：Section(Push / Pop)
//!     - 项目数据：Project(InitData / Created / Updated / Deleted / Error)
//!     - 连接：Connect(Connected / Failed)
//!
//!
//! Command 是一个值，运行时（app.rs）负责执行它：
//!     - Command::None                  什么也不做
//!     - Command::Message(msg)          立即把 msg 放入队列
//!     - Command::Perform(future)       在 tokio 上运行，完成后把结果消息放入队列
//!     - Command::Batch(vec)            依次展开；同一批中的立即消息按顺序入队，
//!                                      先于该批中任何 future 的结果
//!

mod app;
mod command;
mod connect;
mod project;

pub use app::Message;
pub use command::Command;
pub use connect::ConnectMessage;
pub use project::{ProjectMessage, SectionMessage};
