//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成 Message
//!
//! ```text
//!     crossterm::Event::Key（Press）     → Message::Key
//!     crossterm::Event::Resize(w, h)     → Message::Resize { width, height }
//!     其他                               → 丢弃
//! ```
//!
//! 按键的含义由各页面的 update 决定；这里只定义快捷键表（keymap.rs）。
//!

mod handler;
mod keymap;

pub use handler::handle_event;
pub use keymap::{DefaultKeymap, KeyBinding};
