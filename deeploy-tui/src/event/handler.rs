//! 事件处理器

use crossterm::event::{Event, KeyEventKind};

use crate::message::Message;

/// 把终端事件翻译成消息；不关心的事件返回 `None`
pub fn handle_event(event: Event) -> Option<Message> {
    match event {
        // 只处理 Press 事件，忽略 Release 和 Repeat
        // 避免 Windows 终端上按键重复问题的发生
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}
