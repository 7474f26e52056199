//! 快捷键提示行

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::view::theme::Styles;

/// `(按键, 说明)` 列表渲染成一行，用 ` │ ` 分隔
pub fn hints(items: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 4);

    for (i, (key, desc)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    Line::from(spans)
}
