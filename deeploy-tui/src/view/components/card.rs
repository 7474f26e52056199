//! 卡片组件：圆角边框包住的文本块

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

use crate::view::layout::{draw, wrap};
use crate::view::theme::{COLORS, Styles};

/// 卡片默认宽度（含边框）
pub const CARD_WIDTH: u16 = 30;

/// 卡片
///
/// 宽度包含左右边框；内容按显示宽度截断，不会撑开卡片。
#[derive(Debug, Clone, Copy)]
pub struct Card {
    width: u16,
    padding: (u16, u16),
    border: Style,
    style: Style,
    align: Alignment,
}

impl Card {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            padding: (0, 1),
            border: Styles::border(),
            style: Style::default(),
            align: Alignment::Left,
        }
    }

    /// 内边距：(上下, 左右)
    pub fn padding(mut self, vertical: u16, horizontal: u16) -> Self {
        self.padding = (vertical, horizontal);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    /// 选中 / 聚焦时使用主色边框
    pub fn focused(self, focused: bool) -> Self {
        if focused {
            self.border_style(Styles::border_focused())
        } else {
            self
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.style = self.style.fg(color);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// 内容区宽度（去掉边框和左右内边距）
    pub fn content_width(&self) -> usize {
        let inner = usize::from(self.width.max(2)) - 2;
        inner - 2 * usize::from(self.padding.1).min(inner / 2)
    }

    pub fn render(&self, content: impl Into<Text<'static>>) -> Text<'static> {
        let content = content.into();
        let (vertical, horizontal) = self.padding;
        let rows = u16::try_from(content.lines.len().max(1)).unwrap_or(u16::MAX);
        let height = rows.saturating_add(vertical.saturating_mul(2)).saturating_add(2);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border)
            .padding(Padding::symmetric(horizontal, vertical));
        let paragraph = Paragraph::new(content)
            .style(self.style)
            .alignment(self.align)
            .block(block);

        draw(self.width.max(2), height, |area, buf| paragraph.render(area, buf))
    }
}

/// 错误卡片：红色边框和文字，长消息自动折行
pub fn error_card(width: u16, message: impl Into<String>) -> Text<'static> {
    let card = Card::new(width).border_style(Styles::error()).fg(COLORS.error);
    let lines: Vec<Line<'static>> = wrap(&message.into(), card.content_width())
        .into_iter()
        .map(Line::from)
        .collect();
    card.render(lines)
}
