//! Dashboard：菜单卡片

use ratatui::{
    layout::Alignment,
    text::{Line, Text},
};

use super::{spacer, with_logo};
use crate::model::{DashboardItem, DashboardPage};
use crate::view::components::{Card, card_width, hints};
use crate::view::layout::{CENTER, join_vertical};

pub fn view(page: &DashboardPage) -> Text<'static> {
    let width = card_width(page.size.width);

    let menu = DashboardItem::ALL.iter().enumerate().map(|(i, item)| {
        Card::new(width)
            .align(Alignment::Center)
            .focused(i == page.selected)
            .render(Line::from(format!("{} ({})", item.label(), item.shortcut())))
    });

    let body = join_vertical(
        CENTER,
        [
            join_vertical(CENTER, menu),
            spacer(),
            Text::from(hints(&[("j/k", "move"), ("enter", "open"), ("q", "quit")])),
        ],
    );
    with_logo(page.size, body)
}
