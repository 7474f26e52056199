//! 项目列表：每个项目一张卡片，选中项主色边框

use ratatui::{
    layout::Alignment,
    text::{Line, Text},
};

use super::spacer;
use crate::model::ProjectListPage;
use crate::view::components::{Card, LOGO_HEIGHT, card_width, error_card, hints};
use crate::view::layout::{CENTER, join_vertical};
use crate::view::theme::Styles;

/// 卡片高度
const CARD_HEIGHT: u16 = 3;
/// 空行 + 提示行
const FOOTER_HEIGHT: u16 = 2;

pub fn body(page: &ProjectListPage) -> Text<'static> {
    let width = card_width(page.size.width);

    let content = if let Some(error) = &page.error {
        error_card(width, error.clone())
    } else if page.items.is_empty() {
        Card::new(width)
            .align(Alignment::Center)
            .render(Line::styled("No projects yet", Styles::focused()))
    } else {
        let capacity = page.size.height.saturating_sub(LOGO_HEIGHT + FOOTER_HEIGHT) / CARD_HEIGHT;
        let (start, end) = window(page.items.len(), page.selected, usize::from(capacity));

        join_vertical(
            CENTER,
            page.items[start..end].iter().enumerate().map(|(i, project)| {
                Card::new(width)
                    .focused(start + i == page.selected)
                    .render(Line::from(project.title.clone()))
            }),
        )
    };

    join_vertical(
        CENTER,
        [
            content,
            spacer(),
            Text::from(hints(&[
                ("j/k", "move"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("r", "reload"),
                ("esc", "back"),
            ])),
        ],
    )
}

/// 可见区间 `[start, end)`，保证选中项可见；容量至少为 1
fn window(len: usize, selected: usize, capacity: usize) -> (usize, usize) {
    let visible = len.min(capacity.max(1));
    let start = (selected + 1).saturating_sub(visible).min(len - visible);
    (start, start + visible)
}
