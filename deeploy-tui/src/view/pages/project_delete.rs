//! 删除确认

use ratatui::{
    layout::Alignment,
    text::{Line, Text},
};

use super::spacer;
use crate::model::ProjectDeletePage;
use crate::view::components::{Card, card_width, error_card, hints};
use crate::view::layout::{CENTER, join_vertical};
use crate::view::theme::Styles;

pub fn body(page: &ProjectDeletePage) -> Text<'static> {
    let width = card_width(page.size.width);

    let confirm = Card::new(width)
        .padding(1, 1)
        .align(Alignment::Center)
        .render(vec![
            Line::from("Delete project?"),
            Line::styled(page.project.title.clone(), Styles::focused()),
        ]);

    let mut blocks = vec![confirm];
    if let Some(error) = &page.error {
        blocks.push(error_card(width, error.clone()));
    }
    if page.pending {
        blocks.push(Text::from(Line::styled("Deleting...", Styles::pending())));
    }

    blocks.push(spacer());
    blocks.push(Text::from(hints(&[("y", "confirm"), ("n", "cancel")])));

    join_vertical(CENTER, blocks)
}
