//! 连接页：服务器地址 + token

use ratatui::text::{Line, Text};

use super::{field, spacer, with_logo};
use crate::model::{ConnectField, ConnectPage};
use crate::view::components::{card_width, error_card, hints};
use crate::view::layout::{CENTER, join_vertical};
use crate::view::theme::Styles;

pub fn view(page: &ConnectPage) -> Text<'static> {
    let width = page.size.width;

    let mut blocks = vec![
        Text::from(Line::styled("Connect to server", Styles::title())),
        spacer(),
        field(
            "Server",
            page.server.value().to_string(),
            page.focus == ConnectField::Server,
            width,
        ),
        field(
            "Token",
            page.token.masked(),
            page.focus == ConnectField::Token,
            width,
        ),
    ];

    if let Some(error) = &page.error {
        blocks.push(error_card(card_width(width), error.clone()));
    }
    if page.connecting {
        blocks.push(Text::from(Line::styled("Connecting...", Styles::pending())));
    }

    blocks.push(spacer());
    blocks.push(Text::from(hints(&[
        ("tab", "next"),
        ("enter", "connect"),
        ("esc", "back"),
    ])));

    with_logo(page.size, join_vertical(CENTER, blocks))
}
