//! 项目分区：Logo + 栈顶页面

use ratatui::{layout::Flex, text::Text};

use super::{body, with_logo};
use crate::model::ProjectsPage;
use crate::view::layout::place;

pub fn view(page: &ProjectsPage) -> Text<'static> {
    match page.stack.active() {
        Some(active) => with_logo(page.size, body(active)),
        None => place(
            page.size.width,
            page.size.height,
            Flex::Center,
            Flex::Center,
            Text::from("Loading..."),
        ),
    }
}
