//! 新建 / 编辑项目表单

use ratatui::text::{Line, Text};

use super::{field, spacer};
use crate::model::{FormField, ProjectFormPage};
use crate::view::components::{card_width, error_card, hints};
use crate::view::layout::{CENTER, join_vertical};
use crate::view::theme::Styles;

pub fn body(page: &ProjectFormPage) -> Text<'static> {
    let width = page.size.width;
    let heading = if page.is_edit() { "Edit Project" } else { "New Project" };

    let mut blocks = vec![
        Text::from(Line::styled(heading, Styles::title())),
        spacer(),
        field(
            "Title",
            page.title.value().to_string(),
            page.focus == FormField::Title,
            width,
        ),
    ];
    if let Some(validation) = &page.validation {
        blocks.push(Text::from(Line::styled(validation.clone(), Styles::error())));
    }
    blocks.push(field(
        "Description",
        page.description.value().to_string(),
        page.focus == FormField::Description,
        width,
    ));

    if let Some(error) = &page.error {
        blocks.push(error_card(card_width(width), error.clone()));
    }
    if page.submitting {
        blocks.push(Text::from(Line::styled("Saving...", Styles::pending())));
    }

    blocks.push(spacer());
    blocks.push(Text::from(hints(&[
        ("tab", "next"),
        ("enter", "save"),
        ("esc", "cancel"),
    ])));

    join_vertical(CENTER, blocks)
}
