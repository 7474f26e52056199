//! 各页面的渲染
//!
//! 顶层页面（dashboard / connect / projects）自带 Logo 并铺满整个区域；
//! 栈内页面（list / form / delete）只提供 `body`，由项目分区放在 Logo 下方。

pub mod connect;
pub mod dashboard;
pub mod project_delete;
pub mod project_form;
pub mod project_list;
pub mod projects;

use ratatui::{
    layout::{Flex, Size},
    text::{Line, Text},
};

use crate::model::Page;
use crate::view::components::{Card, card_width, logo};
use crate::view::layout::{CENTER, END, join_horizontal, join_vertical, pad_line, place};
use crate::view::theme::Styles;

/// 栈内页面的主体（不含 Logo）
pub fn body(page: &Page) -> Text<'static> {
    match page {
        Page::ProjectList(list) => project_list::body(list),
        Page::ProjectForm(form) => project_form::body(form),
        Page::ProjectDelete(delete) => project_delete::body(delete),
        Page::Dashboard(dashboard) => dashboard::view(dashboard),
        Page::Connect(connect) => connect::view(connect),
        Page::Projects(projects) => projects::view(projects),
    }
}

/// Logo + 主体，居中铺满 `size`
pub(crate) fn with_logo(size: Size, body: Text<'static>) -> Text<'static> {
    place(
        size.width,
        size.height,
        Flex::Center,
        Flex::Center,
        join_vertical(CENTER, [logo(), body]),
    )
}

/// 标签列宽度（右对齐）
const LABEL_WIDTH: usize = 12;

/// 带标签的输入框：标签在左，与卡片中线对齐
pub(crate) fn field(
    label: &'static str,
    mut value: String,
    focused: bool,
    available: u16,
) -> Text<'static> {
    if focused {
        value.push('▏');
    }
    let label = pad_line(Line::styled(label, Styles::muted()), LABEL_WIDTH, END);
    let card = Card::new(card_width(available)).focused(focused).render(Line::from(value));
    join_horizontal(CENTER, [Text::from(label), Text::from(" "), card])
}

/// 空行
pub(crate) fn spacer() -> Text<'static> {
    Text::from(Line::default())
}
