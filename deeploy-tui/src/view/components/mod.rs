//! 通用 UI 组件

mod card;
mod hints;

pub use card::{CARD_WIDTH, Card, error_card};
pub use hints::hints;

use ratatui::text::{Line, Text};

use crate::view::theme::Styles;

/// Logo 占用的行数（含下方空行）
pub const LOGO_HEIGHT: u16 = 2;

/// 顶部 Logo
pub fn logo() -> Text<'static> {
    Text::from(vec![
        Line::styled("🔥deeploy.sh", Styles::logo()),
        Line::default(),
    ])
}

/// 卡片宽度：不超过可用宽度
pub fn card_width(available: u16) -> u16 {
    CARD_WIDTH.min(available)
}
