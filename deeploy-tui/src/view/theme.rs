//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeColors {
    /// 深色主题
    pub const fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            primary: Color::Rgb(255, 111, 60),
            success: Color::Rgb(78, 201, 176),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 当前配色
pub const COLORS: ThemeColors = ThemeColors::dark();

/// 常用样式
pub struct Styles;

impl Styles {
    /// 普通边框样式
    pub fn border() -> Style {
        Style::default().fg(COLORS.border)
    }

    /// 焦点边框样式
    pub fn border_focused() -> Style {
        Style::default().fg(COLORS.primary)
    }

    /// 聚焦文本（空状态、当前输入框）
    pub fn focused() -> Style {
        Style::default().fg(COLORS.primary)
    }

    /// Logo
    pub fn logo() -> Style {
        Style::default().fg(COLORS.fg).add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(COLORS.fg).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(COLORS.error)
    }

    pub fn muted() -> Style {
        Style::default().fg(COLORS.muted)
    }

    /// 进行中的状态（连接中、保存中）
    pub fn pending() -> Style {
        Style::default().fg(COLORS.success).add_modifier(Modifier::ITALIC)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
