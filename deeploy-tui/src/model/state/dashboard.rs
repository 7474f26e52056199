//! 首页状态

use ratatui::layout::Size;

/// 首页菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardItem {
    Projects,
    Connect,
    Quit,
}

impl DashboardItem {
    pub const ALL: [DashboardItem; 3] = [
        DashboardItem::Projects,
        DashboardItem::Connect,
        DashboardItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardItem::Projects => "Projects",
            DashboardItem::Connect => "Connect",
            DashboardItem::Quit => "Quit",
        }
    }

    /// 快捷键
    pub fn shortcut(self) -> char {
        match self {
            DashboardItem::Projects => 'p',
            DashboardItem::Connect => 'c',
            DashboardItem::Quit => 'q',
        }
    }
}

/// 首页状态
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    /// 当前选中的菜单项索引
    pub selected: usize,
    pub size: Size,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_item(&self) -> DashboardItem {
        DashboardItem::ALL[self.selected % DashboardItem::ALL.len()]
    }

    /// 选择下一项（循环）
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % DashboardItem::ALL.len();
    }

    /// 选择上一项（循环）
    pub fn select_previous(&mut self) {
        let len = DashboardItem::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }
}
