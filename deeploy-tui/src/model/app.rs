//! 应用主状态结构

use ratatui::layout::Size;

use super::{Context, Page};

/// 应用主状态（顶层路由）
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前顶层页面
    pub page: Page,

    /// 最近一次 Resize 的终端尺寸
    pub size: Size,

    /// 服务句柄
    pub context: Context,
}

impl App {
    /// 创建新的应用实例，初始页面为 Dashboard
    pub fn new(context: Context) -> Self {
        Self::with_page(context, Page::default())
    }

    pub fn with_page(context: Context, page: Page) -> Self {
        Self {
            should_quit: false,
            page,
            size: Size::default(),
            context,
        }
    }
}
