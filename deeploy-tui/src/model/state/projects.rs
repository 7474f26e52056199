//! 项目分区状态

use ratatui::layout::Size;

use crate::model::PageStack;

/// 项目分区：持有页面栈，栈底是项目列表
///
/// 栈在第一次收到 `Resize` 时才创建列表页。
#[derive(Debug, Clone, Default)]
pub struct ProjectsPage {
    pub stack: PageStack,
    /// 最近一次 Resize，Push 后重新发给新页面
    pub size: Size,
}

impl ProjectsPage {
    pub fn new() -> Self {
        Self::default()
    }
}
