//! 删除确认状态

use deeploy_client::Project;
use ratatui::layout::Size;

/// 删除确认页
#[derive(Debug, Clone)]
pub struct ProjectDeletePage {
    pub project: Project,
    /// 已确认，等待结果
    pub pending: bool,
    pub error: Option<String>,
    pub size: Size,
}

impl ProjectDeletePage {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            pending: false,
            error: None,
            size: Size::default(),
        }
    }
}
