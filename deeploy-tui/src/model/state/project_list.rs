//! 项目列表状态

use deeploy_client::{Project, ProjectId};
use ratatui::layout::Size;

/// 项目列表状态
///
/// 始终满足 `selected < max(1, items.len())`。
#[derive(Debug, Clone, Default)]
pub struct ProjectListPage {
    /// 项目列表
    pub items: Vec<Project>,
    /// 当前选中的索引
    pub selected: usize,
    /// 错误信息（设置时替代列表显示）
    pub error: Option<String>,
    pub size: Size,
}

impl ProjectListPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取当前选中的项目
    pub fn selected_project(&self) -> Option<&Project> {
        self.items.get(self.selected)
    }

    /// 选择下一项，到底后回到第一项
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// 选择上一项，到顶后跳到最后一项
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.items.len() - 1);
    }

    /// 替换整个列表
    pub fn set_items(&mut self, items: Vec<Project>) {
        self.items = items;
        self.error = None;
        self.clamp_selection();
    }

    /// 追加新建的项目，选中项不变
    pub fn append(&mut self, project: Project) {
        self.items.push(project);
    }

    /// 按 id 替换；id 不存在时忽略，返回是否替换
    pub fn replace(&mut self, project: Project) -> bool {
        match self.items.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        }
    }

    /// 按 id 删除并收紧选中项；id 不存在时忽略，返回是否删除
    pub fn remove(&mut self, id: &ProjectId) -> bool {
        let Some(index) = self.items.iter().position(|p| &p.id == id) else {
            return false;
        };
        self.items.remove(index);
        self.clamp_selection();
        true
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}
