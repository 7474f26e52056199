//! 页面枚举
//!
//! `init` / `update` 在 `update/` 中实现，`view` 在 `view/` 中实现。

use super::state::{
    ConnectPage, DashboardPage, ProjectDeletePage, ProjectFormPage, ProjectListPage, ProjectsPage,
};

/// 页面枚举
#[derive(Debug, Clone)]
pub enum Page {
    /// 首页菜单
    Dashboard(DashboardPage),
    /// 服务器地址与 token
    Connect(ConnectPage),
    /// 项目分区（持有页面栈）
    Projects(ProjectsPage),
    /// 项目列表
    ProjectList(ProjectListPage),
    /// 新建 / 编辑项目
    ProjectForm(ProjectFormPage),
    /// 删除确认
    ProjectDelete(ProjectDeletePage),
}

impl Default for Page {
    fn default() -> Self {
        Self::Dashboard(DashboardPage::new())
    }
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard(_) => "Dashboard",
            Page::Connect(_) => "Connect",
            Page::Projects(_) | Page::ProjectList(_) => "Projects",
            Page::ProjectForm(form) if form.is_edit() => "Edit Project",
            Page::ProjectForm(_) => "New Project",
            Page::ProjectDelete(_) => "Delete Project",
        }
    }
}

impl From<DashboardPage> for Page {
    fn from(page: DashboardPage) -> Self {
        Self::Dashboard(page)
    }
}

impl From<ConnectPage> for Page {
    fn from(page: ConnectPage) -> Self {
        Self::Connect(page)
    }
}

impl From<ProjectsPage> for Page {
    fn from(page: ProjectsPage) -> Self {
        Self::Projects(page)
    }
}

impl From<ProjectListPage> for Page {
    fn from(page: ProjectListPage) -> Self {
        Self::ProjectList(page)
    }
}

impl From<ProjectFormPage> for Page {
    fn from(page: ProjectFormPage) -> Self {
        Self::ProjectForm(page)
    }
}

impl From<ProjectDeletePage> for Page {
    fn from(page: ProjectDeletePage) -> Self {
        Self::ProjectDelete(page)
    }
}
