//! 项目相关消息

use deeploy_client::{Project, ProjectId};

use crate::model::Page;

/// 页面栈导航消息，由 Projects 分区处理
#[derive(Debug, Clone)]
pub enum SectionMessage {
    /// 压入新页面
    Push(Box<Page>),
    /// 弹出栈顶（栈内只剩一页时无效）
    Pop,
}

/// 项目数据生命周期消息
#[derive(Debug, Clone)]
pub enum ProjectMessage {
    /// 列表加载完成
    InitData(Vec<Project>),
    /// 新建成功
    Created(Project),
    /// 更新成功
    Updated(Project),
    /// 删除成功
    Deleted(ProjectId),
    /// 请求失败（网络、状态码、解析）
    Error(String),
}
