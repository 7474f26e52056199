//! 单元测试辅助

use std::sync::Arc;

use deeploy_client::{Project, ProjectId};

use crate::backend::MockProjectService;
use crate::model::Context;

pub fn project(id: i64, title: &str) -> Project {
    Project {
        id: ProjectId::from(id),
        title: title.to_string(),
        description: String::new(),
    }
}

/// 已连接、带初始项目的上下文
pub fn context_with(projects: Vec<Project>) -> (Context, Arc<MockProjectService>) {
    let service = Arc::new(MockProjectService::with_projects(projects));
    (Context::new(service.clone()), service)
}

/// 未连接的上下文
pub fn disconnected() -> (Context, Arc<MockProjectService>) {
    let service = Arc::new(MockProjectService::new());
    (Context::new(service.clone()), service)
}

pub fn disconnected_context() -> Context {
    disconnected().0
}
