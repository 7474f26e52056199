//! 副作用构造函数
//!
//! 每个函数返回一个 `Command::Perform`，future 恰好产生一条消息。

use deeploy_client::{ClientConfig, ClientError, Project, ProjectId, ProjectRequest};

use crate::message::{Command, ConnectMessage, Message, ProjectMessage};
use crate::model::{ConnectPage, Context};

/// `GET /api/projects` → `InitData`
pub fn load_projects(ctx: &Context) -> Command {
    let service = ctx.service();
    Command::perform(async move {
        match service.list_projects().await {
            Ok(projects) => {
                log::info!("[tasks] Loaded {} projects", projects.len());
                Message::Project(ProjectMessage::InitData(projects))
            }
            Err(e) => failure("list projects", e),
        }
    })
}

/// `POST /api/projects` → `Created`
pub fn create_project(ctx: &Context, request: ProjectRequest) -> Command {
    let service = ctx.service();
    Command::perform(async move {
        match service.create_project(request).await {
            Ok(project) => Message::Project(ProjectMessage::Created(project)),
            Err(e) => failure("create project", e),
        }
    })
}

/// `PUT /api/projects/{id}` → `Updated`
pub fn update_project(ctx: &Context, project: &Project, request: ProjectRequest) -> Command {
    let service = ctx.service();
    let id = project.id.clone();
    Command::perform(async move {
        match service.update_project(id, request).await {
            Ok(project) => Message::Project(ProjectMessage::Updated(project)),
            Err(e) => failure("update project", e),
        }
    })
}

/// `DELETE /api/projects/{id}` → `Deleted`
pub fn delete_project(ctx: &Context, id: ProjectId) -> Command {
    let service = ctx.service();
    Command::perform(async move {
        match service.delete_project(id.clone()).await {
            Ok(()) => Message::Project(ProjectMessage::Deleted(id)),
            Err(e) => failure("delete project", e),
        }
    })
}

/// 校验并保存凭证 → `Connected` / `Failed`
pub fn connect(ctx: &Context, config: ClientConfig) -> Command {
    let service = ctx.service();
    Command::perform(async move {
        let server = config.server.clone();
        match service.connect(config).await {
            Ok(()) => {
                log::info!("[tasks] Connected to {server}");
                Message::Connect(ConnectMessage::Connected)
            }
            Err(ClientError::Unauthorized) => {
                log::warn!("[tasks] {server} rejected the token");
                Message::Connect(ConnectMessage::Failed("invalid token".to_string()))
            }
            Err(e) => {
                log::warn!("[tasks] Connect to {server} failed: {e}");
                Message::Connect(ConnectMessage::Failed(e.to_string()))
            }
        }
    })
}

/// 把请求失败翻译成消息
fn failure(action: &str, error: ClientError) -> Message {
    if error.requires_reconnect() {
        log::warn!("[tasks] {action}: {error}, redirecting to connect");
        return Message::change_page(ConnectPage::new());
    }

    if error.is_expected() {
        log::warn!("[tasks] {action} failed: {error}");
    } else {
        log::error!("[tasks] {action} failed: {error}");
    }
    Message::Project(ProjectMessage::Error(error.to_string()))
}
