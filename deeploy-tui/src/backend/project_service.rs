//! 项目服务

use async_trait::async_trait;
use deeploy_client::{
    ClientConfig, ClientError, ClientResult, ConfigStore, DeeployClient, Project, ProjectId,
    ProjectRequest,
};
use tokio::sync::RwLock;

/// 项目服务 trait
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// 获取所有项目
    async fn list_projects(&self) -> ClientResult<Vec<Project>>;

    /// 创建项目
    async fn create_project(&self, request: ProjectRequest) -> ClientResult<Project>;

    /// 更新项目
    async fn update_project(&self, id: ProjectId, request: ProjectRequest)
    -> ClientResult<Project>;

    /// 删除项目
    async fn delete_project(&self, id: ProjectId) -> ClientResult<()>;

    /// 校验凭证并保存配置
    async fn connect(&self, config: ClientConfig) -> ClientResult<()>;
}

/// 通过 HTTP 访问 deeploy API
///
/// 每次调用都重新读取配置文件。
#[derive(Debug, Clone, Default)]
pub struct ApiProjectService {
    store: ConfigStore,
}

impl ApiProjectService {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    async fn client(&self) -> ClientResult<DeeployClient> {
        DeeployClient::from_store(&self.store).await
    }
}

#[async_trait]
impl ProjectService for ApiProjectService {
    async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.client().await?.list_projects().await
    }

    async fn create_project(&self, request: ProjectRequest) -> ClientResult<Project> {
        self.client().await?.create_project(&request).await
    }

    async fn update_project(
        &self,
        id: ProjectId,
        request: ProjectRequest,
    ) -> ClientResult<Project> {
        self.client().await?.update_project(&id, &request).await
    }

    async fn delete_project(&self, id: ProjectId) -> ClientResult<()> {
        self.client().await?.delete_project(&id).await
    }

    async fn connect(&self, config: ClientConfig) -> ClientResult<()> {
        // 先用新凭证请求一次，成功后才落盘
        let client = DeeployClient::new(&config)?;
        client.list_projects().await?;
        self.store.save(&config).await
    }
}

/// Mock 项目服务（用于开发测试）
///
/// 内存中的项目列表；`fail_with` 设置后所有调用都返回该错误。
#[derive(Debug, Default)]
pub struct MockProjectService {
    projects: RwLock<Vec<Project>>,
    failure: RwLock<Option<ClientError>>,
    config: RwLock<Option<ClientConfig>>,
}

impl MockProjectService {
    /// 未连接：所有调用返回 `ConfigMissing`
    pub fn new() -> Self {
        Self::default()
    }

    /// 已连接并带有初始项目
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
            failure: RwLock::new(None),
            config: RwLock::new(Some(ClientConfig::new("localhost:8090", "T"))),
        }
    }

    /// 之后的调用都返回 `error`；`None` 恢复正常
    pub async fn fail_with(&self, error: Option<ClientError>) {
        *self.failure.write().await = error;
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// `connect` 成功后保存的配置
    pub async fn config(&self) -> Option<ClientConfig> {
        self.config.read().await.clone()
    }

    async fn check(&self) -> ClientResult<()> {
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        if self.config.read().await.is_none() {
            return Err(ClientError::ConfigMissing("mock".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectService for MockProjectService {
    async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        self.check().await?;
        Ok(self.projects().await)
    }

    async fn create_project(&self, request: ProjectRequest) -> ClientResult<Project> {
        self.check().await?;
        let mut projects = self.projects.write().await;
        let next_id = projects
            .iter()
            .filter_map(|p| p.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let project = request.into_project(ProjectId::from(next_id));
        projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: ProjectId,
        request: ProjectRequest,
    ) -> ClientResult<Project> {
        self.check().await?;
        let mut projects = self.projects.write().await;
        let Some(slot) = projects.iter_mut().find(|p| p.id == id) else {
            return Err(ClientError::Status {
                status: 404,
                body: format!("project {id} not found"),
            });
        };
        *slot = request.into_project(id);
        Ok(slot.clone())
    }

    async fn delete_project(&self, id: ProjectId) -> ClientResult<()> {
        self.check().await?;
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Err(ClientError::Status {
                status: 404,
                body: format!("project {id} not found"),
            });
        }
        Ok(())
    }

    async fn connect(&self, config: ClientConfig) -> ClientResult<()> {
        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }
        config.validate()?;
        *self.config.write().await = Some(config);
        Ok(())
    }
}
