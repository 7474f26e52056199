//! Project API client

use std::time::Duration;

use reqwest::Client;

use crate::config::{ClientConfig, ConfigStore};
use crate::error::{ClientError, ClientResult};
use crate::http_client::HttpUtils;
use crate::types::{Project, ProjectId, ProjectRequest};

/// Transport timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `/api/projects` endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct DeeployClient {
    http: Client,
    base_url: String,
    token: String,
}

impl DeeployClient {
    /// Build a client for the given connection config.
    ///
    /// # Errors
    /// `ClientError::ConfigInvalid` if the config has blank fields,
    /// `ClientError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            token: config.token.clone(),
        })
    }

    /// Load the config from `store` and build a client for it.
    pub async fn from_store(store: &ConfigStore) -> ClientResult<Self> {
        let config = store.load().await?;
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn projects_url(&self) -> String {
        format!("{}/api/projects", self.base_url)
    }

    fn project_url(&self, id: &ProjectId) -> String {
        format!("{}/api/projects/{id}", self.base_url)
    }

    /// `GET /api/projects`
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let url = self.projects_url();
        let request = self.http.get(&url).bearer_auth(&self.token);
        let body = HttpUtils::execute_request(request, "GET", &url).await?;
        let projects: Vec<Project> = HttpUtils::parse_json(&body)?;
        log::info!("[deeploy] Listed {} projects", projects.len());
        Ok(projects)
    }

    /// `POST /api/projects`, returning the created project.
    pub async fn create_project(&self, request: &ProjectRequest) -> ClientResult<Project> {
        let url = self.projects_url();
        let builder = self.http.post(&url).bearer_auth(&self.token).json(request);
        let body = HttpUtils::execute_request(builder, "POST", &url).await?;
        let project: Project = HttpUtils::parse_json(&body)?;
        log::info!("[deeploy] Created project {}", project.id);
        Ok(project)
    }

    /// `PUT /api/projects/{id}`.
    ///
    /// Servers that answer with an empty body get the request echoed back as
    /// the updated project.
    pub async fn update_project(
        &self,
        id: &ProjectId,
        request: &ProjectRequest,
    ) -> ClientResult<Project> {
        let url = self.project_url(id);
        let builder = self.http.put(&url).bearer_auth(&self.token).json(request);
        let body = HttpUtils::execute_request(builder, "PUT", &url).await?;

        let project = if body.trim().is_empty() {
            request.clone().into_project(id.clone())
        } else {
            HttpUtils::parse_json(&body)?
        };
        log::info!("[deeploy] Updated project {id}");
        Ok(project)
    }

    /// `DELETE /api/projects/{id}`. Any 2xx counts as success.
    pub async fn delete_project(&self, id: &ProjectId) -> ClientResult<()> {
        let url = self.project_url(id);
        let builder = self.http.delete(&url).bearer_auth(&self.token);
        HttpUtils::execute_request(builder, "DELETE", &url).await?;
        log::info!("[deeploy] Deleted project {id}");
        Ok(())
    }
}

impl std::fmt::Debug for DeeployClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeeployClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
