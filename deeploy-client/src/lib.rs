//! # deeploy-client
//!
//! HTTP client for the deeploy project API, plus the file-backed connection
//! config the terminal UI reads before every request.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET /api/projects` |
//! | create    | `POST /api/projects` |
//! | update    | `PUT /api/projects/{id}` |
//! | delete    | `DELETE /api/projects/{id}` |
//!
//! Every request carries `Authorization: Bearer <token>`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deeploy_client::{ConfigStore, DeeployClient, ProjectRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Load `{server, token}` from the default config location
//!     let store = ConfigStore::default();
//!     let client = DeeployClient::from_store(&store).await?;
//!
//!     // 2. List projects
//!     for project in client.list_projects().await? {
//!         println!("{} {}", project.id, project.title);
//!     }
//!
//!     // 3. Create one
//!     let created = client
//!         .create_project(&ProjectRequest::new("api"))
//!         .await?;
//!     println!("created {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`ClientResult<T>`]. Callers that drive a UI should
//! check [`ClientError::requires_reconnect`]: a missing/invalid config and an
//! HTTP 401 both mean the user has to connect again.

mod client;
mod config;
mod error;
mod http_client;
mod types;
mod utils;

pub use client::{DEFAULT_TIMEOUT, DeeployClient};
pub use config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ClientConfig, ConfigStore};
pub use error::{ClientError, ClientResult};
pub use types::{Project, ProjectId, ProjectRequest};

pub use utils::log_sanitizer;
