//! Connection config
//!
//! `{server, token}` stored as JSON under the user's config directory:
//! `~/.config/deeploy/config.json` on Linux.
//!
//! The file is re-read on every request so that a token saved by the connect
//! screen is picked up without restarting.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ClientError, ClientResult};

/// Directory created under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "deeploy";

/// File name of the connection config.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the API lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// `host:port` or a full `http(s)://` URL.
    pub server: String,
    /// Bearer token.
    pub token: String,
}

impl ClientConfig {
    pub fn new(server: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            token: token.into(),
        }
    }

    /// Reject configs with blank fields.
    pub fn validate(&self) -> ClientResult<()> {
        if self.server.trim().is_empty() {
            return Err(ClientError::ConfigInvalid(
                "server address is empty".to_string(),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ClientError::ConfigInvalid("token is empty".to_string()));
        }
        Ok(())
    }

    /// Base URL without trailing slash; `http://` is assumed when no scheme is given.
    pub fn base_url(&self) -> String {
        let server = self.server.trim().trim_end_matches('/');
        if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("http://{server}")
        }
    }
}

// 手动实现，避免 token 出现在日志里
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("token", &crate::log_sanitizer::mask_secret(&self.token))
            .finish()
    }
}

/// File-backed config store.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/deeploy/config.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the config.
    ///
    /// A missing file is [`ClientError::ConfigMissing`]; anything unreadable,
    /// unparsable or blank is [`ClientError::ConfigInvalid`].
    pub async fn load(&self) -> ClientResult<ClientConfig> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ClientError::ConfigMissing(
                    self.path.display().to_string(),
                ));
            }
            Err(e) => return Err(ClientError::ConfigInvalid(e.to_string())),
        };

        let config: ClientConfig = serde_json::from_str(&content)
            .map_err(|e| ClientError::ConfigInvalid(e.to_string()))?;
        config.validate()?;

        log::debug!(
            "[config] Loaded {} (server {})",
            self.path.display(),
            config.server
        );
        Ok(config)
    }

    /// Write the config, creating the parent directory when needed.
    pub async fn save(&self, config: &ClientConfig) -> ClientResult<()> {
        config.validate()?;

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| ClientError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| ClientError::Storage(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| ClientError::Storage(e.to_string()))?;
        }

        log::info!("[config] Saved {}", self.path.display());
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
