//! Unified error type definition

use thiserror::Error;

/// Error type for every client operation.
///
/// # Reconnect errors
///
/// [`ConfigMissing`](Self::ConfigMissing), [`ConfigInvalid`](Self::ConfigInvalid)
/// and [`Unauthorized`](Self::Unauthorized) cannot be fixed by retrying; the
/// user has to enter a server address and token again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No config file exists at the given path.
    #[error("Not connected: no config at {0}")]
    ConfigMissing(String),

    /// The config file exists but cannot be read or parsed, or holds empty fields.
    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    /// The server answered HTTP 401.
    #[error("Unauthorized: the server rejected the token")]
    Unauthorized,

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the transport timeout.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Any non-2xx status other than 401.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Writing the config file failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Whether the user must (re)connect before any further request can succeed.
    #[must_use]
    pub fn requires_reconnect(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing(_) | Self::ConfigInvalid(_) | Self::Unauthorized
        )
    }

    /// 是否为预期行为（未连接、凭证失效等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.requires_reconnect() || matches!(self, Self::Status { status: 400..=499, .. })
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
