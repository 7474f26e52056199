//! Shared HTTP plumbing
//!
//! Sending a request, mapping transport failures and non-2xx statuses onto
//! [`ClientError`], logging. Callers build the `RequestBuilder` themselves.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::utils::log_sanitizer::truncate_for_log;

/// Prefix of every log line written by this crate's HTTP layer.
const LOG_TARGET: &str = "deeploy";

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// `204 No Content` yields an empty string without reading the body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, auth header, body)
    /// * `method_name` - HTTP method, for logs
    /// * `url` - request URL, for logs
    ///
    /// # Errors
    /// * `ClientError::Timeout` / `ClientError::Network` - the request did not complete
    /// * `ClientError::Unauthorized` - HTTP 401
    /// * `ClientError::Status` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> ClientResult<String> {
        log::debug!("[{LOG_TARGET}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(e.to_string())
            } else {
                ClientError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{LOG_TARGET}] Response Status: {status_code}");

        if status == StatusCode::UNAUTHORIZED {
            log::warn!("[{LOG_TARGET}] {method_name} {url} rejected (HTTP 401)");
            return Err(ClientError::Unauthorized);
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            log::warn!("[{LOG_TARGET}] {method_name} {url} failed (HTTP {status_code})");
            return Err(ClientError::Status {
                status: status_code,
                body: truncate_for_log(&response_text),
            });
        }

        log::debug!(
            "[{LOG_TARGET}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Errors
    /// `ClientError::Parse` when the text is not valid JSON of type `T`.
    pub fn parse_json<T>(response_text: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{LOG_TARGET}] JSON parse failed: {e}");
            log::error!(
                "[{LOG_TARGET}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::Parse(e.to_string())
        })
    }
}
