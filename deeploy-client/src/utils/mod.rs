//! Utility modules.

/// Log sanitization utilities to keep tokens and large payloads out of logs.
pub mod log_sanitizer;
