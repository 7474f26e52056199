//! Log sanitization utilities
//!
//! Keeps bearer tokens and large response bodies out of the log file.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const SECRET_PREFIX: usize = 4;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (cut on a char boundary) with a suffix giving the
/// total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping a short prefix so tokens can still be told apart.
///
/// Secrets of `2 * SECRET_PREFIX` chars or fewer are masked completely.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= SECRET_PREFIX * 2 {
        return "*".repeat(count);
    }
    let prefix: String = secret.chars().take(SECRET_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(count - SECRET_PREFIX))
}
