//! API utilities for frontend-backend communication

use contracts::shared::config::ApiConfig;

/// Build a full API URL from a path
///
/// An empty `base_url` keeps the path relative, so requests go to the
/// origin that served the bundle.
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}", config.base_url.trim_end_matches('/'), path)
}

/// `Authorization` header value for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
