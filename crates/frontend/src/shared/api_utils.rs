//! API utilities for frontend-backend communication
//!
//! Builds backend URLs from the configuration and the current window location.

use crate::shared::config::AppConfig;
use crate::shared::list_state::ListQuery;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise the current window location
/// with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if neither is available
pub fn api_base(config: &AppConfig) -> String {
    if !config.api.base_url.is_empty() {
        return config.api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api.backend_port)
}

/// `base` + `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `path/{id}`
pub fn with_id(path: &str, id: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), id)
}

/// `path?page=..&nbElementsPerPage=..`
pub fn with_query(path: &str, query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{path}?{qs}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:8080", "/classes"), "http://h:8080/classes");
        assert_eq!(join_url("http://h:8080/", "classes"), "http://h:8080/classes");
        assert_eq!(join_url("http://h:8080", ""), "http://h:8080");
    }

    #[test]
    fn test_with_id() {
        assert_eq!(with_id("/classe", "4"), "/classe/4");
        assert_eq!(with_id("/classe/", "4"), "/classe/4");
    }

    #[test]
    fn test_with_query() {
        let query = ListQuery {
            page: 2,
            nb_elements_per_page: 10,
        };
        assert_eq!(
            with_query("/classes", &query),
            "/classes?page=2&nbElementsPerPage=10"
        );
    }

    #[test]
    fn test_configured_base_wins() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.school.test".into();
        assert_eq!(api_base(&config), "https://api.school.test");
        assert_eq!(
            join_url(&api_base(&config), "/jours"),
            "https://api.school.test/jours"
        );
    }
}
