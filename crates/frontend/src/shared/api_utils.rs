//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the backend listens on next to the frontend host
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Адрес бэкенда, передаётся в клиент при создании
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Config for the page the app is served from. Without a window the
    /// base stays empty and requests go to relative URLs.
    pub fn from_window() -> Self {
        Self::new(api_base())
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust
    /// # use frontend::shared::api_utils::ApiConfig;
    /// let config = ApiConfig::new("http://localhost:3000/");
    /// assert_eq!(config.url("/api/projects"), "http://localhost:3000/api/projects");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Путь вида `/api/{collection}/{id}/{children}` с экранированным id
pub fn child_collection_path(collection: &str, parent_id: &str, children: &str) -> String {
    format!(
        "/api/{}/{}/{}",
        collection,
        urlencoding::encode(parent_id),
        children
    )
}
