//! Client configuration

/// Connection settings for [`crate::CloudClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `https://api.365travelcafe.in`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Bearer token, if a session already exists
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            timeout: 30,
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
