//! Client configuration.
//!
//! Configuration values are provided by the application, not hardcoded in
//! the providers.

/// Default base URL of the remote todo service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable overriding the service base URL
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Remote todo service configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the todo service (e.g., `https://jsonplaceholder.typicode.com`)
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new configuration with an explicit base URL.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Create a configuration from the environment.
    ///
    /// Reads `TODO_API_URL`, falling back to the public JSONPlaceholder
    /// endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
