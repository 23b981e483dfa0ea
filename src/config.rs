//! Per-client configuration.

use std::time::Duration;

/// Configuration owned by one [`ApiClient`](crate::ApiClient) instance.
///
/// `api_key` and `base_url` may be changed after construction through the
/// client's setters and take effect on the next call; `cache_ttl` is fixed
/// for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Sent as a bearer `Authorization` header on every transport call.
    pub api_key: String,
    /// Prefix for every endpoint, e.g. `https://api.yourservice.com/v1`.
    pub base_url: String,
    /// How long a cached response stays servable.
    pub cache_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: String::new(),
            cache_ttl: Duration::from_millis(300_000),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
