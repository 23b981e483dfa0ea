//! Request coordinator: the single funnel for all HTTP-shaped operations.
//!
//! Decides caching policy per call. Reads are fingerprinted and served from
//! the cache when a fresh entry exists; mutations always reach the network
//! and clear the cache on success. Transport failures propagate unchanged
//! and leave the cache exactly as it was.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheKey, CacheStore};
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::{Error, Result};

/// HTTP verbs understood by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Reads are eligible for cache lookup and population; everything else
    /// is a mutation and invalidates.
    pub fn is_cacheable(self) -> bool {
        matches!(self, Method::Get)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-request options, defaulted at the boundary: a plain GET with no body
/// and no extra headers unless told otherwise.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Option<HashMap<String, String>>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Resource-access client: authentication, response caching, and cache
/// invalidation over a RESTful backend.
///
/// Each instance owns its own configuration and cache; there is no shared
/// or process-wide state between clients.
pub struct ApiClient {
    config: ClientConfig,
    transport: HttpTransport,
    cache: CacheStore,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new()?,
            cache: CacheStore::new(),
            config,
        })
    }

    /// Single entry point for all HTTP-shaped operations.
    ///
    /// GETs are served from the cache when a fresh entry exists; a
    /// successful GET response is stored under the request fingerprint for
    /// the configured TTL before being returned. Mutating calls bypass the
    /// cache read and clear the whole store on success: fingerprints are
    /// per-path, and a mutation can affect collection endpoints whose keys
    /// differ from its own, so a full clear is the policy that stays
    /// correct.
    ///
    /// On any transport failure the error propagates unchanged and the
    /// cache is left unmodified: nothing is written, nothing is cleared.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        if endpoint.is_empty() {
            return Err(Error::validation("endpoint must be a non-empty path"));
        }

        let method = options.method;
        let url = format!("{}{}", self.config.base_url, endpoint);
        let headers = self.build_headers(options.headers.as_ref());

        if method.is_cacheable() {
            let key = CacheKey::for_request(method.as_str(), endpoint);
            if let Some(value) = self.cache.get(&key) {
                debug!(%method, endpoint, "cache hit");
                return Ok(value);
            }
            debug!(%method, endpoint, "cache miss");
            let value = self
                .transport
                .send(method, &url, &headers, options.body.as_ref())
                .await?;
            self.cache.put(key, value.clone(), self.config.cache_ttl);
            Ok(value)
        } else {
            let value = self
                .transport
                .send(method, &url, &headers, options.body.as_ref())
                .await?;
            self.cache.clear();
            debug!(%method, endpoint, "cache cleared after mutation");
            Ok(value)
        }
    }

    /// Drops every cached entry, expired or not.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of live cache entries, for tests and diagnostics.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Takes effect on the next call; already-cached values are untouched.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.config.api_key = api_key.into();
    }

    /// Takes effect on the next call; already-cached values are untouched.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
    }

    /// Default headers first, caller-supplied ones last so they can
    /// override. Names are lowercased so the override actually matches.
    fn build_headers(&self, extra: Option<&HashMap<String, String>>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "authorization".to_string(),
            format!("Bearer {}", self.config.api_key),
        );
        headers.insert("content-type".to_string(), "application/json".to_string());
        if let Some(extra) = extra {
            for (name, value) in extra {
                headers.insert(name.to_ascii_lowercase(), value.clone());
            }
        }
        headers
    }
}
