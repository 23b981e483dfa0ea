//! # restcache
//!
//! A generic resource-access client for RESTful HTTP backends. CRUD-style
//! operations are delegated to an internal client that adds authentication,
//! time-bounded response caching, and cache invalidation on mutation.
//!
//! ## Overview
//!
//! Every operation funnels through a single [`ApiClient::request`] entry
//! point. Read requests (GET) are fingerprinted and served from an in-memory
//! TTL cache when a fresh entry exists; mutating requests (POST/PUT/DELETE)
//! always reach the network and clear the cache on success so subsequent
//! reads are never stale. Transport failures propagate unchanged and never
//! touch cached state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restcache::{ClientConfig, ResourceClient};
//!
//! #[tokio::main]
//! async fn main() -> restcache::Result<()> {
//!     let api = ResourceClient::new(
//!         ClientConfig::new()
//!             .with_api_key("your-api-key")
//!             .with_base_url("https://api.yourservice.com/v1"),
//!     )?;
//!
//!     // First read goes to the network; an immediate refetch is a cache hit.
//!     let user = api.get("/users", "123").await?;
//!     println!("{}", user);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request coordinator: cache policy, auth headers, invalidation |
//! | [`cache`] | Fingerprinted TTL store for cacheable responses |
//! | [`transport`] | The HTTP exchange behind the coordinator |
//! | [`resources`] | CRUD facade: argument validation and endpoint assembly |
//! | [`config`] | Per-client configuration |

pub mod cache;
pub mod client;
pub mod config;
pub mod resources;
pub mod transport;

// Re-export main types for convenience
pub use client::{ApiClient, Method, RequestOptions};
pub use config::ClientConfig;
pub use resources::ResourceClient;
pub use transport::TransportError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
