//! CRUD facade over the coordinator.
//!
//! This layer is pure argument validation and endpoint assembly; every
//! operation funnels into [`ApiClient::request`], which owns all caching
//! and transport behavior.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::client::{ApiClient, Method, RequestOptions};
use crate::config::ClientConfig;
use crate::{Error, Result};

/// Resource-oriented wrapper exposing CRUD-style operations over a RESTful
/// backend. The collection path is chosen per call, e.g. `"/users"`.
pub struct ResourceClient {
    client: ApiClient,
}

impl ResourceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
        })
    }

    /// Fetch a single resource by id, e.g. `get("/users", "123")`.
    pub async fn get(&self, collection: &str, id: &str) -> Result<Value> {
        let id = require_id(id)?;
        self.client
            .request(&format!("{}/{}", collection, id), RequestOptions::new())
            .await
    }

    /// List a collection, optionally filtered by query parameters.
    pub async fn list(&self, collection: &str, params: &[(&str, &str)]) -> Result<Value> {
        let endpoint = if params.is_empty() {
            collection.to_string()
        } else {
            format!("{}?{}", collection, encode_query(params))
        };
        self.client.request(&endpoint, RequestOptions::new()).await
    }

    /// Create a resource in a collection. The payload must serialize to a
    /// JSON object.
    pub async fn create<T: Serialize>(&self, collection: &str, payload: &T) -> Result<Value> {
        let body = require_object(payload)?;
        self.client
            .request(
                collection,
                RequestOptions::new()
                    .with_method(Method::Post)
                    .with_body(body),
            )
            .await
    }

    /// Update a resource by id. The payload must serialize to a JSON object.
    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        payload: &T,
    ) -> Result<Value> {
        let id = require_id(id)?;
        let body = require_object(payload)?;
        self.client
            .request(
                &format!("{}/{}", collection, id),
                RequestOptions::new()
                    .with_method(Method::Put)
                    .with_body(body),
            )
            .await
    }

    /// Delete a resource by id. Backends answering with an empty body yield
    /// `Value::Null`.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<Value> {
        let id = require_id(id)?;
        self.client
            .request(
                &format!("{}/{}", collection, id),
                RequestOptions::new().with_method(Method::Delete),
            )
            .await
    }

    /// Search within a collection: `q=<query>` plus any extra filter pairs.
    pub async fn search(
        &self,
        collection: &str,
        query: &str,
        filters: &[(&str, &str)],
    ) -> Result<Value> {
        if query.trim().is_empty() {
            return Err(Error::validation("search query must be a non-empty string"));
        }
        let mut pairs = vec![("q", query)];
        pairs.extend_from_slice(filters);
        let endpoint = format!("{}?{}", collection, encode_query(&pairs));
        self.client.request(&endpoint, RequestOptions::new()).await
    }

    pub fn clear_cache(&self) {
        self.client.clear_cache();
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.client.set_api_key(api_key);
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.client.set_base_url(base_url);
    }

    /// Escape hatch to the underlying coordinator for callers that need
    /// raw `request` access alongside the CRUD surface.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }
}

fn require_id(id: &str) -> Result<&str> {
    if id.trim().is_empty() {
        return Err(Error::validation("a non-empty resource id is required"));
    }
    Ok(id)
}

fn require_object<T: Serialize>(payload: &T) -> Result<Value> {
    let body = serde_json::to_value(payload)?;
    if !body.is_object() {
        return Err(Error::validation("payload must serialize to a JSON object"));
    }
    Ok(body)
}

fn encode_query(pairs: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        query.append_pair(name, value);
    }
    query.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_pairs_are_encoded_in_order() {
        assert_eq!(
            encode_query(&[("limit", "10"), ("offset", "0")]),
            "limit=10&offset=0"
        );
    }

    #[test]
    fn query_values_are_escaped() {
        assert_eq!(
            encode_query(&[("q", "john doe"), ("role", "a&b")]),
            "q=john+doe&role=a%26b"
        );
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(require_id("").is_err());
        assert!(require_id("   ").is_err());
        assert_eq!(require_id("123").unwrap(), "123");
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        assert!(require_object(&json!(42)).is_err());
        assert!(require_object(&json!(["a", "b"])).is_err());
        assert!(require_object(&json!({"name": "A"})).is_ok());
    }
}
