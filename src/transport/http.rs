use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::client::Method;

/// Thin adapter over `reqwest`: one exchange per call, no retries, no
/// streaming. The coordinator composes the full URL and the header set
/// (including auth) before calling in; this type only performs the exchange
/// and parses the result.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self { client })
    }

    /// Performs one HTTP exchange and parses the response body as JSON.
    ///
    /// Non-success statuses become [`TransportError::Status`] carrying the
    /// response body text. An empty success body parses as `Value::Null`
    /// (DELETE endpoints commonly answer 204).
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&Value>,
    ) -> Result<Value, TransportError> {
        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(TransportError::Decode)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("undecodable response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl TransportError {
    /// Status code of the failed exchange, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::Decode(_) => None,
        }
    }

    /// Whether the failure class is transient (timeouts, connection errors,
    /// 408/429 and server-side statuses). The client never retries on its
    /// own; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout() || e.is_connect(),
            TransportError::Status { status, .. } => {
                let status = *status;
                status == 408 || status == 429 || (500..600).contains(&status)
            }
            TransportError::Decode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> TransportError {
        TransportError::Status {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn server_side_statuses_are_retryable() {
        assert!(status_error(500).is_retryable());
        assert!(status_error(503).is_retryable());
        assert!(status_error(408).is_retryable());
        assert!(status_error(429).is_retryable());
    }

    #[test]
    fn client_side_statuses_are_not_retryable() {
        assert!(!status_error(400).is_retryable());
        assert!(!status_error(401).is_retryable());
        assert!(!status_error(404).is_retryable());
        assert!(!status_error(409).is_retryable());
    }

    #[test]
    fn status_is_exposed_for_callers() {
        assert_eq!(status_error(404).status(), Some(404));
    }
}
