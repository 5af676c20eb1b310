//! reqwest-backed `Connection`.

use std::time::Duration;

use calevent_core::{ApiRequest, Connection, Method, TransportError};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Sends requests to the configured API root with bearer authentication.
pub struct HttpConnection {
    http: reqwest::Client,
    api_server: String,
    access_token: String,
}

impl HttpConnection {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_client(http, config))
    }

    /// Use an existing reqwest client (shared pools, custom TLS).
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        HttpConnection {
            http,
            api_server: config.api_server.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_server, path)
    }

    #[instrument(skip_all, fields(method = request.method.as_str(), path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .http
            .request(method, self.url(&request.path))
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!("Sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&text);
            warn!(status = status.as_u16(), %message, "Request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Received response");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}

impl Connection for HttpConnection {
    async fn request(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.send(request).await
    }
}

/// Pull `message` out of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ClientConfig {
            api_server: "https://api.nylas.com/".to_string(),
            ..Default::default()
        };
        let conn = HttpConnection::new(&config).unwrap();
        assert_eq!(conn.url("/events/id-1234"), "https://api.nylas.com/events/id-1234");
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(
            error_message(r#"{"message": "Invalid calendar", "type": "invalid_request_error"}"#),
            "Invalid calendar"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
