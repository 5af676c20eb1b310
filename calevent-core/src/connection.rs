//! The request collaborator.
//!
//! Event operations build an `ApiRequest` and hand it to a `Connection`,
//! which owns authentication, the API root, timeouts and the transport.
//! `calevent-http` provides the reqwest-backed implementation.

use std::collections::BTreeMap;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Query-string parameters, appended verbatim to the request URL.
pub type QueryParams = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single request against the service, relative to the API root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/events/{id}`
    pub path: String,
    pub query: QueryParams,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Option<&QueryParams>) -> Self {
        if let Some(query) = query {
            self.query.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Issues authenticated requests and returns the parsed JSON body.
///
/// Each call is one outstanding request: no retries, batching or caching.
pub trait Connection {
    fn request(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}
