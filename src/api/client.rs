//! HTTP backend built on reqwest

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::backend::Backend;
use crate::error::{ErpError, ErpResult};

/// Backend that talks to the REST API over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    /// HTTP client
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for an already validated base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn read_json(response: reqwest::Response) -> ErpResult<Value> {
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ErpError::Response(e.to_string()))?;

        debug!(%status, "Response received");
        Ok(body)
    }
}

impl Backend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn get(&self, path: &str) -> ErpResult<Value> {
        debug!("GET request");

        let response = self
            .client
            .get(self.endpoint(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ErpError::Request(e.to_string()))?;

        Self::read_json(response).await
    }

    #[instrument(skip(self, body), fields(base = %self.base_url))]
    async fn post(&self, path: &str, body: Value) -> ErpResult<Value> {
        debug!("POST request");

        let response = self
            .client
            .post(self.endpoint(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ErpError::Request(e.to_string()))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(
            backend.endpoint("/customers"),
            "http://localhost:8000/customers"
        );
    }
}
