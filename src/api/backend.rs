//! The seam between panels and the REST backend

use std::future::Future;

use serde_json::Value;

use crate::error::ErpResult;

/// A JSON-over-HTTP backend
///
/// Both methods resolve to the parsed response body. Transport and parse
/// failures are returned as errors. The status code is not inspected, so a
/// non-2xx response whose body is JSON counts as success.
pub trait Backend: Send + Sync + 'static {
    /// Base URL requests are resolved against
    fn base_url(&self) -> &str;

    /// `GET {base}{path}`
    fn get(&self, path: &str) -> impl Future<Output = ErpResult<Value>> + Send;

    /// `POST {base}{path}` with a JSON body
    fn post(&self, path: &str, body: Value) -> impl Future<Output = ErpResult<Value>> + Send;

    /// Full URL for a resource path, as shown in the form hints
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
