//! Shared request plumbing for all API operations.
//!
//! Appends the access key to every path, dispatches through the
//! transport and normalizes the response into an [`ApiObject`] or an
//! [`ApiError`].

use std::sync::Arc;

use tracing::debug;

use crate::error::ApiError;
use crate::transport::HttpTransport;

/// Root address of the ZeroSSL REST API. Not overridable.
pub const BASE_URL: &str = "https://api.zerossl.com";

/// A decoded JSON response body.
///
/// The response shape varies per endpoint and is not validated
/// locally; callers pick out the fields they need.
pub type ApiObject = serde_json::Map<String, serde_json::Value>;

/// Authenticated request dispatcher shared by all operations.
pub(crate) struct ApiCore {
    access_key: String,
    transport: Arc<dyn HttpTransport>,
}

impl ApiCore {
    pub(crate) fn new(access_key: String, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            access_key,
            transport,
        }
    }

    /// Appends the access key, joining with `?` or `&` depending on
    /// whether the path already carries a query string.
    fn authed_path(&self, path: &str) -> String {
        let join = if path.contains('?') { '&' } else { '?' };
        format!("{path}{join}access_key={}", self.access_key)
    }

    /// Sends a GET request, with optional extra query parameters.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ApiObject, ApiError> {
        let mut authed = self.authed_path(path);
        if !query.is_empty() {
            authed.push('&');
            authed.push_str(&serde_urlencoded::to_string(query)?);
        }

        debug!(%path, "GET");
        let response = self
            .transport
            .get(&format!("{BASE_URL}{authed}"))
            .await
            .map_err(|e| ApiError::Transport {
                path: path.to_string(),
                detail: e.to_string(),
            })?;

        Self::decode(path, response)
    }

    /// Sends a POST request with URL-encoded form fields.
    pub(crate) async fn post(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<ApiObject, ApiError> {
        let authed = self.authed_path(path);

        debug!(%path, "POST");
        let response = self
            .transport
            .post(&format!("{BASE_URL}{authed}"), form)
            .await
            .map_err(|e| ApiError::Transport {
                path: path.to_string(),
                detail: e.to_string(),
            })?;

        Self::decode(path, response)
    }

    /// Normalizes a transport response: non-2xx becomes an error, an
    /// empty body becomes an empty object, anything else is decoded
    /// as JSON.
    fn decode(
        path: &str,
        response: crate::transport::HttpResponse,
    ) -> Result<ApiObject, ApiError> {
        if !response.is_ok() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        if response.body.is_empty() {
            return Ok(ApiObject::new());
        }

        serde_json::from_slice(&response.body).map_err(|source| ApiError::Json {
            path: path.to_string(),
            source,
        })
    }
}
