//! API client error types.

use thiserror::Error;

/// Errors returned by API operations.
///
/// GET and POST requests share this one shape: every failure carries
/// the request path, and status failures additionally carry the HTTP
/// status and raw response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport adapter failed before an HTTP response arrived.
    #[error("request to {path} failed: {detail}")]
    Transport {
        /// Request path (without the access key).
        path: String,
        /// Failure detail reported by the adapter.
        detail: String,
    },

    /// The API answered with a non-success HTTP status.
    #[error("request to {path} returned HTTP {status}")]
    Status {
        /// Request path (without the access key).
        path: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, lossily decoded.
        body: String,
    },

    /// The response body was not a valid JSON object.
    #[error("invalid JSON from {path}: {source}")]
    Json {
        /// Request path (without the access key).
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Query parameters could not be URL-encoded.
    #[error("url encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),

    /// Key pair or CSR generation failed.
    #[error("csr generation failed: {0}")]
    Csr(#[from] zerossl_csr::CsrError),
}
