//! HTTP transport abstraction.
//!
//! The API client only needs two verbs and a status/body envelope, so
//! the transport is a small trait; [`ReqwestTransport`] is the
//! production implementation and tests substitute an in-memory one.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by the transport adapter (connection, TLS,
/// timeout). Carries an opaque detail string.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(
    /// Opaque failure detail.
    pub String,
);

/// Status and raw body of an HTTP response.
///
/// An empty body stands for "no body"; the API never returns a
/// meaningful zero-length payload.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport adapter trait for performing HTTP requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request against an absolute URL.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Perform a POST request with URL-encoded form fields.
    async fn post(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a 30 second request timeout.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    async fn into_response(
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<HttpResponse, TransportError> {
        // The request URL carries the access key; it must not end up
        // in the error detail.
        let response = response.map_err(|e| TransportError(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.without_url().to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        Self::into_response(self.client.get(url).send().await).await
    }

    async fn post(
        &self,
        url: &str,
        form: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        Self::into_response(self.client.post(url).form(form).send().await).await
    }
}


#[cfg(test)]
pub(crate) mod mock {
    //! In-memory transport for unit tests.

    use std::sync::Mutex;

    use super::*;

    /// A recorded request as seen by the transport.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub form: Vec<(String, String)>,
    }

    /// Transport that replays a canned response and records requests.
    pub struct MockTransport {
        pub requests: Mutex<Vec<RecordedRequest>>,
        response: Result<HttpResponse, TransportError>,
    }

    impl MockTransport {
        pub fn returning(response: Result<HttpResponse, TransportError>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response,
            }
        }

        pub fn with_json(json: &str) -> Self {
            Self::returning(Ok(HttpResponse {
                status: 200,
                body: json.as_bytes().to_vec(),
            }))
        }

        pub fn failing(detail: &str) -> Self {
            Self::returning(Err(TransportError(detail.to_string())))
        }

        pub fn last_request(&self) -> RecordedRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .expect("no request recorded")
                .clone()
        }

        fn next_response(&self) -> Result<HttpResponse, TransportError> {
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(error) => Err(TransportError(error.0.clone())),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                form: Vec::new(),
            });
            self.next_response()
        }

        async fn post(
            &self,
            url: &str,
            form: &[(String, String)],
        ) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                form: form.to_vec(),
            });
            self.next_response()
        }
    }
}
