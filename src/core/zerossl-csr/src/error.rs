//! CSR generation error types.

use thiserror::Error;

/// Errors that can occur while generating a key pair or CSR.
#[derive(Debug, Error)]
pub enum CsrError {
    /// Key generation or request construction failed in OpenSSL.
    #[error("openssl error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    /// PEM output was not valid UTF-8.
    #[error("invalid pem encoding: {0}")]
    InvalidPem(#[from] std::string::FromUtf8Error),
}
