//! # ZeroSSL Client
//!
//! Client SDK for the ZeroSSL certificate-issuance REST API.
//!
//! ## Endpoints
//!
//! - `POST /certificates` - Create a certificate order
//! - `POST /certificates/{id}/challenges` - Start domain verification
//! - `GET  /certificates/{id}/download[/return]` - Download a certificate
//! - `GET  /certificates/{id}` - Certificate details
//! - `GET  /certificates` - List certificates
//! - `GET  /certificates/{id}/status` - Verification status
//! - `POST /certificates/{id}/challenges/email` - Resend verification email
//! - `POST /certificates/{id}/revoke` - Revoke a certificate
//! - `POST /certificates/{id}/cancel` - Cancel a certificate order
//! - `POST /validation/csr` - Validate a CSR
//!
//! Every request is authenticated by appending the configured
//! `access_key` as a query parameter. Responses are dynamic JSON
//! objects ([`ApiObject`]); the API's response shape varies per
//! endpoint and is not validated locally.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod certificates;
pub mod config;
pub mod error;
pub mod transport;

pub use api::ApiObject;
pub use certificates::{
    CertificateClient, CreateCertificateOptions, IssuedCertificate, ValidationMethod,
};
pub use config::ClientConfig;
pub use error::ApiError;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use zerossl_csr::{CertificateSubject, PrivateKeyPem};
