//! # ZeroSSL CSR
//!
//! Local certificate-request generation for the ZeroSSL SDK.
//!
//! ## Features
//!
//! - Certificate subject (distinguished name) with documented defaults
//! - 2048-bit RSA key pair generation
//! - SHA-256-signed PEM certificate signing requests
//! - Zeroizing private key wrapper
//!
//! The remote API never sees the private key; it stays with the caller
//! as part of the returned [`CsrBundle`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod request;
pub mod subject;

pub use error::CsrError;
pub use key::PrivateKeyPem;
pub use request::{generate_csr, CsrBundle};
pub use subject::CertificateSubject;
