//! Client configuration.

use zerossl_csr::CertificateSubject;

/// Configuration for a [`CertificateClient`](crate::CertificateClient).
///
/// Immutable after construction. The subject fields are embedded in
/// every CSR generated for a certificate order; see
/// [`CertificateSubject`] for their defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// ZeroSSL API access key.
    ///
    /// The key is appended to request URLs verbatim, without
    /// URL-encoding. ZeroSSL keys are plain hex strings; a key
    /// containing `&` or `=` would corrupt the query string.
    pub access_key: String,
    /// Certificate subject template for generated CSRs.
    pub subject: CertificateSubject,
}

impl ClientConfig {
    /// Creates a configuration with the given access key and default
    /// subject fields.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            subject: CertificateSubject::default(),
        }
    }
}
