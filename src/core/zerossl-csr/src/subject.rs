//! Certificate subject (distinguished name) configuration.

/// Subject fields embedded in generated certificate signing requests.
///
/// All fields are optional; a field that is `None` or an empty string
/// is omitted from the distinguished name entirely. A non-empty
/// [`common_name`](Self::common_name) overrides the domain-derived
/// commonName when a CSR is generated.
#[derive(Debug, Clone)]
pub struct CertificateSubject {
    /// Two-letter country code (default `"CN"`).
    pub country_name: Option<String>,
    /// State or province name.
    pub state_or_province_name: Option<String>,
    /// Locality (city) name.
    pub locality_name: Option<String>,
    /// Organization name.
    pub organization_name: Option<String>,
    /// Organizational unit name.
    pub organizational_unit_name: Option<String>,
    /// Explicit commonName override.
    pub common_name: Option<String>,
    /// Contact email address.
    pub email_address: Option<String>,
}

impl Default for CertificateSubject {
    fn default() -> Self {
        Self {
            country_name: Some("CN".to_string()),
            state_or_province_name: None,
            locality_name: None,
            organization_name: None,
            organizational_unit_name: None,
            common_name: None,
            email_address: None,
        }
    }
}

impl CertificateSubject {
    /// Returns the field value if it is set and non-empty.
    pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_default_country_is_cn() {
        let subject = CertificateSubject::default();
        assert_eq!(subject.country_name.as_deref(), Some("CN"));
        assert!(subject.common_name.is_none());
    }

    #[test]
    fn test_empty_string_treated_as_unset() {
        let field = Some(String::new());
        assert!(CertificateSubject::non_empty(&field).is_none());

        let field = Some("Beijing".to_string());
        assert_eq!(CertificateSubject::non_empty(&field), Some("Beijing"));
    }
}
