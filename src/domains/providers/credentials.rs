//! Credential resolution for provider calls.

use super::CredentialError;

/// Picks the API key for a provider call.
///
/// A key supplied with the request wins; otherwise the process-wide default
/// from configuration is used. Blank strings count as absent.
#[derive(Clone, Default)]
pub struct CredentialResolver {
    default_key: Option<String>,
}

impl CredentialResolver {
    pub fn new(default_key: Option<String>) -> Self {
        Self {
            default_key: default_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Resolve the key to use for one call.
    pub fn resolve(&self, supplied: Option<&str>) -> Result<String, CredentialError> {
        supplied
            .filter(|k| !k.trim().is_empty())
            .or(self.default_key.as_deref())
            .map(str::to_string)
            .ok_or(CredentialError::Missing)
    }

    /// Whether a default key is configured.
    pub fn has_default(&self) -> bool {
        self.default_key.is_some()
    }
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("default_key", &self.default_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_key_wins() {
        let resolver = CredentialResolver::new(Some("default".to_string()));
        assert_eq!(resolver.resolve(Some("mine")).unwrap(), "mine");
    }

    #[test]
    fn test_falls_back_to_default() {
        let resolver = CredentialResolver::new(Some("default".to_string()));
        assert_eq!(resolver.resolve(None).unwrap(), "default");
        assert_eq!(resolver.resolve(Some("  ")).unwrap(), "default");
    }

    #[test]
    fn test_missing_everywhere() {
        let resolver = CredentialResolver::new(None);
        assert_eq!(resolver.resolve(None), Err(CredentialError::Missing));
        assert!(!resolver.has_default());
    }

    #[test]
    fn test_blank_default_is_absent() {
        let resolver = CredentialResolver::new(Some(String::new()));
        assert!(resolver.resolve(None).is_err());
    }

    #[test]
    fn test_redacted_in_debug() {
        let resolver = CredentialResolver::new(Some("super_secret_key".to_string()));
        let debug_str = format!("{:?}", resolver);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
