#[cfg(test)]
use mockall::automock;
use std::{
    collections::HashSet,
    fmt::{
        Debug,
        Formatter,
    },
};

/// An opaque token presented by the caller of a guarded operation.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}

#[cfg_attr(test, automock)]
pub trait Authorizer: Send + Sync + 'static {
    fn is_authorized(&self, credential: &Credential) -> bool;
}

/// Accepts any of a fixed set of keys loaded from the server config.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyAuthorizer {
    keys: HashSet<String>,
}

impl StaticKeyAuthorizer {
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            keys: keys.into_iter().filter(|key| !key.is_empty()).collect(),
        }
    }
}

impl Authorizer for StaticKeyAuthorizer {
    fn is_authorized(&self, credential: &Credential) -> bool {
        self.keys.contains(credential.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_key_authorizer() {
        let authorizer =
            StaticKeyAuthorizer::new(vec!["secret-key".to_string(), "".to_string()]);
        assert!(authorizer.is_authorized(&Credential::new("secret-key")));
        assert!(!authorizer.is_authorized(&Credential::new("other-key")));
        assert!(!authorizer.is_authorized(&Credential::default()));
    }

    #[test]
    fn test_credential_debug_hides_token() {
        let credential = Credential::new("secret-key");
        assert!(!format!("{:?}", credential).contains("secret-key"));
    }
}
