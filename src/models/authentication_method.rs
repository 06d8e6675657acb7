use serde::{Deserialize, Serialize};

/// How clients authenticate against a connection.
///
/// The console supports one provider family; the variants differ in whether
/// connecting clients must additionally present a shared secret.
///
/// # Examples
///
/// ```rust
/// use console_link::AuthenticationMethod;
///
/// // Plain basic authentication
/// let auth = AuthenticationMethod::basic();
///
/// // Basic authentication gated on a shared secret
/// let auth = AuthenticationMethod::basic_requires_authentication("s3cret");
/// assert!(auth.requires_authentication());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationMethod {
    /// Basic authentication, no shared secret
    Basic,

    /// Basic authentication; connecting clients must present the shared secret
    BasicRequiresAuthentication {
        /// Secret clients must present; must be non-empty
        shared_secret: String,
    },
}

/// Provider code the console expects in the `AuthProvider` form field.
pub(crate) const AUTH_PROVIDER_CODE: &str = "basic256";

impl AuthenticationMethod {
    /// Plain basic authentication.
    pub fn basic() -> Self {
        Self::Basic
    }

    /// Basic authentication gated on a shared secret.
    pub fn basic_requires_authentication(shared_secret: impl Into<String>) -> Self {
        Self::BasicRequiresAuthentication {
            shared_secret: shared_secret.into(),
        }
    }

    /// The provider code submitted for this method.
    pub fn provider_code(&self) -> &'static str {
        AUTH_PROVIDER_CODE
    }

    /// Whether connecting clients must present a shared secret.
    pub fn requires_authentication(&self) -> bool {
        matches!(self, Self::BasicRequiresAuthentication { .. })
    }

    /// The shared secret, if this method carries one.
    pub fn shared_secret(&self) -> Option<&str> {
        match self {
            Self::Basic => None,
            Self::BasicRequiresAuthentication { shared_secret } => Some(shared_secret),
        }
    }
}

impl Default for AuthenticationMethod {
    fn default() -> Self {
        Self::Basic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_code_is_shared_across_variants() {
        assert_eq!(AuthenticationMethod::basic().provider_code(), "basic256");
        assert_eq!(
            AuthenticationMethod::basic_requires_authentication("s").provider_code(),
            "basic256"
        );
    }

    #[test]
    fn test_shared_secret_access() {
        assert_eq!(AuthenticationMethod::basic().shared_secret(), None);
        assert_eq!(
            AuthenticationMethod::basic_requires_authentication("topsecret").shared_secret(),
            Some("topsecret")
        );
    }
}
