//! Credential providers for authenticated requests.

use std::sync::RwLock;

use log::debug;

/// Key the access token is stored under in the client session.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Environment variable [`SessionToken::from_env`] reads the token from.
pub const ACCESS_TOKEN_ENV: &str = "SUPERFIT_ACCESS_TOKEN";

/// Source of the bearer token attached to outgoing requests.
pub trait CredentialProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Provider for unauthenticated clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn access_token(&self) -> Option<String> {
        None
    }
}

/// Mutable in-memory token slot for the lifetime of a client session.
#[derive(Debug, Default)]
pub struct SessionToken {
    token: RwLock<Option<String>>,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Seeds the session from `SUPERFIT_ACCESS_TOKEN`, empty if unset.
    pub fn from_env() -> Self {
        match std::env::var(ACCESS_TOKEN_ENV) {
            Ok(token) => {
                debug!("Loaded {ACCESS_TOKEN_KEY} from environment ({} chars)", token.len());
                Self::new(token)
            }
            Err(_) => Self::default(),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl CredentialProvider for SessionToken {
    fn access_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Value for the `Authorization` header: `Bearer <token>`, or empty when no token is available.
pub fn bearer_value(provider: &dyn CredentialProvider) -> String {
    match provider.access_token() {
        Some(token) if !token.is_empty() => format!("Bearer {token}"),
        _ => String::new(),
    }
}
