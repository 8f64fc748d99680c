//! Process-wide HMAC secret shared by the token issuer and this server.

use std::fmt;

/// Symmetric key used to verify HS256 access tokens.
///
/// Loaded once at startup and never mutated. Key material is not printable via Debug.
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Returns `None` for an empty (or whitespace-only) secret.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return None;
        }
        Some(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}
