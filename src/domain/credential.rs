//! Operator-supplied bearer credential.

use std::fmt;

/// OAuth2 bearer token attached to every outbound call.
///
/// The token is fixed for the lifetime of a scenario run. `Debug` never
/// prints the secret so it can sit inside structs that get logged.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Build a token from optional raw input.
    ///
    /// Blank input counts as no credential at all.
    #[must_use]
    pub fn from_raw(raw: Option<String>) -> Option<Self> {
        raw.map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(Self)
    }

    /// Get the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
