//! Capability tokens for bearer authorization.

use std::fmt;

/// What a bearer token is allowed to do.
///
/// `/total` and `/history` are gated separately so read-only integrations can
/// hold a narrower token than the one that mutates the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read the running total.
    ReadTotal,
    /// Read the change history.
    ReadHistory,
    /// Read everything and apply changes.
    ReadWrite,
}

impl Capability {
    /// All capabilities, in configuration order.
    pub const ALL: [Self; 3] = [Self::ReadTotal, Self::ReadHistory, Self::ReadWrite];

    /// Environment variable holding the capability-specific token.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ReadTotal => "TALLYBOX_API_GET_TOTAL_TOKEN",
            Self::ReadHistory => "TALLYBOX_API_GET_HISTORY_TOKEN",
            Self::ReadWrite => "TALLYBOX_API_SET_TOKEN",
        }
    }

    /// Snake-case name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadTotal => "read_total",
            Self::ReadHistory => "read_history",
            Self::ReadWrite => "read_write",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved bearer tokens, one per capability.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiTokens {
    /// Token for [`Capability::ReadTotal`].
    pub read_total: String,
    /// Token for [`Capability::ReadHistory`].
    pub read_history: String,
    /// Token for [`Capability::ReadWrite`].
    pub read_write: String,
}

impl ApiTokens {
    /// Uses the same token for every capability.
    #[must_use]
    pub fn shared(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            read_total: token.clone(),
            read_history: token.clone(),
            read_write: token,
        }
    }

    /// Returns the token expected for a capability.
    #[must_use]
    pub fn expected(&self, capability: Capability) -> &str {
        match capability {
            Capability::ReadTotal => &self.read_total,
            Capability::ReadHistory => &self.read_history,
            Capability::ReadWrite => &self.read_write,
        }
    }

    /// Checks a presented bearer credential against the capability's token.
    #[must_use]
    pub fn verify(&self, capability: Capability, presented: &str) -> bool {
        self.expected(capability) == presented
    }
}

// Never print token values.
impl fmt::Debug for ApiTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiTokens")
            .field("read_total", &"<redacted>")
            .field("read_history", &"<redacted>")
            .field("read_write", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered() -> ApiTokens {
        ApiTokens {
            read_total: "total-token".to_string(),
            read_history: "history-token".to_string(),
            read_write: "admin-token".to_string(),
        }
    }

    #[test]
    fn test_shared_tokens_cover_every_capability() {
        let tokens = ApiTokens::shared("secret");
        for capability in Capability::ALL {
            assert_eq!(tokens.expected(capability), "secret");
            assert!(tokens.verify(capability, "secret"));
        }
    }

    #[test]
    fn test_verify_is_scoped_to_capability() {
        let tokens = tiered();
        assert!(tokens.verify(Capability::ReadTotal, "total-token"));
        assert!(!tokens.verify(Capability::ReadHistory, "total-token"));
        assert!(!tokens.verify(Capability::ReadWrite, "history-token"));
        assert!(tokens.verify(Capability::ReadWrite, "admin-token"));
    }

    #[test]
    fn test_verify_requires_exact_match() {
        let tokens = tiered();
        assert!(!tokens.verify(Capability::ReadTotal, "total-token "));
        assert!(!tokens.verify(Capability::ReadTotal, "TOTAL-TOKEN"));
        assert!(!tokens.verify(Capability::ReadTotal, ""));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let rendered = format!("{:?}", tiered());
        assert!(!rendered.contains("admin-token"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::ReadTotal.to_string(), "read_total");
        assert_eq!(Capability::ReadHistory.to_string(), "read_history");
        assert_eq!(Capability::ReadWrite.to_string(), "read_write");
    }
}
