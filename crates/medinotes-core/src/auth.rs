//! Visitor Session State
//!
//! The authentication signal is owned by the identity provider. This crate
//! only ever reads it to choose what to render.

use serde::{Deserialize, Serialize};

/// Signed-in account as exposed by the identity provider
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Name shown next to the account control (full name or primary email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Account {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }

    /// Label for the account control, falling back to a generic one
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Account")
    }
}

/// Authentication signal consumed by the landing view
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthState {
    /// Provider has not emitted a value yet
    #[default]
    Loading,

    /// Visitor is signed out
    Anonymous,

    /// Visitor has an active session
    Authenticated(Account),

    /// Provider failed to initialize
    Unavailable { reason: String },
}

impl AuthState {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether the provider has produced a definitive answer
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Anonymous | Self::Authenticated(_))
    }

    pub const fn account(&self) -> Option<&Account> {
        match self {
            Self::Authenticated(account) => Some(account),
            _ => None,
        }
    }
}
