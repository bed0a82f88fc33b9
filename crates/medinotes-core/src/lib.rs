//! # medinotes-core
//!
//! Renderer-agnostic pieces of the MediNotes Pro landing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   current() / subscribe()   ┌──────────────────┐
//! │  IdentityProvider    │ ──────────────────────────▶ │    AuthState     │
//! │  (Clerk, Mock, ...)  │                             └────────┬─────────┘
//! └──────────────────────┘                                      │
//!                                                               ▼
//!                          ┌──────────────────┐   LandingActions::for_state
//!                          │  content (static)│   ┌──────────────────────┐
//!                          └──────────────────┘   │  Branch + Actions    │
//!                                                 └──────────────────────┘
//! ```
//!
//! The view layer (`medinotes-web`) is a pure function of [`AuthState`]; the
//! identity runtime is injected through [`IdentityProvider`] so it can be
//! replaced by [`identity::MockIdentity`] in tests.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod identity;
pub mod landing;

pub use auth::{Account, AuthState};
pub use config::{BuildConfig, ImageConfig, OutputMode};
pub use error::{ConfigError, ConsistencyError};
pub use identity::{IdentityProvider, Subscription};
pub use landing::{Action, Branch, LandingActions, verify_document};
