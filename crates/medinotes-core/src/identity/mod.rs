//! Identity Provider Integration
//!
//! The identity widget is an injected, read-only capability. The view never
//! stores or mutates session state; it asks for the current value and listens
//! for changes.

mod mock;
mod wait;

pub use mock::MockIdentity;
pub use wait::{LoadPolicy, wait_for};

use std::fmt;

use crate::auth::AuthState;

/// Listener invoked with every new authentication state
pub type Listener = Box<dyn Fn(AuthState)>;

/// Identity provider trait (Strategy pattern)
///
/// Implemented by the browser binding to the hosted identity widget and by
/// [`MockIdentity`] for tests. Not `Send`: providers live on the browser's
/// single UI thread.
pub trait IdentityProvider {
    /// Current authentication state
    fn current(&self) -> AuthState;

    /// Register for state changes
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Ask the provider to open its modal sign-in flow
    fn open_sign_in(&self);

    /// Provider name, for logs
    fn name(&self) -> &str;
}

/// Handle to a registered listener; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Subscription that has nothing to cancel
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribe now
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the listener registered for the rest of the page lifetime
    ///
    /// The cancel closure is leaked, not dropped: it owns whatever the
    /// listener needs to stay callable.
    pub fn forget(mut self) {
        if let Some(cancel) = self.cancel.take() {
            std::mem::forget(cancel);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
