//! Mock Identity Provider
//!
//! For tests and offline previews. State is changed by hand and pushed to
//! every registered listener.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{IdentityProvider, Listener, Subscription};
use crate::auth::{Account, AuthState};

type Listeners = RefCell<Vec<(u64, Rc<dyn Fn(AuthState)>)>>;

/// In-memory identity provider
pub struct MockIdentity {
    state: RefCell<AuthState>,
    listeners: Rc<Listeners>,
    next_id: Cell<u64>,
    sign_in_requests: Cell<usize>,
    /// Sign in as this account when `open_sign_in` is called
    auto_sign_in: Option<Account>,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self::new(AuthState::Loading)
    }
}

impl MockIdentity {
    pub fn new(state: AuthState) -> Self {
        Self {
            state: RefCell::new(state),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            sign_in_requests: Cell::new(0),
            auto_sign_in: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(AuthState::Anonymous)
    }

    pub fn signed_in(display_name: &str) -> Self {
        Self::new(AuthState::Authenticated(Account::new(display_name)))
    }

    /// Complete the sign-in flow immediately with `account`
    #[must_use]
    pub fn with_auto_sign_in(mut self, account: Account) -> Self {
        self.auto_sign_in = Some(account);
        self
    }

    /// Replace the state and notify listeners
    pub fn set_state(&self, state: AuthState) {
        if *self.state.borrow() == state {
            return;
        }
        self.state.replace(state.clone());

        // Snapshot so listeners may subscribe/unsubscribe while being called
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(state.clone());
        }
    }

    pub fn sign_out(&self) {
        self.set_state(AuthState::Anonymous);
    }

    /// Number of times the sign-in flow was requested
    pub fn sign_in_requests(&self) -> usize {
        self.sign_in_requests.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl IdentityProvider for MockIdentity {
    fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));

        let listeners: Weak<Listeners> = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }

    fn open_sign_in(&self) {
        self.sign_in_requests.set(self.sign_in_requests.get() + 1);
        if let Some(account) = self.auto_sign_in.clone() {
            self.set_state(AuthState::Authenticated(account));
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<AuthState>>>, Listener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |state| sink.borrow_mut().push(state)))
    }

    #[test]
    fn test_listener_receives_changes() {
        let identity = MockIdentity::default();
        let (seen, listener) = recorder();
        let _subscription = identity.subscribe(listener);

        identity.set_state(AuthState::Anonymous);
        identity.set_state(AuthState::Authenticated(Account::new("Dr. Grey")));
        identity.sign_out();

        assert_eq!(
            *seen.borrow(),
            vec![
                AuthState::Anonymous,
                AuthState::Authenticated(Account::new("Dr. Grey")),
                AuthState::Anonymous,
            ]
        );
        assert_eq!(identity.current(), AuthState::Anonymous);
    }

    #[test]
    fn test_unchanged_state_is_not_rebroadcast() {
        let identity = MockIdentity::anonymous();
        let (seen, listener) = recorder();
        let _subscription = identity.subscribe(listener);

        identity.set_state(AuthState::Anonymous);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let identity = MockIdentity::anonymous();
        let (seen, listener) = recorder();
        let subscription = identity.subscribe(listener);
        assert_eq!(identity.listener_count(), 1);

        drop(subscription);
        assert_eq!(identity.listener_count(), 0);

        identity.set_state(AuthState::Authenticated(Account::default()));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscription_outliving_provider() {
        let identity = MockIdentity::anonymous();
        let (_, listener) = recorder();
        let subscription = identity.subscribe(listener);
        drop(identity);
        drop(subscription);
    }

    #[test]
    fn test_open_sign_in() {
        let identity = MockIdentity::anonymous();
        identity.open_sign_in();
        assert_eq!(identity.sign_in_requests(), 1);
        assert_eq!(identity.current(), AuthState::Anonymous);

        let identity = MockIdentity::anonymous().with_auto_sign_in(Account::new("Dr. Grey"));
        identity.open_sign_in();
        assert!(identity.current().is_authenticated());
    }
}
