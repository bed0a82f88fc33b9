//! Authentication Signal Binding

use leptos::prelude::*;

use medinotes_core::{AuthState, IdentityProvider, Subscription};

/// Seed `auth` from `provider` and follow every change it reports
///
/// The page re-renders from `auth` alone; the provider is never asked for
/// anything else. Dropping the returned [`Subscription`] stops the updates.
pub fn bind(provider: &impl IdentityProvider, auth: WriteSignal<AuthState>) -> Subscription {
    auth.set(provider.current());
    provider.subscribe(Box::new(move |state| auth.set(state)))
}

#[cfg(test)]
mod tests {
    use medinotes_core::{Account, Branch, LandingActions, identity::MockIdentity};

    use super::*;

    fn branch(auth: RwSignal<AuthState>) -> Branch {
        LandingActions::for_state(&auth.get_untracked()).branch
    }

    #[test]
    fn test_signal_follows_provider() {
        let identity = MockIdentity::anonymous();
        let auth = RwSignal::new(AuthState::Loading);
        let _subscription = bind(&identity, auth.write_only());

        assert_eq!(auth.get_untracked(), AuthState::Anonymous);
        assert_eq!(branch(auth), Branch::Anonymous);

        identity.set_state(AuthState::Authenticated(Account::new("Dr. Grey")));
        assert_eq!(branch(auth), Branch::Authenticated);
        assert!(LandingActions::for_state(&auth.get_untracked()).links_to_app());

        identity.sign_out();
        assert_eq!(branch(auth), Branch::Anonymous);
        assert!(LandingActions::for_state(&auth.get_untracked()).offers_sign_in());
    }

    #[test]
    fn test_forgotten_binding_keeps_following() {
        let identity = MockIdentity::default();
        let auth = RwSignal::new(AuthState::Anonymous);
        bind(&identity, auth.write_only()).forget();
        assert_eq!(auth.get_untracked(), AuthState::Loading);

        identity.set_state(AuthState::Anonymous);
        assert_eq!(branch(auth), Branch::Anonymous);
        assert_eq!(identity.listener_count(), 1);
    }

    #[test]
    fn test_dropped_binding_stops_following() {
        let identity = MockIdentity::anonymous();
        let auth = RwSignal::new(AuthState::Loading);
        drop(bind(&identity, auth.write_only()));

        identity.set_state(AuthState::Authenticated(Account::default()));
        assert_eq!(auth.get_untracked(), AuthState::Anonymous);
    }
}
