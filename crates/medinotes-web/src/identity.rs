//! Clerk Identity Binding
//!
//! Binds the global `Clerk` object installed by the hosted `clerk-js` script.
//! Session handling, the sign-in modal and the account button all stay inside
//! Clerk; this module only reads the signed-in user and forwards changes.

use std::time::Duration;

use js_sys::{Function, Object, Promise, Reflect};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use medinotes_core::{
    Account, AuthState, IdentityProvider, Subscription,
    identity::{Listener, LoadPolicy, wait_for},
};

use crate::session::bind;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Clerk, js_name = load, catch)]
    async fn clerk_load() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Clerk, js_name = openSignIn)]
    fn clerk_open_sign_in();

    #[wasm_bindgen(js_namespace = Clerk, js_name = mountUserButton)]
    fn clerk_mount_user_button(node: &web_sys::HtmlDivElement, props: &JsValue);

    #[wasm_bindgen(js_namespace = Clerk, js_name = unmountUserButton)]
    fn clerk_unmount_user_button(node: &web_sys::HtmlDivElement);

    #[wasm_bindgen(js_namespace = Clerk, js_name = addListener)]
    fn clerk_add_listener(callback: &Closure<dyn FnMut(JsValue)>) -> Function;
}

fn clerk_global() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("Clerk"))
        .ok()
        .filter(|clerk| !clerk.is_undefined() && !clerk.is_null())
}

fn string_field(value: &JsValue, key: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|field| field.as_string())
        .filter(|s| !s.is_empty())
}

/// Map a Clerk `user` object (or null) onto the authentication signal
fn state_from_user(user: &JsValue) -> AuthState {
    if user.is_null() || user.is_undefined() {
        return AuthState::Anonymous;
    }

    let display_name = string_field(user, "fullName").or_else(|| {
        Reflect::get(user, &JsValue::from_str("primaryEmailAddress"))
            .ok()
            .and_then(|email| string_field(&email, "emailAddress"))
    });

    AuthState::Authenticated(Account { display_name })
}

/// Resolve after `interval` on the browser's timer queue
async fn sleep(interval: Duration) {
    let millis = i32::try_from(interval.as_millis()).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            // No timer available: resolve immediately
            if let Err(err) = resolve.call0(&JsValue::NULL) {
                leptos::logging::warn!("could not resolve timer promise: {err:?}");
            }
        }
    });
    if let Err(err) = JsFuture::from(promise).await {
        leptos::logging::warn!("timer promise rejected: {err:?}");
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| string_field(err, "message"))
        .unwrap_or_else(|| "Clerk failed to load".into())
}

/// Handle to a loaded Clerk instance
#[derive(Clone, Copy, Debug, Default)]
pub struct ClerkIdentity;

impl ClerkIdentity {
    /// Wait for the `async` clerk-js script to install `window.Clerk`, then
    /// for `Clerk.load()`
    ///
    /// # Errors
    ///
    /// Fails when the script does not appear within `policy.timeout` or the
    /// load promise rejects.
    pub async fn load(policy: LoadPolicy) -> Result<Self, String> {
        if wait_for(policy, clerk_global, sleep).await.is_none() {
            return Err(format!(
                "Clerk script not loaded after {:?} (is CLERK_PUBLISHABLE_KEY set?)",
                policy.timeout
            ));
        }
        clerk_load().await.map_err(|err| describe(&err))?;
        Ok(Self)
    }
}

impl IdentityProvider for ClerkIdentity {
    fn current(&self) -> AuthState {
        match clerk_global() {
            Some(clerk) => {
                let user = Reflect::get(&clerk, &JsValue::from_str("user")).unwrap_or(JsValue::NULL);
                state_from_user(&user)
            }
            None => AuthState::Loading,
        }
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        if clerk_global().is_none() {
            return Subscription::detached();
        }

        // Listener receives `{ client, session, user, organization }`
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |resources: JsValue| {
            let user = Reflect::get(&resources, &JsValue::from_str("user")).unwrap_or(JsValue::NULL);
            listener(state_from_user(&user));
        });
        let unsubscribe = clerk_add_listener(&callback);

        Subscription::new(move || {
            if let Err(err) = unsubscribe.call0(&JsValue::NULL) {
                leptos::logging::warn!("Clerk listener removal failed: {}", describe(&err));
            }
            drop(callback);
        })
    }

    fn open_sign_in(&self) {
        if clerk_global().is_some() {
            clerk_open_sign_in();
        } else {
            leptos::logging::warn!("sign-in requested before Clerk was available");
        }
    }

    fn name(&self) -> &str {
        "clerk"
    }
}

/// Mount Clerk's account button (with the user's name) into `node`
pub fn mount_account_button(node: &web_sys::HtmlDivElement) {
    if clerk_global().is_none() {
        return;
    }
    let props = Object::new();
    if let Err(err) = Reflect::set(&props, &JsValue::from_str("showName"), &JsValue::TRUE) {
        leptos::logging::warn!("account button props rejected: {}", describe(&err));
    }
    clerk_mount_user_button(node, &props);
}

/// Remove an account button mounted by [`mount_account_button`]
pub fn unmount_account_button(node: &web_sys::HtmlDivElement) {
    if clerk_global().is_some() {
        clerk_unmount_user_button(node);
    }
}

/// Drive `set_auth` from Clerk for the rest of the page lifetime
///
/// The signal stays `Loading` until Clerk resolves and becomes `Unavailable`
/// if it never does.
pub fn connect(set_auth: WriteSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        match ClerkIdentity::load(LoadPolicy::default()).await {
            Ok(clerk) => {
                leptos::logging::log!("identity provider ready: {}", clerk.name());
                bind(&clerk, set_auth).forget();
            }
            Err(reason) => {
                leptos::logging::warn!("identity provider unavailable: {reason}");
                set_auth.set(AuthState::unavailable(reason));
            }
        }
    });
}
