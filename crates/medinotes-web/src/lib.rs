//! MediNotes Pro Landing Page
//!
//! Leptos components shared by the WASM client (`csr`) and the static
//! renderer (`ssr`). The page is a pure function of the [`AuthState`] signal;
//! the identity widget is bound in [`identity`] and only compiled for the
//! browser.

mod app;
mod components;
mod pages;
mod session;
pub mod styles;

#[cfg(feature = "csr")]
pub mod identity;

#[cfg(feature = "ssr")]
mod render;

pub use app::App;
pub use medinotes_core::AuthState;
pub use pages::LandingPage;
pub use session::bind;

#[cfg(feature = "ssr")]
pub use render::{DocumentShell, render_landing_document, render_not_found_document};

/// Element the page is pre-rendered into and the client mounts over
pub const ROOT_ID: &str = "app";

/// Attribute on the root element carrying the public path prefix
pub const BASE_PATH_ATTR: &str = "data-base-path";

/// Router base for a public path prefix: `/` and `` become ``, `/landing/`
/// becomes `/landing`
pub fn router_base(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;
    use medinotes_core::IdentityProvider;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ID))
    else {
        leptos::logging::error!("#{ROOT_ID} not found, nothing to mount");
        return;
    };

    let base = router_base(&root.get_attribute(BASE_PATH_ATTR).unwrap_or_default());

    // Replace the pre-rendered markup rather than hydrating it
    root.set_inner_html("");
    let root: web_sys::HtmlElement = root.unchecked_into();

    let handle = leptos::mount::mount_to(root, move || {
        let (auth, set_auth) = signal(AuthState::Loading);
        identity::connect(set_auth);
        let on_sign_in = Callback::new(|()| identity::ClerkIdentity.open_sign_in());

        view! { <App auth=auth on_sign_in=on_sign_in base=base /> }
    });
    handle.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_base() {
        assert_eq!(router_base("/"), "");
        assert_eq!(router_base(""), "");
        assert_eq!(router_base("/landing/"), "/landing");
        assert_eq!(router_base("landing"), "/landing");
        assert_eq!(router_base("/a/b"), "/a/b");
    }
}
