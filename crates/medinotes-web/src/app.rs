//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use medinotes_core::AuthState;

use crate::pages::{LandingPage, NotFoundPage};

/// Root application component
///
/// Only the landing page is served here (at the root and as `index.html`,
/// which static hosts often expose); the application surface under
/// `/product` is a separate bundle. `base` is the public path prefix as
/// returned by [`crate::router_base`].
#[component]
pub fn App(
    #[prop(into)] auth: Signal<AuthState>,
    on_sign_in: Callback<()>,
    #[prop(optional)] base: String,
) -> impl IntoView {
    let landing = move || view! { <LandingPage auth=auth on_sign_in=on_sign_in /> };

    view! {
        <Router base=base>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=landing />
                <Route path=path!("/index.html") view=landing />
            </Routes>
        </Router>
    }
}
