//! Not Found Page

use leptos::prelude::*;

use medinotes_core::content::PRODUCT_NAME;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="landing not-found">
            <div class="container">
                <h1 class="brand">{PRODUCT_NAME}</h1>
                <p>"Page not found"</p>
                <a href="/" class="btn btn-primary">"Back to home"</a>
            </div>
        </main>
    }
}
