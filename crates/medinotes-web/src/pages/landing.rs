//! Landing Page

use leptos::prelude::*;

use medinotes_core::{
    AuthState,
    content::{FEATURES, HERO_TAGLINE, HERO_TITLE, PRICING, PRODUCT_NAME},
};

use crate::components::{AuthActions, FeatureCard, PricingCard, Slot};

/// Marketing page with authentication-dependent actions
///
/// Re-renders both action slots whenever `auth` changes; everything else is
/// static.
#[component]
pub fn LandingPage(#[prop(into)] auth: Signal<AuthState>, on_sign_in: Callback<()>) -> impl IntoView {
    let [first_line, second_line] = HERO_TITLE;

    view! {
        <main class="landing">
            <div class="container">
                <nav class="navbar">
                    <h1 class="brand">{PRODUCT_NAME}</h1>
                    {move || view! { <AuthActions state=auth.get() position=Slot::Nav on_sign_in=on_sign_in /> }}
                </nav>

                <section class="hero">
                    <h2 class="hero-title">{first_line}<br />{second_line}</h2>
                    <p class="tagline">{HERO_TAGLINE}</p>

                    <div class="features">
                        {FEATURES
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature=feature /> })
                            .collect::<Vec<_>>()}
                    </div>

                    <PricingCard pricing=PRICING />

                    {move || view! { <AuthActions state=auth.get() position=Slot::Hero on_sign_in=on_sign_in /> }}
                </section>
            </div>
        </main>
    }
}
