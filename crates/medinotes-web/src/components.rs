//! UI Components

use leptos::prelude::*;

use medinotes_core::{
    Action, AuthState, LandingActions,
    content::{Feature, Pricing},
    landing::{ACCOUNT_CONTROL, SIGN_IN_CONTROL},
};

/// Where an action slot sits on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Top-right of the navigation bar
    Nav,
    /// Large call to action under the pricing card
    Hero,
}

impl Slot {
    const fn class(self) -> &'static str {
        match self {
            Self::Nav => "nav-actions",
            Self::Hero => "hero-actions",
        }
    }

    const fn button_class(self) -> &'static str {
        match self {
            Self::Nav => "btn btn-primary",
            Self::Hero => "btn btn-hero",
        }
    }
}

/// Feature card with gradient glow
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <div class=format!("feature-glow {}", feature.accent.class())></div>
            <div class="feature-body">
                <div class="feature-icon">{feature.icon}</div>
                <h3>{feature.title}</h3>
                <p>{feature.blurb}</p>
            </div>
        </div>
    }
}

/// Pricing preview
#[component]
pub fn PricingCard(pricing: Pricing) -> impl IntoView {
    view! {
        <div class="pricing">
            <h3>{pricing.name}</h3>
            <p class="price">{pricing.amount()}<span>{pricing.interval.suffix()}</span></p>
            <ul>
                {pricing
                    .included
                    .into_iter()
                    .map(|item| view! { <li>"✓ " {item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// One authentication-dependent action slot
///
/// Both slots carry the same `data-auth-branch` marker so a rendered page
/// can be checked against the state it was rendered from.
#[component]
pub fn AuthActions(state: AuthState, position: Slot, on_sign_in: Callback<()>) -> impl IntoView {
    let actions = LandingActions::for_state(&state);
    let action = match position {
        Slot::Nav => actions.nav,
        Slot::Hero => actions.cta,
    };

    let control = match action {
        Action::SignIn { label } => view! {
            <button
                class=position.button_class()
                data-control=SIGN_IN_CONTROL
                on:click=move |_| on_sign_in.run(())
            >
                {label}
            </button>
        }
        .into_any(),
        Action::OpenApp { href, label } => view! {
            <a href=href class=position.button_class()>{label}</a>
        }
        .into_any(),
        Action::Pending => view! {
            <span class="btn-placeholder" aria-busy="true"></span>
        }
        .into_any(),
        Action::Unavailable { message } => view! {
            <button class=position.button_class() disabled=true>{message}</button>
        }
        .into_any(),
    };

    let account = state
        .account()
        .filter(|_| position == Slot::Nav && actions.show_account)
        .map(|account| view! { <AccountControl label=account.label().to_string() /> });

    view! {
        <div class=position.class() data-auth-branch=actions.branch.as_str()>
            {control}
            {account}
        </div>
    }
}

/// Mount point for the identity provider's account button
#[component]
fn AccountControl(label: String) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move |_| {
            if let Some(el) = node.get() {
                crate::identity::mount_account_button(&el);
            }
        });
        on_cleanup(move || {
            if let Some(el) = node.try_get_untracked().flatten() {
                crate::identity::unmount_account_button(&el);
            }
        });
    }

    view! {
        <div class="account" data-control=ACCOUNT_CONTROL aria-label=label node_ref=node></div>
    }
}
