//! Static Rendering
//!
//! Renders complete HTML documents with Leptos' `RenderHtml`. No reactive
//! runtime or hydration: the WASM client replaces `#app` on load.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use medinotes_core::{AuthState, content::PRODUCT_NAME};

use crate::{BASE_PATH_ATTR, ROOT_ID, router_base};
use crate::pages::{LandingPage, NotFoundPage};
use crate::styles::STYLESHEET_PATH;

/// Everything around the page body: head metadata and scripts
#[derive(Clone, Debug, Default)]
pub struct DocumentShell {
    /// Public path prefix, e.g. `/` or `/landing/`
    pub base_path: String,

    /// Module script produced by `wasm-bindgen --target web`, relative to
    /// `base_path`; `None` ships the page without the client
    pub client_module: Option<String>,

    /// Clerk publishable key; without it the client reports sign-in as
    /// unavailable
    pub clerk_publishable_key: Option<String>,

    /// URL of the hosted `clerk-js` browser bundle
    pub clerk_js_url: String,
}

impl DocumentShell {
    fn asset(&self, path: &str) -> String {
        let base = if self.base_path.is_empty() { "/" } else { &self.base_path };
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    fn head(&self) -> String {
        let mut head = format!(
            concat!(
                r#"<meta charset="utf-8" />"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1" />"#,
                r#"<meta name="description" content="AI-powered consultation note summaries" />"#,
                "<title>{title}</title>",
                r#"<link rel="stylesheet" href="{css}" />"#,
            ),
            title = PRODUCT_NAME,
            css = self.asset(STYLESHEET_PATH),
        );

        if let Some(key) = &self.clerk_publishable_key {
            head.push_str(&format!(
                r#"<script async crossorigin="anonymous" data-clerk-publishable-key="{}" src="{}" type="text/javascript"></script>"#,
                escape_attr(key),
                escape_attr(&self.clerk_js_url),
            ));
        }
        head
    }

    fn client_script(&self) -> String {
        self.client_module.as_deref().map_or_else(String::new, |module| {
            format!(
                r#"<script type="module">import init from "{}"; init();</script>"#,
                escape_attr(&self.asset(module))
            )
        })
    }

    fn wrap(&self, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en"><head>{head}</head><body><div id="{ROOT_ID}" {BASE_PATH_ATTR}="{base}">{body}</div>{client}</body></html>
"#,
            head = self.head(),
            base = escape_attr(&router_base(&self.base_path)),
            client = self.client_script(),
        )
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the landing page for `state` as a full HTML document
///
/// Static exports use [`AuthState::Loading`], since the visitor is unknown
/// until the identity provider runs in the browser.
pub fn render_landing_document(state: &AuthState, shell: &DocumentShell) -> String {
    let state = state.clone();
    let body = Owner::new().with(move || {
        let auth = Signal::derive(move || state.clone());
        let on_sign_in = Callback::new(|()| {});
        view! { <LandingPage auth=auth on_sign_in=on_sign_in /> }.to_html()
    });
    shell.wrap(&body)
}

/// Render the not-found page as a full HTML document
pub fn render_not_found_document(shell: &DocumentShell) -> String {
    let body = Owner::new().with(|| view! { <NotFoundPage /> }.to_html());
    shell.wrap(&body)
}
