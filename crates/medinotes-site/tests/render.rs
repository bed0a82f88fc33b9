//! Rendered landing page vs. the authentication signal

use leptos::prelude::*;
use medinotes_core::{
    Account, AuthState, Branch, content::required_fragments, identity::MockIdentity,
    verify_document,
};
use medinotes_web::{DocumentShell, bind, render_landing_document};

fn shell() -> DocumentShell {
    DocumentShell {
        base_path: "/".into(),
        client_module: None,
        clerk_publishable_key: Some("pk_test_Y2xlcmsuZXhhbXBsZS5jb20k".into()),
        clerk_js_url: "https://cdn.jsdelivr.net/npm/@clerk/clerk-js@5/dist/clerk.browser.js".into(),
    }
}

fn render(state: &AuthState) -> String {
    render_landing_document(state, &shell())
}

fn signed_in() -> AuthState {
    AuthState::Authenticated(Account::new("Dr. Meredith Grey"))
}

/// Features grid through the pricing card
fn static_block(html: &str) -> &str {
    let start = html.find(r#"<div class="features">"#).expect("features grid");
    let end = html[start..].find("</ul>").expect("pricing list") + start;
    &html[start..end]
}

#[test]
fn test_signed_out_page() {
    let html = render(&AuthState::Anonymous);

    assert!(html.contains(r#"data-control="sign-in""#));
    assert!(html.contains("Sign In"));
    assert!(html.contains("Start Free Trial"));
    assert!(!html.contains(r#"href="/product""#));
    assert!(!html.contains(r#"data-control="account""#));
    assert_eq!(verify_document(&html, &AuthState::Anonymous), Ok(()));
}

#[test]
fn test_signed_in_page() {
    let state = signed_in();
    let html = render(&state);

    assert!(html.contains(r#"href="/product""#));
    assert!(html.contains("Go to App"));
    assert!(html.contains("Open Consultation Assistant"));
    assert!(html.contains(r#"data-control="account""#));
    assert!(html.contains("Dr. Meredith Grey"));
    assert!(!html.contains("Sign In"));
    assert!(!html.contains("Start Free Trial"));
    assert_eq!(verify_document(&html, &state), Ok(()));
}

#[test]
fn test_exactly_one_branch_per_render() {
    for state in [AuthState::Anonymous, signed_in()] {
        let html = render(&state);
        let sign_in = html.contains(r#"data-control="sign-in""#);
        let app_link = html.contains(r#"href="/product""#);
        assert!(sign_in ^ app_link, "{state:?}: sign_in={sign_in} app_link={app_link}");
    }
}

#[test]
fn test_static_content_is_independent_of_auth() {
    let anonymous = render(&AuthState::Anonymous);
    let authenticated = render(&signed_in());
    let loading = render(&AuthState::Loading);

    for html in [&anonymous, &authenticated, &loading] {
        for fragment in required_fragments() {
            assert!(html.contains(&fragment), "missing {fragment:?}");
        }
        assert!(html.contains("$10"));
        assert!(html.contains("/month"));
    }

    assert_eq!(static_block(&anonymous), static_block(&authenticated));
    assert_eq!(static_block(&anonymous), static_block(&loading));
    assert_eq!(static_block(&anonymous).matches("<li>").count(), 3);
}

#[test]
fn test_loading_page_shows_neither_branch() {
    let html = render(&AuthState::Loading);

    assert!(!html.contains(r#"data-control="sign-in""#));
    assert!(!html.contains(r#"href="/product""#));
    assert!(!html.contains(r#"data-control="account""#));
    assert_eq!(html.matches(r#"data-auth-branch="loading""#).count(), 2);
    assert_eq!(verify_document(&html, &AuthState::Loading), Ok(()));
}

#[test]
fn test_unavailable_page() {
    let state = AuthState::unavailable("script blocked");
    let html = render(&state);

    assert!(html.contains("Sign-in unavailable"));
    assert!(!html.contains(r#"data-control="sign-in""#));
    assert!(!html.contains(r#"href="/product""#));
    assert_eq!(verify_document(&html, &state), Ok(()));
}

#[test]
fn test_document_shell() {
    let html = render(&AuthState::Loading);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>MediNotes Pro</title>"));
    assert!(html.contains(r#"href="/styles.css""#));
    assert!(html.contains(r#"data-clerk-publishable-key="pk_test_Y2xlcmsuZXhhbXBsZS5jb20k""#));
    assert!(html.contains(r#"<div id="app" data-base-path="">"#));
    assert!(!html.contains(r#"type="module""#));

    let bare = render_landing_document(&AuthState::Loading, &DocumentShell::default());
    assert!(!bare.contains("data-clerk-publishable-key"));
    assert!(bare.contains(r#"href="/styles.css""#));
}

#[test]
fn test_page_follows_identity_provider() {
    let identity = MockIdentity::anonymous();
    let auth = RwSignal::new(AuthState::Loading);
    let _subscription = bind(&identity, auth.write_only());

    let check = |expected: Branch| {
        let state = auth.get_untracked();
        assert_eq!(Branch::from(&state), expected);

        let html = render(&state);
        assert_eq!(html.matches(&expected.marker()).count(), 2);
        assert_eq!(verify_document(&html, &state), Ok(()));
    };

    check(Branch::Anonymous);

    identity.set_state(signed_in());
    check(Branch::Authenticated);
    assert!(render(&auth.get_untracked()).contains(r#"href="/product""#));

    identity.sign_out();
    check(Branch::Anonymous);
    assert!(!render(&auth.get_untracked()).contains(r#"href="/product""#));
}
