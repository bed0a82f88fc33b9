//! Preview Server
//!
//! `output = export`: serves the exported directory as a static host would.
//! `output = server`: renders the landing page on each request.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use medinotes_core::{AuthState, OutputMode};
use medinotes_web::{DocumentShell, render_landing_document, render_not_found_document, styles::LANDING_CSS};

use crate::config::{PKG_MOUNT, SiteConfig};
use crate::export::check_rendered;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub shell: Arc<DocumentShell>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        let shell = site.shell();
        Self {
            site: Arc::new(site),
            shell: Arc::new(shell),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub output: OutputMode,
    pub strict_mode: bool,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        output: state.site.build.output,
        strict_mode: state.site.build.strict_mode,
    })
}

/// Landing page rendered on request (`output = server`)
pub async fn landing(State(state): State<AppState>) -> Response {
    let auth = AuthState::Loading;
    let html = render_landing_document(&auth, &state.shell);

    match check_rendered(&state.site.build, &html, &auth) {
        Ok(()) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], LANDING_CSS)
}

pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render_not_found_document(&state.shell)))
}

/// Build the preview router for the configured output mode
pub fn router(state: AppState) -> Router {
    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone());

    let site = match state.site.build.output {
        OutputMode::Export => {
            let out_dir = &state.site.out_dir;
            Router::new().fallback_service(
                ServeDir::new(out_dir).not_found_service(ServeFile::new(out_dir.join("404.html"))),
            )
        }
        OutputMode::Server => {
            let public = ServeDir::new(&state.site.public_dir)
                .not_found_service(not_found.with_state(state.clone()));
            Router::new()
                .route("/", get(landing))
                .route("/index.html", get(landing))
                .route("/styles.css", get(stylesheet))
                .nest_service(&format!("/{PKG_MOUNT}"), ServeDir::new(&state.site.pkg_dir))
                .fallback_service(public)
                .with_state(state)
        }
    };

    health.merge(site).layer(TraceLayer::new_for_http())
}
