//! Site Configuration
//!
//! Paths and identity settings layered on top of [`BuildConfig`], read from
//! the environment (after `.env` is loaded) and overridable from the CLI.

use std::path::PathBuf;

use medinotes_core::BuildConfig;
use medinotes_web::DocumentShell;

use crate::error::Result;

pub const DEFAULT_CLERK_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/@clerk/clerk-js@5/dist/clerk.browser.js";

/// Entry module emitted by `wasm-bindgen --target web` for medinotes-web
pub const CLIENT_MODULE: &str = "medinotes_web.js";

/// Directory the client bundle is published under
pub const PKG_MOUNT: &str = "pkg";

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub build: BuildConfig,

    /// Static export destination
    pub out_dir: PathBuf,

    /// Files copied verbatim into the export (images, favicon, ...)
    pub public_dir: PathBuf,

    /// `wasm-bindgen` output for the client bundle
    pub pkg_dir: PathBuf,

    /// Public path prefix
    pub base_path: String,

    pub clerk_publishable_key: Option<String>,
    pub clerk_js_url: String,

    /// Preview server address
    pub bind_addr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            out_dir: "out".into(),
            public_dir: "public".into(),
            pkg_dir: "crates/medinotes-web/pkg".into(),
            base_path: "/".into(),
            clerk_publishable_key: None,
            clerk_js_url: DEFAULT_CLERK_JS_URL.into(),
            bind_addr: "0.0.0.0:3000".into(),
        }
    }
}

impl SiteConfig {
    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Propagates invalid build options.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        Ok(Self {
            build: BuildConfig::from_env()?,
            out_dir: var("MEDINOTES_OUT_DIR").map_or(defaults.out_dir, PathBuf::from),
            public_dir: var("MEDINOTES_PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from),
            pkg_dir: var("MEDINOTES_PKG_DIR").map_or(defaults.pkg_dir, PathBuf::from),
            base_path: var("MEDINOTES_BASE_PATH").unwrap_or(defaults.base_path),
            clerk_publishable_key: var("CLERK_PUBLISHABLE_KEY"),
            clerk_js_url: var("CLERK_JS_URL").unwrap_or(defaults.clerk_js_url),
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }

    /// Whether a client bundle has been built
    pub fn has_client_bundle(&self) -> bool {
        self.pkg_dir.join(CLIENT_MODULE).is_file()
    }

    /// Document shell; the client script is only referenced when the bundle
    /// exists, so a page without it still renders fully
    pub fn shell(&self) -> DocumentShell {
        DocumentShell {
            base_path: self.base_path.clone(),
            client_module: self
                .has_client_bundle()
                .then(|| format!("{PKG_MOUNT}/{CLIENT_MODULE}")),
            clerk_publishable_key: self.clerk_publishable_key.clone(),
            clerk_js_url: self.clerk_js_url.clone(),
        }
    }

    /// Log what the page will be missing
    pub fn warn_incomplete(&self) {
        if self.clerk_publishable_key.is_none() {
            tracing::warn!("⚠ CLERK_PUBLISHABLE_KEY not set - sign-in will show as unavailable");
        }
        if !self.has_client_bundle() {
            tracing::warn!(
                "⚠ client bundle not found at {} - page will stay in its loading state",
                self.pkg_dir.join(CLIENT_MODULE).display()
            );
            tracing::warn!("  Build it: wasm-pack build crates/medinotes-web --target web -- --features csr");
        }
    }
}
