//! Static Export
//!
//! Writes a self-contained bundle that any static file host can serve:
//!
//! ```text
//! out/
//! ├── index.html            landing page, pre-rendered in the loading state
//! ├── 404.html
//! ├── styles.css
//! ├── pkg/                  WASM client, when built
//! ├── <public/*>            copied verbatim (images are never transformed)
//! └── export-manifest.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use medinotes_core::{AuthState, BuildConfig, verify_document};
use medinotes_web::{
    render_landing_document, render_not_found_document,
    styles::{LANDING_CSS, STYLESHEET_PATH},
};

use crate::config::{PKG_MOUNT, SiteConfig};
use crate::error::{Result, SiteError};

pub const MANIFEST_FILE: &str = "export-manifest.json";

/// Written next to the exported files
#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub generator: &'static str,
    pub version: &'static str,
    pub config: &'a BuildConfig,
    /// Paths relative to the export root, sorted
    pub files: &'a [String],
}

/// Outcome of a successful export
#[derive(Debug)]
pub struct ExportReport {
    pub out_dir: PathBuf,
    /// Paths relative to `out_dir`, sorted, manifest excluded
    pub files: Vec<String>,
    pub client_bundled: bool,
}

/// Run the landing consistency check on a rendered page
///
/// Violations fail the render in strict mode and are logged otherwise.
///
/// # Errors
///
/// [`SiteError::Consistency`] in strict mode.
pub fn check_rendered(config: &BuildConfig, html: &str, state: &AuthState) -> Result<()> {
    match verify_document(html, state) {
        Ok(()) => Ok(()),
        Err(err) if config.strict_mode => Err(err.into()),
        Err(err) => {
            tracing::warn!("landing consistency check failed: {}", err);
            Ok(())
        }
    }
}

/// Export the site into `site.out_dir`
///
/// # Errors
///
/// Fails on invalid configuration, non-static output mode, strict-mode
/// consistency violations, and filesystem errors.
pub fn export(site: &SiteConfig) -> Result<ExportReport> {
    site.build.validate()?;
    if !site.build.is_static() {
        return Err(SiteError::NotStatic(site.build.output));
    }

    let out_dir = site.out_dir.clone();
    fs::create_dir_all(&out_dir).map_err(|e| SiteError::io(&out_dir, e))?;

    let shell = site.shell();
    let mut files = Vec::new();

    let state = AuthState::Loading;
    let index = render_landing_document(&state, &shell);
    check_rendered(&site.build, &index, &state)?;
    write_file(&out_dir, "index.html", index.as_bytes(), &mut files)?;
    write_file(&out_dir, "404.html", render_not_found_document(&shell).as_bytes(), &mut files)?;
    write_file(&out_dir, STYLESHEET_PATH, LANDING_CSS.as_bytes(), &mut files)?;

    if site.public_dir.is_dir() {
        copy_tree(&site.public_dir, &out_dir, &out_dir, &mut files)?;
    } else {
        tracing::debug!("no public directory at {}", site.public_dir.display());
    }

    let client_bundled = site.has_client_bundle();
    if client_bundled {
        copy_tree(&site.pkg_dir, &out_dir.join(PKG_MOUNT), &out_dir, &mut files)?;
    }

    files.sort();
    files.dedup();

    let manifest = ExportManifest {
        generator: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: &site.build,
        files: &files,
    };
    let manifest_path = out_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?)
        .map_err(|e| SiteError::io(&manifest_path, e))?;

    tracing::info!(
        "exported {} files to {} (client bundled: {})",
        files.len(),
        out_dir.display(),
        client_bundled
    );

    Ok(ExportReport {
        out_dir,
        files,
        client_bundled,
    })
}

fn write_file(root: &Path, relative: &str, contents: &[u8], files: &mut Vec<String>) -> Result<()> {
    let path = root.join(relative);
    fs::write(&path, contents).map_err(|e| SiteError::io(&path, e))?;
    tracing::debug!("wrote {}", path.display());
    files.push(relative.to_string());
    Ok(())
}

/// Copy `from` into `to` recursively, recording paths relative to `root`
fn copy_tree(from: &Path, to: &Path, root: &Path, files: &mut Vec<String>) -> Result<()> {
    fs::create_dir_all(to).map_err(|e| SiteError::io(to, e))?;

    let entries = fs::read_dir(from).map_err(|e| SiteError::io(from, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(from, e))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| SiteError::io(&source, e))?;

        if file_type.is_dir() {
            copy_tree(&source, &target, root, files)?;
        } else if file_type.is_file() {
            fs::copy(&source, &target).map_err(|e| SiteError::io(&source, e))?;
            if let Ok(relative) = target.strip_prefix(root) {
                files.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    Ok(())
}
