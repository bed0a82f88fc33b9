//! Static export

use std::fs;
use std::path::Path;

use medinotes_core::{AuthState, BuildConfig, ConfigError, OutputMode};
use medinotes_site::{
    SiteConfig, SiteError, export,
    export::{MANIFEST_FILE, check_rendered},
};

fn site(root: &Path) -> SiteConfig {
    SiteConfig {
        out_dir: root.join("out"),
        public_dir: root.join("public"),
        pkg_dir: root.join("pkg"),
        clerk_publishable_key: Some("pk_test_123".into()),
        ..Default::default()
    }
}

fn seed_public(root: &Path) {
    fs::create_dir_all(root.join("public/img")).unwrap();
    fs::write(root.join("public/logo.svg"), "<svg/>").unwrap();
    fs::write(root.join("public/img/hero.png"), [0x89, b'P', b'N', b'G']).unwrap();
}

fn seed_pkg(root: &Path) {
    fs::create_dir_all(root.join("pkg")).unwrap();
    fs::write(root.join("pkg/medinotes_web.js"), "export default async () => {};").unwrap();
    fs::write(root.join("pkg/medinotes_web_bg.wasm"), [0x00, b'a', b's', b'm']).unwrap();
}

#[test]
fn test_export_writes_bundle() {
    let dir = tempfile::tempdir().unwrap();
    seed_public(dir.path());
    seed_pkg(dir.path());

    let report = export(&site(dir.path())).unwrap();

    assert!(report.client_bundled);
    assert_eq!(
        report.files,
        vec![
            "404.html",
            "img/hero.png",
            "index.html",
            "logo.svg",
            "pkg/medinotes_web.js",
            "pkg/medinotes_web_bg.wasm",
            "styles.css",
        ]
    );

    let out = dir.path().join("out");
    for file in &report.files {
        assert!(out.join(file).is_file(), "{file} not written");
    }

    // Images are copied byte for byte
    assert_eq!(fs::read(out.join("img/hero.png")).unwrap(), [0x89, b'P', b'N', b'G']);

    let index = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains(r#"import init from "/pkg/medinotes_web.js""#));
    assert!(index.contains(r#"data-clerk-publishable-key="pk_test_123""#));
    assert_eq!(verify(&index), Ok(()));

    let not_found = fs::read_to_string(out.join("404.html")).unwrap();
    assert!(not_found.contains("Page not found"));
}

fn verify(html: &str) -> Result<(), medinotes_core::ConsistencyError> {
    medinotes_core::verify_document(html, &AuthState::Loading)
}

#[test]
fn test_export_manifest() {
    let dir = tempfile::tempdir().unwrap();
    export(&site(dir.path())).unwrap();

    let raw = fs::read_to_string(dir.path().join("out").join(MANIFEST_FILE)).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(manifest["generator"], "medinotes-site");
    assert_eq!(manifest["config"]["output"], "export");
    assert_eq!(manifest["config"]["images"]["unoptimized"], true);
    assert_eq!(manifest["config"]["strictMode"], true);
    assert_eq!(
        manifest["files"],
        serde_json::json!(["404.html", "index.html", "styles.css"])
    );
}

#[test]
fn test_export_without_client_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let report = export(&site(dir.path())).unwrap();

    assert!(!report.client_bundled);
    let index = fs::read_to_string(report.out_dir.join("index.html")).unwrap();
    assert!(!index.contains(r#"type="module""#));
    assert!(index.contains(r#"data-auth-branch="loading""#));
}

#[test]
fn test_export_rejects_server_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = site(dir.path());
    config.build.output = OutputMode::Server;

    let err = export(&config).unwrap_err();
    assert!(matches!(err, SiteError::NotStatic(OutputMode::Server)));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_export_rejects_image_optimization() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = site(dir.path());
    config.build.images.unoptimized = false;

    let err = export(&config).unwrap_err();
    assert!(matches!(
        err,
        SiteError::Config(ConfigError::OptimizedImagesInExport)
    ));
}

#[test]
fn test_strict_mode_gates_consistency_failures() {
    let broken = "<html><body>nothing here</body></html>";

    let strict = BuildConfig::default();
    assert!(matches!(
        check_rendered(&strict, broken, &AuthState::Anonymous),
        Err(SiteError::Consistency(_))
    ));

    let lenient = BuildConfig {
        strict_mode: false,
        ..BuildConfig::default()
    };
    assert!(check_rendered(&lenient, broken, &AuthState::Anonymous).is_ok());
}
