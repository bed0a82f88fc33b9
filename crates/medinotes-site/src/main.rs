//! MediNotes Pro site CLI
//!
//! `export` writes the static bundle; `serve` previews it locally.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medinotes_site::{AppState, SiteConfig, export, router};

#[derive(Parser)]
#[command(name = "medinotes-site", version, about = "Build and preview the MediNotes Pro landing page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the static site bundle
    Export(ExportArgs),
    /// Serve the site locally
    Serve(ServeArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Destination directory [env: MEDINOTES_OUT_DIR]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Static assets copied as-is [env: MEDINOTES_PUBLIC_DIR]
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// wasm-bindgen output of medinotes-web [env: MEDINOTES_PKG_DIR]
    #[arg(long)]
    pkg_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ServeArgs {
    /// Listen address [env: BIND_ADDR]
    #[arg(long)]
    bind: Option<String>,

    /// Exported directory to serve [env: MEDINOTES_OUT_DIR]
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut site = SiteConfig::from_env()?;

    match cli.command {
        Command::Export(args) => {
            if let Some(dir) = args.out_dir {
                site.out_dir = dir;
            }
            if let Some(dir) = args.public_dir {
                site.public_dir = dir;
            }
            if let Some(dir) = args.pkg_dir {
                site.pkg_dir = dir;
            }
            site.warn_incomplete();

            let report = export(&site)?;
            for file in &report.files {
                tracing::info!("  • {}", file);
            }
        }
        Command::Serve(args) => {
            if let Some(bind) = args.bind {
                site.bind_addr = bind;
            }
            if let Some(dir) = args.dir {
                site.out_dir = dir;
            }
            serve(site).await?;
        }
    }

    Ok(())
}

async fn serve(site: SiteConfig) -> anyhow::Result<()> {
    site.build.validate()?;
    if site.build.is_static() && !site.out_dir.join("index.html").is_file() {
        tracing::warn!("⚠ {} has no index.html", site.out_dir.display());
        tracing::warn!("  Run `medinotes-site export` first");
    } else if !site.build.is_static() {
        site.warn_incomplete();
    }

    let addr = site.bind_addr.clone();
    let output = site.build.output;
    let app = router(AppState::new(site));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 MediNotes Pro preview on http://{} (output: {})", addr, output);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /        - Landing page");
    tracing::info!("  GET  /health  - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
