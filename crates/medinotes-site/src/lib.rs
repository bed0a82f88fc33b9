//! MediNotes Pro site tooling
//!
//! Static export of the landing page and a local preview server.

pub mod config;
pub mod error;
pub mod export;
pub mod serve;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use export::{ExportReport, export};
pub use serve::{AppState, router};
