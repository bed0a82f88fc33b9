//! Build/Export Configuration
//!
//! A fixed, declarative set of options. Defaults describe a static bundle
//! served from object storage: no server runtime, no image optimizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Build output target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Self-contained static files, no runtime dependency
    #[default]
    Export,
    /// Page rendered per request by the preview server
    Server,
}

impl OutputMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "export" | "static" => Ok(Self::Export),
            "server" | "standalone" => Ok(Self::Server),
            other => Err(ConfigError::UnknownOutput(other.into())),
        }
    }
}

/// Image handling
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Serve images as-is, without a transformation step
    pub unoptimized: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { unoptimized: true }
    }
}

/// Site build configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default)]
    pub output: OutputMode,

    #[serde(default)]
    pub images: ImageConfig,

    /// Run the landing consistency check on every render
    #[serde(default = "default_strict_mode", alias = "reactStrictMode")]
    pub strict_mode: bool,
}

const fn default_strict_mode() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Export,
            images: ImageConfig::default(),
            strict_mode: default_strict_mode(),
        }
    }
}

impl BuildConfig {
    /// Defaults overridden by `MEDINOTES_OUTPUT`, `MEDINOTES_IMAGES_UNOPTIMIZED`
    /// and `MEDINOTES_STRICT_MODE`
    ///
    /// # Errors
    ///
    /// Fails on unparseable values or an invalid combination.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BuildConfig::from_env`] with an injectable variable source
    ///
    /// # Errors
    ///
    /// Fails on unparseable values or an invalid combination.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(output) = lookup("MEDINOTES_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(value) = lookup("MEDINOTES_IMAGES_UNOPTIMIZED") {
            config.images.unoptimized = parse_flag("MEDINOTES_IMAGES_UNOPTIMIZED", &value)?;
        }
        if let Some(value) = lookup("MEDINOTES_STRICT_MODE") {
            config.strict_mode = parse_flag("MEDINOTES_STRICT_MODE", &value)?;
        }

        config.validate()?;
        tracing::debug!(?config, "build configuration loaded");
        Ok(config)
    }

    /// Reject combinations the output target cannot serve
    ///
    /// # Errors
    ///
    /// [`ConfigError::OptimizedImagesInExport`] when a static export asks
    /// for image optimization.
    pub fn validate(&self) -> Result<()> {
        if self.output == OutputMode::Export && !self.images.unoptimized {
            return Err(ConfigError::OptimizedImagesInExport);
        }
        Ok(())
    }

    pub fn is_static(&self) -> bool {
        self.output == OutputMode::Export
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_static_export() {
        let config = BuildConfig::default();
        assert_eq!(config.output, OutputMode::Export);
        assert!(config.images.unoptimized);
        assert!(config.strict_mode);
        assert!(config.validate().is_ok());
        assert_eq!(BuildConfig::from_lookup(lookup(&[])).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let config = BuildConfig::from_lookup(lookup(&[
            ("MEDINOTES_OUTPUT", "server"),
            ("MEDINOTES_IMAGES_UNOPTIMIZED", "false"),
            ("MEDINOTES_STRICT_MODE", "off"),
        ]))
        .unwrap();

        assert_eq!(config.output, OutputMode::Server);
        assert!(!config.images.unoptimized);
        assert!(!config.strict_mode);
        assert!(!config.is_static());
    }

    #[test]
    fn test_export_rejects_image_optimization() {
        let err = BuildConfig::from_lookup(lookup(&[("MEDINOTES_IMAGES_UNOPTIMIZED", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::OptimizedImagesInExport);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            BuildConfig::from_lookup(lookup(&[("MEDINOTES_OUTPUT", "lambda")])).unwrap_err(),
            ConfigError::UnknownOutput("lambda".into())
        );
        assert!(matches!(
            BuildConfig::from_lookup(lookup(&[("MEDINOTES_STRICT_MODE", "maybe")])),
            Err(ConfigError::InvalidFlag { key: "MEDINOTES_STRICT_MODE", .. })
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(BuildConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "output": "export",
                "images": { "unoptimized": true },
                "strictMode": true
            })
        );

        let legacy: BuildConfig = serde_json::from_str(
            r#"{"output":"export","images":{"unoptimized":true},"reactStrictMode":false}"#,
        )
        .unwrap();
        assert!(!legacy.strict_mode);
    }
}
