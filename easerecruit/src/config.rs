//! Site metadata for the build tool.
//!
//! Loads `easerecruit.toml`:
//!
//! ```toml
//! title = "Ease Recruit"
//! tagline = "The recruitment platform built around your next"
//!
//! [build]
//! out_dir = "dist"
//! ```
//!
//! Every key is optional. Without an explicit `--config`, a missing
//! `./easerecruit.toml` means defaults; an explicit path must exist.

use std::path::{Path, PathBuf};

use easerecruit_site::types::SiteConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "easerecruit.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Title and tagline, top-level keys
    #[serde(flatten)]
    pub site: SiteConfig,
    pub build: BuildConfig,
}

/// `[build]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for `index.html`
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ProjectConfig {
    /// Load the explicit path if given, else `easerecruit.toml` in `root`
    /// when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_from_path(path),
            None => {
                let path = root.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, root.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded site metadata");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easerecruit_site::types::{DEFAULT_TAGLINE, DEFAULT_TITLE};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{body}").expect("write config");
        path
    }

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.site.title, DEFAULT_TITLE);
        assert_eq!(config.site.tagline, DEFAULT_TAGLINE);
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config = ProjectConfig::resolve(None, temp.path()).expect("defaults");
        assert_eq!(config.site.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nope.toml");
        let err = ProjectConfig::resolve(Some(&path), temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            DEFAULT_CONFIG_FILE,
            r#"
title = "Hire Better"
tagline = "Find your next"

[build]
out_dir = "public"
"#,
        );

        let config = ProjectConfig::resolve(None, temp.path()).expect("config");
        assert_eq!(config.site.title, "Hire Better");
        assert_eq!(config.site.tagline, "Find your next");
        assert_eq!(config.build.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "site.toml", r#"tagline = "Meet your next""#);

        let config = ProjectConfig::resolve(Some(&path), temp.path()).expect("config");
        assert_eq!(config.site.title, DEFAULT_TITLE);
        assert_eq!(config.site.tagline, "Meet your next");
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "bad.toml", "title = [unclosed");

        let err = ProjectConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
