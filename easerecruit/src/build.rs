//! `easerecruit build` - render the homepage into an output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use easerecruit_site::content::FEATURES;
use easerecruit_site::render_home;
use easerecruit_site::types::SiteConfig;
use tracing::{debug, info};

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub index: PathBuf,
    pub bytes: usize,
    pub features: usize,
}

/// Render `index.html` for `site` into `out_dir`, creating the directory.
pub fn write_site(site: &SiteConfig, out_dir: &Path) -> Result<BuildReport> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let html = render_home(site, FEATURES);
    debug!(bytes = html.len(), features = FEATURES.len(), "rendered homepage");

    let index = out_dir.join("index.html");
    std::fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;
    info!(path = %index.display(), "wrote homepage");

    Ok(BuildReport {
        index,
        bytes: html.len(),
        features: FEATURES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_index_into_new_directory() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("nested").join("dist");

        let report = write_site(&SiteConfig::default(), &out).expect("build");
        assert_eq!(report.index, out.join("index.html"));
        assert_eq!(report.features, 3);

        let html = std::fs::read_to_string(&report.index).expect("read index");
        assert_eq!(html.len(), report.bytes);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("/docs/intro"));
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let temp = TempDir::new().expect("temp dir");
        let site = SiteConfig::default();

        let first = write_site(&site, temp.path()).expect("first build");
        let first_bytes = std::fs::read(&first.index).expect("read first");
        let second = write_site(&site, temp.path()).expect("second build");
        let second_bytes = std::fs::read(&second.index).expect("read second");

        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn output_path_blocked_by_file_fails() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("dist");
        std::fs::write(&blocker, "not a directory").expect("write blocker");

        let err = write_site(&SiteConfig::default(), &blocker).unwrap_err();
        assert!(format!("{err:#}").contains("failed to create output directory"));
    }
}
