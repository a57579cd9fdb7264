//! Report emitters.
//!
//! Both reports go to one output directory, created once before either file
//! is written. Any failure here is fatal and there are no retries.

pub mod json;
pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::{AuditError, Result};
use crate::types::AnalysisResult;

pub use json::save_results;
pub use markdown::{format_thousands, generate_readable_report, render_markdown};

/// Where the reports were written.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Create-if-absent for the output directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AuditError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| AuditError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the JSON artifact and the Markdown report into `out_dir`.
pub fn write_reports(
    result: &AnalysisResult,
    out_dir: &Path,
    output: &OutputConfig,
) -> Result<ReportPaths> {
    ensure_dir(out_dir)?;
    let json = json::write_json(result, out_dir, &output.json_file)?;
    let markdown = markdown::write_markdown(result, out_dir, &output.markdown_file)?;
    Ok(ReportPaths { json, markdown })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AuditOptions, run_audit_at};
    use crate::config::AuditConfig;
    use crate::registry::default_pages;
    use tempfile::TempDir;

    #[test]
    fn writes_both_reports_into_fresh_directory() {
        let temp = TempDir::new().expect("temp dir");
        let options = AuditOptions::from_config(temp.path(), &AuditConfig::default());
        let result = run_audit_at(&default_pages(), &options, "2026-01-01T00:00:00Z".to_string());
        let out = temp.path().join("docs").join("nested");

        let paths = write_reports(&result, &out, &OutputConfig::default()).expect("write");
        assert_eq!(paths.json, out.join("page-restructure-analysis.json"));
        assert_eq!(paths.markdown, out.join("page-restructure-report.md"));
        assert!(paths.json.is_file());
        assert!(paths.markdown.is_file());
    }

    #[test]
    fn blocked_directory_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("docs");
        fs::write(&blocker, "not a directory").expect("write");
        let options = AuditOptions::from_config(temp.path(), &AuditConfig::default());
        let result = run_audit_at(&[], &options, "t".to_string());

        let err = write_reports(&result, &blocker, &OutputConfig::default()).expect_err("fail");
        assert!(matches!(err, AuditError::CreateDir { .. }));
    }

    #[test]
    fn file_writers_do_not_create_the_directory() {
        let temp = TempDir::new().expect("temp dir");
        let options = AuditOptions::from_config(temp.path(), &AuditConfig::default());
        let result = run_audit_at(&[], &options, "t".to_string());
        let absent = temp.path().join("absent");

        let err = json::write_json(&result, &absent, "a.json").expect_err("no dir");
        assert!(matches!(err, AuditError::Write { .. }));
        let err = markdown::write_markdown(&result, &absent, "r.md").expect_err("no dir");
        assert!(matches!(err, AuditError::Write { .. }));
        assert!(!absent.exists());
    }
}
