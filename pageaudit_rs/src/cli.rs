//! Command-line entry shared by the `pageaudit` binary and the e2e tests.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use crate::analyzer::{AuditOptions, run_audit};
use crate::config::AuditConfig;
use crate::progress::{self, Spinner};
use crate::registry::load_pages;
use crate::report::{format_thousands, write_reports};
use crate::types::AnalysisResult;

#[derive(Parser, Debug)]
#[command(name = "pageaudit")]
#[command(about = "Audit marketing-site pages and write a restructure report")]
#[command(version)]
pub struct Cli {
    /// Project root holding the pages directory and `.pageaudit/config.toml`
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/.pageaudit/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory (default: <root>/docs)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Log level; RUST_LOG wins when set
    #[arg(
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    /// Print nothing but errors
    #[arg(long, short)]
    pub quiet: bool,
}

/// Install the stderr log subscriber.
pub fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

pub fn run(cli: &Cli) -> Result<AnalysisResult> {
    let config = match &cli.config {
        Some(path) => AuditConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AuditConfig::load(&cli.root),
    };
    let pages = load_pages(&config);
    let options = AuditOptions::from_config(&cli.root, &config);
    if !options.pages_root.is_dir() {
        tracing::warn!(
            pages_root = %options.pages_root.display(),
            "pages root not found; every page will be reported missing"
        );
    }

    let started = Instant::now();
    let spinner = if cli.quiet {
        Spinner::hidden()
    } else {
        Spinner::new(&format!("Auditing {} pages...", pages.len()))
    };
    let result = run_audit(&pages, &options);
    spinner.finish_clear();

    let out_dir = cli
        .out_dir
        .clone()
        .unwrap_or_else(|| cli.root.join(&config.output.dir));
    let paths = write_reports(&result, &out_dir, &config.output).context("failed to write reports")?;

    if !cli.quiet {
        print_summary(&result);
        progress::success(&format!("JSON analysis: {}", paths.json.display()));
        progress::success(&format!("Markdown report: {}", paths.markdown.display()));
        progress::info(&format!(
            "Finished in {}",
            progress::format_duration(started.elapsed())
        ));
    }
    Ok(result)
}

fn print_summary(result: &AnalysisResult) {
    let summary = &result.summary;
    progress::info(&format!(
        "{}, {} impressions, {} clicks, potential +{} clicks/month",
        progress::format_count(summary.total_pages, "page", "pages"),
        format_thousands(summary.total_impressions),
        format_thousands(summary.total_clicks),
        format_thousands(summary.estimated_potential)
    ));
    if summary.critical_issues > 0 {
        progress::warning(&format!(
            "{} ({} missing)",
            progress::format_count(summary.critical_issues, "critical issue", "critical issues"),
            progress::format_count(summary.missing_pages, "page", "pages")
        ));
    }
    if summary.warnings > 0 {
        progress::warning(&progress::format_count(summary.warnings, "warning", "warnings"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(root: &std::path::Path) -> Cli {
        Cli {
            root: root.to_path_buf(),
            config: None,
            out_dir: None,
            log_level: "warn".to_string(),
            quiet: true,
        }
    }

    #[test]
    fn defaults_parse_without_arguments() {
        let parsed = Cli::try_parse_from(["pageaudit"]).expect("parse");
        assert_eq!(parsed.root, PathBuf::from("."));
        assert!(parsed.config.is_none());
        assert!(parsed.out_dir.is_none());
        assert!(!parsed.quiet);
        assert_eq!(parsed.log_level, "warn");
    }

    #[test]
    fn log_level_accepts_only_known_levels() {
        let parsed = Cli::try_parse_from(["pageaudit", "--log-level", "debug"]).expect("parse");
        assert_eq!(parsed.log_level, "debug");
        assert!(Cli::try_parse_from(["pageaudit", "--log-level", "verbose"]).is_err());
    }

    #[test]
    fn run_writes_into_root_docs() {
        let temp = TempDir::new().expect("temp dir");
        let result = run(&cli(temp.path())).expect("run");
        assert_eq!(result.pages.len(), crate::registry::default_pages().len());
        assert!(temp.path().join("docs/page-restructure-analysis.json").is_file());
        assert!(temp.path().join("docs/page-restructure-report.md").is_file());
    }

    #[test]
    fn explicit_missing_config_is_fatal() {
        let temp = TempDir::new().expect("temp dir");
        let mut args = cli(temp.path());
        args.config = Some(temp.path().join("missing.toml"));
        assert!(run(&args).is_err());
    }
}
