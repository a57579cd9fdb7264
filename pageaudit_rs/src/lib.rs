//! # pageaudit
//!
//! **Page Content Auditor** for the calligraphy generator's marketing site.
//!
//! Search Console shows a handful of routes that collect impressions but few
//! clicks. `pageaudit` reads each route's source directory
//! (`app/[locale]/<directory>/*.tsx`), extracts surface signals with regex
//! heuristics, flags content issues, estimates the click opportunity and
//! writes a JSON artifact plus a Markdown report with a three-phase plan.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use pageaudit::analyzer::{AuditOptions, run_audit};
//! use pageaudit::config::AuditConfig;
//! use pageaudit::{registry, report};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = AuditConfig::load(root);
//! let pages = registry::load_pages(&config);
//! let result = run_audit(&pages, &AuditOptions::from_config(root, &config));
//! report::write_reports(&result, &root.join("docs"), &config.output).unwrap();
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! pageaudit                      # audit ./app/[locale], write ./docs/
//! pageaudit --root ../site       # audit another checkout
//! RUST_LOG=debug pageaudit       # per-file scan logs
//! ```

/// The staged audit pipeline: scanner, detector, estimator, recommendations, plan.
pub mod analyzer;

/// Command-line arguments and the run routine behind the binary.
pub mod cli;

/// `.pageaudit/config.toml` loading.
pub mod config;

pub mod error;

/// Spinner and status lines.
pub mod progress;

/// Target pages under audit.
pub mod registry;

/// JSON and Markdown emitters.
pub mod report;

/// Data model shared by every stage.
pub mod types;

pub use error::{AuditError, Result};
pub use types::{AnalysisResult, TargetPage};
