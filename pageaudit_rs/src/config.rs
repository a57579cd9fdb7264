//! Configuration file support for pageaudit.
//!
//! Loads optional `.pageaudit/config.toml` from the project root. Every field
//! has a default, so running without a config file audits the built-in
//! registry against `app/[locale]`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};
use crate::types::TargetPage;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory holding one sub-directory per page, relative to the root
    pub pages_root: PathBuf,
    pub scan: ScanConfig,
    pub output: OutputConfig,
    /// Replaces the built-in registry when non-empty
    pub pages: Vec<TargetPage>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            pages_root: PathBuf::from("app/[locale]"),
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
            pages: Vec::new(),
        }
    }
}

/// Scanner and detector knobs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Suffix identifying page-component files
    pub component_extension: String,
    /// File that must exist in every page directory
    pub main_file: String,
    /// Files shorter than this (in characters) get a `low_content` warning
    pub min_content_chars: usize,
    /// Added to the built-in call-to-action keywords (matched case-insensitively)
    pub extra_cta_keywords: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            component_extension: ".tsx".to_string(),
            main_file: "page.tsx".to_string(),
            min_content_chars: 500,
            extra_cta_keywords: Vec::new(),
        }
    }
}

/// Where the reports land
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub json_file: String,
    pub markdown_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
            json_file: "page-restructure-analysis.json".to_string(),
            markdown_file: "page-restructure-report.md".to_string(),
        }
    }
}

impl AuditConfig {
    /// Default config location for a project root.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(".pageaudit").join("config.toml")
    }

    /// Load config from `.pageaudit/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = Self::default_path(root);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; falling back to defaults");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path. Unlike [`AuditConfig::load`], a
    /// missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| AuditError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
