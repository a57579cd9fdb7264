//! File Structure Scanner.
//!
//! Reads a page directory and extracts surface signals from each
//! page-component file. This is a text heuristic, not a parse: a keyword in a
//! comment counts the same as one in markup. The output is advisory, so false
//! positives are acceptable. A real parser can replace [`extract_signals`]
//! without touching [`FileContentSignals`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::analyzer::regexes::{regex_import, regex_jsx_tag, regex_top_level_const};
use crate::config::ScanConfig;
use crate::types::{FileContentSignals, PageStructure, ScannedFile, TargetPage};

/// Keywords that suggest a call-to-action, matched against lowercased text.
pub const CTA_KEYWORDS: &[&str] = &[
    "button",
    "cta",
    "download",
    "subscribe",
    "get started",
    "sign up",
    "try it",
    "start now",
];

const METADATA_MARKER: &str = "export const metadata";
const GENERATE_METADATA_MARKER: &str = "generateMetadata";
const USE_CLIENT_MARKERS: &[&str] = &["'use client'", "\"use client\""];
const LINK_MARKERS: &[&str] = &["<Link", "href="];

/// Scanner settings resolved from [`ScanConfig`].
#[derive(Debug, Clone)]
pub struct ScanRules {
    pub component_extension: String,
    /// Lowercased
    pub cta_keywords: Vec<String>,
}

impl ScanRules {
    pub fn from_config(config: &ScanConfig) -> Self {
        let cta_keywords = CTA_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(config.extra_cta_keywords.iter().map(|k| k.to_lowercase()))
            .collect();
        Self {
            component_extension: config.component_extension.clone(),
            cta_keywords,
        }
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

/// Scan one target page under `pages_root`.
///
/// A missing directory is an expected state (page not built yet) and yields
/// `exists = false`. Listing or read failures are logged, recorded in
/// `scan_errors`, and skipped.
pub fn scan_page(pages_root: &Path, page: &TargetPage, rules: &ScanRules) -> PageStructure {
    let dir = pages_root.join(&page.directory);
    let dir_text = dir.display().to_string();
    if !dir.is_dir() {
        tracing::debug!(page = %page.path, dir = %dir_text, "page directory not found");
        return PageStructure::missing(dir_text);
    }

    let mut structure = PageStructure {
        exists: true,
        directory: dir_text,
        ..Default::default()
    };

    let walker = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(page = %page.path, error = %e, "cannot list page directory");
                structure.scan_errors.push(e.to_string());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        structure.files.push(name.clone());

        if !name.ends_with(&rules.component_extension) {
            continue;
        }
        match fs::read_to_string(entry.path()) {
            Ok(text) => {
                let signals = extract_signals(&text, rules);
                tracing::debug!(page = %page.path, file = %name, size = signals.size, "scanned");
                structure.components.push(ScannedFile { name, signals });
            }
            Err(e) => {
                tracing::warn!(page = %page.path, file = %name, error = %e, "cannot read page file");
                structure.scan_errors.push(format!("{name}: {e}"));
            }
        }
    }

    structure
}

/// Compute heuristic signals for one source text.
pub fn extract_signals(text: &str, rules: &ScanRules) -> FileContentSignals {
    let mut jsx_elements: BTreeMap<String, usize> = BTreeMap::new();
    for caps in regex_jsx_tag().captures_iter(text) {
        *jsx_elements.entry(caps[1].to_string()).or_default() += 1;
    }

    let imports = regex_import()
        .captures_iter(text)
        .map(|caps| caps[2].to_string())
        .collect();

    let lowered = text.to_lowercase();
    let has_cta = rules
        .cta_keywords
        .iter()
        .any(|keyword| lowered.contains(keyword.as_str()));

    FileContentSignals {
        size: text.chars().count(),
        component_count: regex_top_level_const().find_iter(text).count(),
        jsx_elements,
        imports,
        has_metadata: text.contains(METADATA_MARKER),
        has_generate_metadata: text.contains(GENERATE_METADATA_MARKER),
        has_use_client: USE_CLIENT_MARKERS.iter().any(|m| text.contains(m)),
        has_links: LINK_MARKERS.iter().any(|m| text.contains(m)),
        has_cta,
    }
}
