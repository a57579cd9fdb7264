//! The audit pipeline.
//!
//! Stages run in order and each one takes the previous stage's output by
//! reference and returns a fresh value:
//!
//! 1. [`scan_pages`] - read every page directory ([`scanner`])
//! 2. [`analyze_pages`] - issues, opportunities and recommendations per page
//! 3. [`build_summary`] - totals and the priority order
//! 4. [`assemble`] - the [`AnalysisResult`] written by [`crate::report`]
//!
//! [`run_audit`] chains all four.

pub mod detector;
pub mod opportunity;
pub mod plan;
pub mod playbook;
pub mod recommend;
pub(crate) mod regexes;
pub mod scanner;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::AuditConfig;
use crate::types::{
    AnalysisResult, PageAnalysis, PageBasicInfo, PageStructure, PriorityEntry, Summary,
    TargetPage,
};
use detector::{DetectorRules, detect_issues};
use opportunity::{estimate_opportunities, estimated_clicks, ratio};
use plan::restructure_plan;
use recommend::{global_recommendations, page_recommendations};
use scanner::{ScanRules, scan_page};

/// Everything the pipeline needs besides the page list.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Directory holding one sub-directory per page
    pub pages_root: PathBuf,
    pub scan: ScanRules,
    pub detect: DetectorRules,
}

impl AuditOptions {
    /// Resolve config paths against the project root.
    pub fn from_config(root: &Path, config: &AuditConfig) -> Self {
        Self {
            pages_root: root.join(&config.pages_root),
            scan: ScanRules::from_config(&config.scan),
            detect: DetectorRules::from_config(&config.scan),
        }
    }
}

/// Output of the scan stage for one page.
#[derive(Debug, Clone)]
pub struct PageScan {
    pub page: TargetPage,
    pub structure: PageStructure,
}

pub fn scan_pages(pages: &[TargetPage], options: &AuditOptions) -> Vec<PageScan> {
    pages
        .iter()
        .map(|page| {
            tracing::info!(page = %page.path, "scanning");
            PageScan {
                page: page.clone(),
                structure: scan_page(&options.pages_root, page, &options.scan),
            }
        })
        .collect()
}

pub fn analyze_pages(scans: &[PageScan], rules: &DetectorRules) -> BTreeMap<String, PageAnalysis> {
    scans
        .iter()
        .map(|scan| {
            let page = &scan.page;
            let analysis = PageAnalysis {
                basic_info: PageBasicInfo {
                    path: page.path.clone(),
                    clicks: page.clicks,
                    impressions: page.impressions,
                    ctr: opportunity::ctr(page),
                    priority: page.priority,
                    directory: page.directory.clone(),
                },
                structure: scan.structure.clone(),
                issues: detect_issues(&scan.structure, rules),
                opportunities: estimate_opportunities(page),
                restructure_recommendations: page_recommendations(page),
            };
            tracing::debug!(
                page = %page.path,
                issues = analysis.issues.len(),
                opportunities = analysis.opportunities.len(),
                "analyzed"
            );
            (page.path.clone(), analysis)
        })
        .collect()
}

/// Totals across the audit. The priority order sorts by impressions
/// descending; the sort is stable, so ties keep registry order.
pub fn build_summary(pages: &[TargetPage], analyses: &BTreeMap<String, PageAnalysis>) -> Summary {
    // Config values may span the whole u64 range; totals clamp instead of overflowing
    let total_impressions = pages
        .iter()
        .fold(0u64, |acc, p| acc.saturating_add(p.impressions));
    let total_clicks = pages.iter().fold(0u64, |acc, p| acc.saturating_add(p.clicks));

    let mut priority_order: Vec<PriorityEntry> = pages
        .iter()
        .map(|p| PriorityEntry {
            path: p.path.clone(),
            impressions: p.impressions,
            clicks: p.clicks,
            priority: p.priority,
        })
        .collect();
    priority_order.sort_by(|a, b| b.impressions.cmp(&a.impressions));

    Summary {
        total_pages: pages.len(),
        total_impressions,
        total_clicks,
        average_ctr: ratio(total_clicks, total_impressions),
        estimated_potential: estimated_clicks(total_impressions),
        critical_issues: analyses.values().map(PageAnalysis::critical_count).sum(),
        warnings: analyses.values().map(PageAnalysis::warning_count).sum(),
        missing_pages: analyses.values().filter(|a| !a.structure.exists).count(),
        priority_order,
    }
}

pub fn assemble(
    timestamp: String,
    summary: Summary,
    pages: BTreeMap<String, PageAnalysis>,
) -> AnalysisResult {
    AnalysisResult {
        timestamp,
        recommendations: global_recommendations(&pages),
        summary,
        pages,
        restructure_plan: restructure_plan(),
    }
}

/// Current UTC time in RFC 3339.
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run every stage and stamp the result with the current time.
pub fn run_audit(pages: &[TargetPage], options: &AuditOptions) -> AnalysisResult {
    run_audit_at(pages, options, now_timestamp())
}

pub fn run_audit_at(
    pages: &[TargetPage],
    options: &AuditOptions,
    timestamp: String,
) -> AnalysisResult {
    let scans = scan_pages(pages, options);
    let analyses = analyze_pages(&scans, &options.detect);
    let summary = build_summary(pages, &analyses);
    tracing::info!(
        pages = summary.total_pages,
        critical = summary.critical_issues,
        warnings = summary.warnings,
        "audit complete"
    );
    assemble(timestamp, summary, analyses)
}
