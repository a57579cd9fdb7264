//! Data model shared by every audit stage.
//!
//! Field names serialize in camelCase because the JSON artifact is read by
//! the site's tooling, which expects the same keys as the Markdown report.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Editorial priority assigned to a target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route selected for audit, with its search-analytics snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPage {
    /// Route path, unique across the registry (e.g. `/blog`)
    pub path: String,
    pub clicks: u64,
    pub impressions: u64,
    pub priority: Priority,
    /// Directory name under the pages root (e.g. `blog`)
    pub directory: String,
}

impl TargetPage {
    pub fn new(
        path: impl Into<String>,
        impressions: u64,
        clicks: u64,
        priority: Priority,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            clicks,
            impressions,
            priority,
            directory: directory.into(),
        }
    }
}

/// Surface-level signals extracted from one page-component source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContentSignals {
    /// Character count of the raw text
    pub size: usize,
    /// Top-level `const` declarations
    pub component_count: usize,
    /// Allow-listed tag name -> occurrence count (non-zero only)
    pub jsx_elements: BTreeMap<String, usize>,
    /// Module specifiers in source order
    pub imports: Vec<String>,
    pub has_metadata: bool,
    pub has_generate_metadata: bool,
    pub has_use_client: bool,
    pub has_links: bool,
    #[serde(rename = "hasCTA")]
    pub has_cta: bool,
}

/// A scanned page-component file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    pub name: String,
    pub signals: FileContentSignals,
}

/// What the scanner found in a page directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStructure {
    pub exists: bool,
    pub directory: String,
    /// Immediate file names, sorted
    pub files: Vec<String>,
    /// Page-component files with their signals, sorted by name
    pub components: Vec<ScannedFile>,
    /// Recoverable failures hit while scanning this page
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scan_errors: Vec<String>,
}

impl PageStructure {
    /// Structure for a page whose directory is not on disk.
    pub fn missing(directory: impl Into<String>) -> Self {
        Self {
            exists: false,
            directory: directory.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// Issue codes in the order the detector evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    PageNotFound,
    NoMainFile,
    LowContent,
    NoCta,
    NoInternalLinks,
    NoMetadata,
}

impl IssueCode {
    pub const ALL: [IssueCode; 6] = [
        IssueCode::PageNotFound,
        IssueCode::NoMainFile,
        IssueCode::LowContent,
        IssueCode::NoCta,
        IssueCode::NoInternalLinks,
        IssueCode::NoMetadata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::PageNotFound => "page_not_found",
            IssueCode::NoMainFile => "no_main_file",
            IssueCode::LowContent => "low_content",
            IssueCode::NoCta => "no_cta",
            IssueCode::NoInternalLinks => "no_internal_links",
            IssueCode::NoMetadata => "no_metadata",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub issue: IssueCode,
    pub description: String,
    pub impact: Impact,
    /// File the warning applies to; absent for page-level issues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Issue {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Potential {
    VeryHigh,
    High,
    Medium,
}

impl Potential {
    pub fn as_str(&self) -> &'static str {
        match self {
            Potential::VeryHigh => "very_high",
            Potential::High => "high",
            Potential::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Category: "ctr_optimization", "strategic", "content", ...
    #[serde(rename = "type")]
    pub kind: String,
    pub opportunity: String,
    pub description: String,
    pub potential: Potential,
    pub estimated_impact: String,
}

/// Free-text recommendations bucketed by horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.short_term.is_empty() && self.long_term.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBasicInfo {
    pub path: String,
    pub clicks: u64,
    pub impressions: u64,
    /// `None` when the page has no impressions
    pub ctr: Option<f64>,
    pub priority: Priority,
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAnalysis {
    pub basic_info: PageBasicInfo,
    pub structure: PageStructure,
    pub issues: Vec<Issue>,
    pub opportunities: Vec<Opportunity>,
    pub restructure_recommendations: Recommendations,
}

impl PageAnalysis {
    pub fn critical_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_critical()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.critical_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub path: String,
    pub impressions: u64,
    pub clicks: u64,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_pages: usize,
    pub total_impressions: u64,
    pub total_clicks: u64,
    /// Aggregate clicks / impressions; `None` with no impressions at all
    pub average_ctr: Option<f64>,
    /// Extra clicks per month at a 1% conversion of impressions
    pub estimated_potential: u64,
    pub critical_issues: usize,
    pub warnings: usize,
    pub missing_pages: usize,
    /// Every target page, impressions descending
    pub priority_order: Vec<PriorityEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPhase {
    pub phase: u8,
    pub name: String,
    pub duration: String,
    pub tasks: Vec<String>,
    pub expected_outcomes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestructurePlan {
    pub phases: Vec<PlanPhase>,
}

/// Aggregate root written to the JSON artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// RFC 3339, UTC
    pub timestamp: String,
    pub summary: Summary,
    pub pages: BTreeMap<String, PageAnalysis>,
    pub recommendations: Recommendations,
    pub restructure_plan: RestructurePlan,
}
