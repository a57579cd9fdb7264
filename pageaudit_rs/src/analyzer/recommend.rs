//! Recommendation buckets, per page and across the whole audit.

use std::collections::{BTreeMap, BTreeSet};

use crate::analyzer::playbook::playbook_for;
use crate::types::{IssueCode, PageAnalysis, Recommendations, TargetPage};

const BASE_IMMEDIATE: &[&str] = &[
    "Rewrite the title tag and meta description to match the queries the page already ranks for",
    "Place a primary call-to-action to the calligraphy generator above the fold",
];

const BASE_SHORT_TERM: &[&str] = &[
    "Expand the page with original, intent-matched copy and examples",
    "Add internal links to related fonts, tutorials and the generator",
    "Add page-appropriate JSON-LD structured data",
];

const BASE_LONG_TERM: &[&str] = &[
    "Track CTR per query in Search Console and iterate on snippets monthly",
    "A/B test headlines and CTA wording",
];

/// Base recommendations plus the directory playbook's additions.
pub fn page_recommendations(page: &TargetPage) -> Recommendations {
    let mut recs = Recommendations {
        immediate: to_strings(BASE_IMMEDIATE),
        short_term: to_strings(BASE_SHORT_TERM),
        long_term: to_strings(BASE_LONG_TERM),
    };
    if let Some(playbook) = playbook_for(&page.directory) {
        recs.immediate.extend(to_strings(playbook.immediate));
        recs.short_term.extend(to_strings(playbook.short_term));
        recs.long_term.extend(to_strings(playbook.long_term));
    }
    recs
}

/// Site-wide recommendations, derived from which issue codes occur on which
/// pages. Codes are visited in detector order so the output is stable.
pub fn global_recommendations<'a>(
    pages: impl IntoIterator<Item = (&'a String, &'a PageAnalysis)>,
) -> Recommendations {
    let mut affected: BTreeMap<IssueCode, BTreeSet<&str>> = BTreeMap::new();
    for (path, analysis) in pages {
        for issue in &analysis.issues {
            affected.entry(issue.issue).or_default().insert(path.as_str());
        }
    }

    let mut recs = Recommendations::default();
    for code in IssueCode::ALL {
        let Some(paths) = affected.get(&code) else {
            continue;
        };
        let list = paths.iter().copied().collect::<Vec<_>>().join(", ");
        let line = match code {
            IssueCode::PageNotFound => format!("Build the missing pages: {list}"),
            IssueCode::NoMainFile => format!("Add a page.tsx entry to: {list}"),
            IssueCode::LowContent => format!("Expand thin content on: {list}"),
            IssueCode::NoCta => format!("Add calls-to-action on: {list}"),
            IssueCode::NoInternalLinks => format!("Add internal links on: {list}"),
            IssueCode::NoMetadata => format!("Export metadata or generateMetadata on: {list}"),
        };
        match code {
            IssueCode::PageNotFound | IssueCode::NoMainFile | IssueCode::NoCta => {
                recs.immediate.push(line)
            }
            IssueCode::NoMetadata | IssueCode::NoInternalLinks => recs.short_term.push(line),
            IssueCode::LowContent => recs.long_term.push(line),
        }
    }

    if recs.is_empty() {
        recs.long_term
            .push("No structural issues found; focus on snippet testing".to_string());
    }
    recs
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Impact, Issue, PageBasicInfo, PageStructure, Priority, Severity,
    };

    fn analysis(path: &str, codes: &[IssueCode]) -> PageAnalysis {
        PageAnalysis {
            basic_info: PageBasicInfo {
                path: path.to_string(),
                clicks: 0,
                impressions: 0,
                ctr: None,
                priority: Priority::Low,
                directory: path.trim_start_matches('/').to_string(),
            },
            structure: PageStructure::default(),
            issues: codes
                .iter()
                .map(|&code| Issue {
                    severity: Severity::Warning,
                    issue: code,
                    description: String::new(),
                    impact: Impact::Medium,
                    file: None,
                })
                .collect(),
            opportunities: Vec::new(),
            restructure_recommendations: Recommendations::default(),
        }
    }

    #[test]
    fn unknown_directory_gets_base_only() {
        let page = TargetPage::new("/about", 1, 0, Priority::Low, "about");
        let recs = page_recommendations(&page);
        assert_eq!(recs.immediate.len(), BASE_IMMEDIATE.len());
        assert_eq!(recs.short_term.len(), BASE_SHORT_TERM.len());
        assert_eq!(recs.long_term.len(), BASE_LONG_TERM.len());
    }

    #[test]
    fn known_directory_appends_playbook() {
        let page = TargetPage::new("/faq", 1, 0, Priority::Low, "faq");
        let recs = page_recommendations(&page);
        assert!(recs.immediate.len() > BASE_IMMEDIATE.len());
        assert_eq!(recs.immediate[0], BASE_IMMEDIATE[0]);
        assert!(recs.immediate.iter().any(|r| r.contains("FAQPage")));
    }

    #[test]
    fn global_groups_pages_by_issue() {
        let mut pages = BTreeMap::new();
        pages.insert("/blog".to_string(), analysis("/blog", &[IssueCode::NoCta, IssueCode::NoCta]));
        pages.insert("/faq".to_string(), analysis("/faq", &[IssueCode::NoCta, IssueCode::LowContent]));
        pages.insert("/about".to_string(), analysis("/about", &[IssueCode::PageNotFound]));

        let recs = global_recommendations(&pages);
        assert_eq!(
            recs.immediate,
            vec![
                "Build the missing pages: /about".to_string(),
                "Add calls-to-action on: /blog, /faq".to_string(),
            ]
        );
        assert!(recs.short_term.is_empty());
        assert_eq!(recs.long_term, vec!["Expand thin content on: /faq".to_string()]);
    }

    #[test]
    fn clean_audit_gets_fallback() {
        let mut pages = BTreeMap::new();
        pages.insert("/blog".to_string(), analysis("/blog", &[]));
        let recs = global_recommendations(&pages);
        assert_eq!(recs.long_term.len(), 1);
        assert!(recs.immediate.is_empty());
    }
}
