//! Heuristic Issue Detector.
//!
//! Rules run in a fixed order and are independent of each other, except that
//! a missing page directory short-circuits everything after it. The detector
//! never fails: a rule without data to look at simply does not fire.

use crate::config::ScanConfig;
use crate::types::{Impact, Issue, IssueCode, PageStructure, ScannedFile, Severity};

#[derive(Debug, Clone)]
pub struct DetectorRules {
    pub main_file: String,
    pub min_content_chars: usize,
}

impl DetectorRules {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            main_file: config.main_file.clone(),
            min_content_chars: config.min_content_chars,
        }
    }
}

impl Default for DetectorRules {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

/// Flag problems in a scanned page, in rule order then file order.
pub fn detect_issues(structure: &PageStructure, rules: &DetectorRules) -> Vec<Issue> {
    if !structure.exists {
        return vec![page_issue(
            Severity::Critical,
            IssueCode::PageNotFound,
            format!("Page directory {} does not exist", structure.directory),
        )];
    }

    let mut issues = Vec::new();

    if !structure.files.iter().any(|f| f == &rules.main_file) {
        issues.push(page_issue(
            Severity::Critical,
            IssueCode::NoMainFile,
            format!("No {} found in {}", rules.main_file, structure.directory),
        ));
    }

    for file in &structure.components {
        issues.extend(file_issues(file, rules));
    }

    issues
}

fn file_issues(file: &ScannedFile, rules: &DetectorRules) -> Vec<Issue> {
    let signals = &file.signals;
    let mut issues = Vec::new();

    if signals.size < rules.min_content_chars {
        issues.push(file_warning(
            file,
            IssueCode::LowContent,
            Impact::Medium,
            format!(
                "Only {} characters of source; thin pages rarely rank or convert",
                signals.size
            ),
        ));
    }
    if !signals.has_cta {
        issues.push(file_warning(
            file,
            IssueCode::NoCta,
            Impact::High,
            "No call-to-action found; visitors have no next step".to_string(),
        ));
    }
    if !signals.has_links {
        issues.push(file_warning(
            file,
            IssueCode::NoInternalLinks,
            Impact::Medium,
            "No internal links to the generator or related pages".to_string(),
        ));
    }
    if !signals.has_metadata && !signals.has_generate_metadata {
        issues.push(file_warning(
            file,
            IssueCode::NoMetadata,
            Impact::Medium,
            "No metadata export or generateMetadata; title and description fall back to defaults"
                .to_string(),
        ));
    }

    issues
}

fn page_issue(severity: Severity, code: IssueCode, description: String) -> Issue {
    Issue {
        severity,
        issue: code,
        description,
        impact: Impact::High,
        file: None,
    }
}

fn file_warning(file: &ScannedFile, code: IssueCode, impact: Impact, description: String) -> Issue {
    Issue {
        severity: Severity::Warning,
        issue: code,
        description,
        impact,
        file: Some(file.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileContentSignals;

    fn scanned(name: &str, signals: FileContentSignals) -> ScannedFile {
        ScannedFile {
            name: name.to_string(),
            signals,
        }
    }

    fn healthy() -> FileContentSignals {
        FileContentSignals {
            size: 4000,
            has_cta: true,
            has_links: true,
            has_metadata: true,
            ..Default::default()
        }
    }

    fn codes(issues: &[Issue]) -> Vec<IssueCode> {
        issues.iter().map(|i| i.issue).collect()
    }

    #[test]
    fn missing_page_short_circuits() {
        let structure = PageStructure::missing("app/[locale]/faq");
        let issues = detect_issues(&structure, &DetectorRules::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue, IssueCode::PageNotFound);
        assert_eq!(issues[0].severity, Severity::Critical);
    }

    #[test]
    fn missing_main_file_is_critical() {
        let structure = PageStructure {
            exists: true,
            directory: "app/[locale]/blog".to_string(),
            files: vec!["layout.tsx".to_string()],
            components: vec![scanned("layout.tsx", healthy())],
            ..Default::default()
        };
        let issues = detect_issues(&structure, &DetectorRules::default());
        assert_eq!(codes(&issues), vec![IssueCode::NoMainFile]);
        assert!(issues[0].is_critical());
    }

    #[test]
    fn bare_short_file_gets_four_warnings_in_order() {
        let structure = PageStructure {
            exists: true,
            directory: "app/[locale]/contact".to_string(),
            files: vec!["page.tsx".to_string()],
            components: vec![scanned(
                "page.tsx",
                FileContentSignals {
                    size: 499,
                    ..Default::default()
                },
            )],
            ..Default::default()
        };
        let issues = detect_issues(&structure, &DetectorRules::default());
        assert_eq!(
            codes(&issues),
            vec![
                IssueCode::LowContent,
                IssueCode::NoCta,
                IssueCode::NoInternalLinks,
                IssueCode::NoMetadata,
            ]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues.iter().all(|i| i.file.as_deref() == Some("page.tsx")));
        assert_eq!(issues[1].impact, Impact::High);
    }

    #[test]
    fn threshold_is_exclusive() {
        let structure = PageStructure {
            exists: true,
            files: vec!["page.tsx".to_string()],
            components: vec![scanned(
                "page.tsx",
                FileContentSignals {
                    size: 500,
                    ..healthy()
                },
            )],
            ..Default::default()
        };
        assert!(detect_issues(&structure, &DetectorRules::default()).is_empty());
    }

    #[test]
    fn generate_metadata_satisfies_metadata_rule() {
        let signals = FileContentSignals {
            has_metadata: false,
            has_generate_metadata: true,
            ..healthy()
        };
        let structure = PageStructure {
            exists: true,
            files: vec!["page.tsx".to_string()],
            components: vec![scanned("page.tsx", signals)],
            ..Default::default()
        };
        assert!(detect_issues(&structure, &DetectorRules::default()).is_empty());
    }

    #[test]
    fn issues_follow_file_order() {
        let weak = FileContentSignals {
            has_links: false,
            ..healthy()
        };
        let structure = PageStructure {
            exists: true,
            files: vec!["a.tsx".to_string(), "b.tsx".to_string()],
            components: vec![scanned("a.tsx", weak.clone()), scanned("b.tsx", weak)],
            ..Default::default()
        };
        let issues = detect_issues(&structure, &DetectorRules::default());
        assert_eq!(
            codes(&issues),
            vec![
                IssueCode::NoMainFile,
                IssueCode::NoInternalLinks,
                IssueCode::NoInternalLinks,
            ]
        );
        assert_eq!(issues[1].file.as_deref(), Some("a.tsx"));
        assert_eq!(issues[2].file.as_deref(), Some("b.tsx"));
    }
}
