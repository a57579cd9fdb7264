//! Page Registry: the routes under audit.
//!
//! The built-in list is a Search Console snapshot of pages that collect
//! impressions but few clicks. A `[[pages]]` table in the config replaces it.

use std::collections::HashSet;

use crate::config::AuditConfig;
use crate::types::{Priority, TargetPage};

/// Built-in target pages, in audit order.
pub fn default_pages() -> Vec<TargetPage> {
    vec![
        TargetPage::new("/blog", 5021, 0, Priority::High, "blog"),
        TargetPage::new("/faq", 2316, 4, Priority::High, "faq"),
        TargetPage::new("/contact", 1452, 0, Priority::Medium, "contact"),
        TargetPage::new("/fonts", 1187, 9, Priority::Medium, "fonts"),
        TargetPage::new("/tutorials", 964, 2, Priority::Medium, "tutorials"),
        TargetPage::new("/about", 611, 1, Priority::Low, "about"),
    ]
}

/// Pages for this run: config override when present, else the defaults.
///
/// Paths are unique keys; later duplicates are dropped with a warning.
pub fn load_pages(config: &AuditConfig) -> Vec<TargetPage> {
    let source = if config.pages.is_empty() {
        default_pages()
    } else {
        config.pages.clone()
    };
    dedup_by_path(source)
}

fn dedup_by_path(pages: Vec<TargetPage>) -> Vec<TargetPage> {
    let mut seen = HashSet::new();
    pages
        .into_iter()
        .filter(|page| {
            let fresh = seen.insert(page.path.clone());
            if !fresh {
                tracing::warn!(path = %page.path, "duplicate target page ignored");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_unique() {
        let pages = default_pages();
        let unique: HashSet<_> = pages.iter().map(|p| &p.path).collect();
        assert_eq!(unique.len(), pages.len());
    }

    #[test]
    fn config_pages_replace_defaults() {
        let config = AuditConfig {
            pages: vec![TargetPage::new("/x", 10, 1, Priority::Low, "x")],
            ..Default::default()
        };
        let pages = load_pages(&config);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, "/x");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let pages = load_pages(&AuditConfig::default());
        assert_eq!(pages, default_pages());
    }

    #[test]
    fn duplicates_keep_first_entry() {
        let config = AuditConfig {
            pages: vec![
                TargetPage::new("/blog", 100, 0, Priority::High, "blog"),
                TargetPage::new("/faq", 50, 0, Priority::Low, "faq"),
                TargetPage::new("/blog", 999, 9, Priority::Low, "news"),
            ],
            ..Default::default()
        };
        let pages = load_pages(&config);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].impressions, 100);
        assert_eq!(pages[0].directory, "blog");
    }
}
