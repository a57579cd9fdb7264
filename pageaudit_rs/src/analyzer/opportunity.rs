//! Opportunity Estimator.

use crate::analyzer::playbook::playbook_for;
use crate::types::{Opportunity, Potential, Priority, TargetPage};

/// Pages above this many impressions with zero clicks are flagged.
pub const ZERO_CLICK_IMPRESSIONS: u64 = 1000;

/// Click-through rate, or `None` for a page with no impressions.
pub fn ctr(page: &TargetPage) -> Option<f64> {
    ratio(page.clicks, page.impressions)
}

pub(crate) fn ratio(clicks: u64, impressions: u64) -> Option<f64> {
    (impressions > 0).then(|| clicks as f64 / impressions as f64)
}

/// Monthly clicks recoverable at a flat 1% conversion of impressions.
pub fn estimated_clicks(impressions: u64) -> u64 {
    impressions / 100
}

pub fn estimate_opportunities(page: &TargetPage) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    if page.impressions > ZERO_CLICK_IMPRESSIONS && ctr(page) == Some(0.0) {
        opportunities.push(Opportunity {
            kind: "ctr_optimization".to_string(),
            opportunity: "massive_visibility_zero_clicks".to_string(),
            description: format!(
                "{} impressions and no clicks: titles and snippets are not earning the visit",
                page.impressions
            ),
            potential: Potential::VeryHigh,
            estimated_impact: format!(
                "+{} clicks/month at 1% CTR",
                estimated_clicks(page.impressions)
            ),
        });
    }

    if page.priority == Priority::High {
        opportunities.push(Opportunity {
            kind: "strategic".to_string(),
            opportunity: "high_priority_page".to_string(),
            description: format!("{} is a key page in the visitor journey", page.path),
            potential: Potential::High,
            estimated_impact: "Improvements here carry through to generator usage".to_string(),
        });
    }

    if let Some(playbook) = playbook_for(&page.directory) {
        opportunities.push((playbook.opportunity)(page));
    }

    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(page: &TargetPage) -> Vec<String> {
        estimate_opportunities(page)
            .into_iter()
            .map(|o| o.opportunity)
            .collect()
    }

    #[test]
    fn ctr_guards_zero_impressions() {
        let page = TargetPage::new("/new", 0, 0, Priority::Low, "new");
        assert_eq!(ctr(&page), None);
        let page = TargetPage::new("/faq", 200, 5, Priority::Low, "faq");
        assert_eq!(ctr(&page), Some(0.025));
    }

    #[test]
    fn zero_click_blog_gets_all_three() {
        let page = TargetPage::new("/blog", 5021, 0, Priority::High, "blog");
        assert_eq!(
            codes(&page),
            vec!["massive_visibility_zero_clicks", "high_priority_page", "content_hub"]
        );
        let first = &estimate_opportunities(&page)[0];
        assert_eq!(first.potential, Potential::VeryHigh);
        assert!(first.estimated_impact.starts_with("+50 clicks/month"));
    }

    #[test]
    fn threshold_is_exclusive() {
        let page = TargetPage::new("/about", 1000, 0, Priority::Low, "about");
        assert!(codes(&page).is_empty());
    }

    #[test]
    fn clicks_suppress_zero_click_opportunity() {
        let page = TargetPage::new("/contact", 1452, 1, Priority::Medium, "contact");
        assert_eq!(codes(&page), vec!["conversion_path"]);
    }

    #[test]
    fn zero_impressions_do_not_fire() {
        let page = TargetPage::new("/tutorials", 0, 0, Priority::Medium, "tutorials");
        assert!(codes(&page).is_empty());
    }

    #[test]
    fn estimated_clicks_floors() {
        assert_eq!(estimated_clicks(5021), 50);
        assert_eq!(estimated_clicks(99), 0);
        assert_eq!(estimated_clicks(700), 7);
    }
}
