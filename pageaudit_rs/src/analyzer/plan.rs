//! The three-phase restructure plan.
//!
//! The plan is a fixed template: it does not depend on the audit data. The
//! Markdown report interpolates summary counts around it.

use crate::types::{PlanPhase, RestructurePlan};

pub fn restructure_plan() -> RestructurePlan {
    RestructurePlan {
        phases: vec![
            phase(
                1,
                "Critical fixes",
                "Week 1",
                &[
                    "Create missing page directories and page.tsx entries",
                    "Rewrite titles and meta descriptions on zero-click pages",
                    "Add a primary call-to-action to every audited page",
                ],
                &[
                    "Every target route renders",
                    "CTR lifts on pages with impressions but no clicks",
                ],
            ),
            phase(
                2,
                "Content enrichment",
                "Weeks 2-3",
                &[
                    "Expand thin pages past 500 characters of useful copy",
                    "Add internal links between blog, fonts, tutorials and the generator",
                    "Add JSON-LD structured data (FAQPage, Article, BreadcrumbList)",
                ],
                &[
                    "Longer dwell time and lower bounce rate",
                    "Eligibility for rich results",
                ],
            ),
            phase(
                3,
                "Optimization and monitoring",
                "Weeks 4-6",
                &[
                    "A/B test headlines and CTA wording",
                    "Review Search Console queries weekly and refresh snippets",
                    "Re-run the audit and compare against this report",
                ],
                &[
                    "Sustained CTR growth",
                    "Organic clicks approaching the estimated potential",
                ],
            ),
        ],
    }
}

fn phase(
    number: u8,
    name: &str,
    duration: &str,
    tasks: &[&str],
    outcomes: &[&str],
) -> PlanPhase {
    PlanPhase {
        phase: number,
        name: name.to_string(),
        duration: duration.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
        expected_outcomes: outcomes.iter().map(|o| o.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_three_numbered_phases() {
        let plan = restructure_plan();
        let numbers: Vec<_> = plan.phases.iter().map(|p| p.phase).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(plan.phases.iter().all(|p| !p.tasks.is_empty()));
    }

    #[test]
    fn plan_is_stable() {
        assert_eq!(restructure_plan(), restructure_plan());
    }
}
