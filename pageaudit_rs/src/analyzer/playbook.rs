//! Per-directory strategies.
//!
//! Page types with a known playbook get one extra opportunity and extra
//! recommendations. New page types are added here as a table row; the
//! pipeline only calls [`playbook_for`].

use crate::types::{Opportunity, Potential, TargetPage};

pub struct DirectoryPlaybook {
    pub directory: &'static str,
    pub opportunity: fn(&TargetPage) -> Opportunity,
    pub immediate: &'static [&'static str],
    pub short_term: &'static [&'static str],
    pub long_term: &'static [&'static str],
}

static PLAYBOOKS: &[DirectoryPlaybook] = &[
    DirectoryPlaybook {
        directory: "blog",
        opportunity: blog_opportunity,
        immediate: &[
            "Link every article to the calligraphy generator with a contextual CTA",
            "Rewrite the blog index title around 'Arabic calligraphy' search intent",
        ],
        short_term: &[
            "Publish pillar guides per script (Thuluth, Naskh, Diwani, Kufic) and link articles to them",
            "Add Article JSON-LD with author and publish date",
        ],
        long_term: &["Build topic clusters from Search Console queries that already earn impressions"],
    },
    DirectoryPlaybook {
        directory: "faq",
        opportunity: faq_opportunity,
        immediate: &[
            "Add FAQPage JSON-LD for every visible question",
            "Answer the top question in the first paragraph",
        ],
        short_term: &["Add questions mined from long-tail search queries"],
        long_term: &["Review answers quarterly against featured-snippet results"],
    },
    DirectoryPlaybook {
        directory: "contact",
        opportunity: contact_opportunity,
        immediate: &["Give the page a single primary action (form or email) above the fold"],
        short_term: &[
            "Add trust signals: response time, support channels, social proof",
            "Link to the FAQ before the contact form to deflect common questions",
        ],
        long_term: &["Track form submissions as a conversion goal"],
    },
];

/// Strategy for a page directory, if one is known.
pub fn playbook_for(directory: &str) -> Option<&'static DirectoryPlaybook> {
    PLAYBOOKS.iter().find(|p| p.directory == directory)
}

fn blog_opportunity(page: &TargetPage) -> Opportunity {
    Opportunity {
        kind: "content".to_string(),
        opportunity: "content_hub".to_string(),
        description: format!(
            "{} already earns {} impressions; turning it into a hub feeds traffic to the generator",
            page.path, page.impressions
        ),
        potential: Potential::High,
        estimated_impact: "More entry points from long-tail calligraphy queries".to_string(),
    }
}

fn faq_opportunity(page: &TargetPage) -> Opportunity {
    Opportunity {
        kind: "rich_results".to_string(),
        opportunity: "featured_snippets".to_string(),
        description: format!(
            "FAQ structured data on {} can win rich results and featured snippets",
            page.path
        ),
        potential: Potential::High,
        estimated_impact: "Larger SERP footprint for question queries".to_string(),
    }
}

fn contact_opportunity(page: &TargetPage) -> Opportunity {
    Opportunity {
        kind: "conversion".to_string(),
        opportunity: "conversion_path".to_string(),
        description: format!(
            "{} is the last step for high-intent visitors; a clear action path converts them",
            page.path
        ),
        potential: Potential::Medium,
        estimated_impact: "More inquiries from existing traffic".to_string(),
    }
}
