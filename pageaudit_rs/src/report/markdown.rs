//! Human-readable Markdown report.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::progress::format_count;
use crate::report::{ensure_dir, write_file};
use crate::types::{AnalysisResult, Issue, PageAnalysis, Recommendations, Severity};

/// Format an integer with `,` thousands separators (`5021` -> `5,021`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_ctr(ctr: Option<f64>) -> String {
    match ctr {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

/// Render the whole report as one Markdown string.
pub fn render_markdown(result: &AnalysisResult) -> String {
    let summary = &result.summary;
    let mut md = String::new();

    md.push_str("# Page Restructure Report\n\n");
    md.push_str(&format!("_Generated: {}_\n\n", result.timestamp));

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n|---|---|\n");
    md.push_str(&format!("| Pages audited | {} |\n", summary.total_pages));
    md.push_str(&format!(
        "| Total impressions | {} |\n",
        format_thousands(summary.total_impressions)
    ));
    md.push_str(&format!(
        "| Total clicks | {} |\n",
        format_thousands(summary.total_clicks)
    ));
    md.push_str(&format!("| Average CTR | {} |\n", format_ctr(summary.average_ctr)));
    md.push_str(&format!(
        "| Estimated potential | +{} clicks/month |\n",
        format_thousands(summary.estimated_potential)
    ));
    md.push_str(&format!("| Critical issues | {} |\n", summary.critical_issues));
    md.push_str(&format!("| Warnings | {} |\n", summary.warnings));
    md.push_str(&format!("| Missing pages | {} |\n\n", summary.missing_pages));

    md.push_str("## Priority Order\n\n");
    for (i, entry) in summary.priority_order.iter().enumerate() {
        let ctr = result.pages.get(&entry.path).and_then(|p| p.basic_info.ctr);
        md.push_str(&format!(
            "{}. `{}` - {} impressions, {} clicks, CTR {} ({})\n",
            i + 1,
            entry.path,
            format_thousands(entry.impressions),
            format_thousands(entry.clicks),
            format_ctr(ctr),
            entry.priority
        ));
    }
    md.push('\n');

    md.push_str("## Page Details\n\n");
    for (i, entry) in summary.priority_order.iter().enumerate() {
        if let Some(page) = result.pages.get(&entry.path) {
            render_page(&mut md, i + 1, page);
        }
    }

    md.push_str("## Site-wide Recommendations\n\n");
    render_recommendations(&mut md, &result.recommendations);

    md.push_str("## Restructure Plan\n\n");
    md.push_str(&format!(
        "This plan addresses {} and {} across {}, targeting +{} clicks/month.\n\n",
        format_count(summary.critical_issues, "critical issue", "critical issues"),
        format_count(summary.warnings, "warning", "warnings"),
        format_count(summary.total_pages, "page", "pages"),
        format_thousands(summary.estimated_potential)
    ));
    for phase in &result.restructure_plan.phases {
        md.push_str(&format!(
            "### Phase {}: {} ({})\n\n",
            phase.phase, phase.name, phase.duration
        ));
        md.push_str("**Tasks**\n\n");
        for task in &phase.tasks {
            md.push_str(&format!("- [ ] {task}\n"));
        }
        md.push_str("\n**Expected outcomes**\n\n");
        for outcome in &phase.expected_outcomes {
            md.push_str(&format!("- {outcome}\n"));
        }
        md.push('\n');
    }

    md.push_str("---\n\n");
    md.push_str(&format!(
        "_Generated by pageaudit v{}_\n",
        env!("CARGO_PKG_VERSION")
    ));
    md
}

fn render_page(md: &mut String, rank: usize, page: &PageAnalysis) {
    let info = &page.basic_info;
    let structure = &page.structure;

    md.push_str(&format!("### {}. {}\n\n", rank, info.path));
    md.push_str(&format!(
        "- **Impressions**: {}\n- **Clicks**: {}\n- **CTR**: {}\n- **Priority**: {}\n",
        format_thousands(info.impressions),
        format_thousands(info.clicks),
        format_ctr(info.ctr),
        info.priority
    ));
    let state = if structure.exists { "" } else { " (missing)" };
    md.push_str(&format!("- **Directory**: `{}`{}\n", structure.directory, state));
    if !structure.files.is_empty() {
        md.push_str(&format!("- **Files**: {}\n", structure.files.join(", ")));
    }
    for error in &structure.scan_errors {
        md.push_str(&format!("- **Scan error**: {error}\n"));
    }
    md.push('\n');

    md.push_str("#### Issues\n\n");
    if page.issues.is_empty() {
        md.push_str("_No issues detected._\n");
    }
    for issue in &page.issues {
        md.push_str(&issue_line(issue));
    }
    md.push('\n');

    md.push_str("#### Opportunities\n\n");
    if page.opportunities.is_empty() {
        md.push_str("_None identified._\n");
    }
    for opp in &page.opportunities {
        md.push_str(&format!(
            "- **{}** ({}): {} - _{}_\n",
            opp.opportunity,
            opp.potential.as_str(),
            opp.description,
            opp.estimated_impact
        ));
    }
    md.push('\n');

    md.push_str("#### Recommendations\n\n");
    render_recommendations(md, &page.restructure_recommendations);
}

fn issue_line(issue: &Issue) -> String {
    let marker = match issue.severity {
        Severity::Critical => "🔴",
        Severity::Warning => "🟡",
    };
    let file = issue
        .file
        .as_deref()
        .map(|f| format!(" (`{f}`)"))
        .unwrap_or_default();
    format!(
        "- {} **{}** [impact: {}]{}: {}\n",
        marker,
        issue.issue,
        issue.impact.as_str(),
        file,
        issue.description
    )
}

fn render_recommendations(md: &mut String, recs: &Recommendations) {
    let buckets = [
        ("Immediate", &recs.immediate),
        ("Short term", &recs.short_term),
        ("Long term", &recs.long_term),
    ];
    for (title, items) in buckets {
        if items.is_empty() {
            continue;
        }
        md.push_str(&format!("**{title}**\n\n"));
        for item in items {
            md.push_str(&format!("- {item}\n"));
        }
        md.push('\n');
    }
}

/// Render the report and write it to `out_dir/file_name`.
pub fn generate_readable_report(
    result: &AnalysisResult,
    out_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    write_markdown(result, out_dir, file_name)
}

pub(crate) fn write_markdown(
    result: &AnalysisResult,
    out_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let path = out_dir.join(file_name);
    write_file(&path, &render_markdown(result))?;
    tracing::info!(path = %path.display(), "wrote Markdown report");
    Ok(path)
}
