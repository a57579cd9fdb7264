use std::sync::OnceLock;

use regex::Regex;

/// Tags counted into `jsxElements`. Case-sensitive: `Button` is the site's
/// component, `button` the intrinsic element.
pub(crate) const JSX_TAGS: &[&str] = &[
    "section", "div", "main", "article", "header", "footer", "nav", "h1", "h2", "h3", "p", "ul",
    "ol", "li", "a", "img", "form", "button", "Link", "Image", "Button",
];

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

pub(crate) fn regex_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?m)^\s*import\s+([^;]+?)\s+from\s+["']([^"']+)["']"#))
}

pub(crate) fn regex_top_level_const() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Column 0 only: indented consts live inside a component body
    RE.get_or_init(|| regex(r#"(?m)^(?:export\s+)?const\s+[A-Za-z_$][A-Za-z0-9_$]*\s*(?::[^=]+)?="#))
}

pub(crate) fn regex_jsx_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(&format!(r#"<({})[\s/>]"#, JSX_TAGS.join("|"))))
}
