// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use once_cell::sync::Lazy;
use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use std::collections::HashMap;

static HEADING_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"(?s)<h([1-6])>(.*?)</h[1-6]>"));

static TAG_STRIP_REGEX: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"<[^>]*>"));

#[derive(Debug)]
pub(super) enum MarkdownRenderError {
    Regex(String),
}

impl std::fmt::Display for MarkdownRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkdownRenderError::Regex(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for MarkdownRenderError {}

/// Converts GitHub-flavored markdown to HTML.
///
/// Raw HTML blocks in the source are passed through untouched; the page is
/// authored locally, not by visitors.
pub(super) fn render_markdown(markdown: &str) -> Result<String, MarkdownRenderError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    add_heading_anchors(html_output)
}

// Rewrite <hN>...</hN> to carry a slug id so in-page links work. Repeated
// slugs get a numeric suffix, the way GitHub renders readme headings.
fn add_heading_anchors(html: String) -> Result<String, MarkdownRenderError> {
    let heading_regex = match HEADING_REGEX.as_ref() {
        Ok(regex) => regex,
        Err(err) => {
            return Err(MarkdownRenderError::Regex(format!(
                "Heading regex failed to compile: {}",
                err
            )));
        }
    };

    let tag_strip_regex = match TAG_STRIP_REGEX.as_ref() {
        Ok(regex) => regex,
        Err(err) => {
            return Err(MarkdownRenderError::Regex(format!(
                "Tag strip regex failed to compile: {}",
                err
            )));
        }
    };

    let mut seen_slugs: HashMap<String, usize> = HashMap::new();

    let html = heading_regex.replace_all(&html, |caps: &regex::Captures| {
        let level = &caps[1];
        let inner = &caps[2];

        let text = tag_strip_regex.replace_all(inner, "");
        let base = heading_slug(&text);

        let count = seen_slugs.entry(base.clone()).or_insert(0);
        let anchor = if *count == 0 {
            base
        } else {
            format!("{}-{}", base, *count)
        };
        *count += 1;

        format!(r#"<h{} id="{}">{}</h{}>"#, level, anchor, inner, level)
    });

    Ok(html.to_string())
}

fn heading_slug(text: &str) -> String {
    let mut slug = String::new();
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            slug.push('-');
        } else if ch == '-' || ch == '_' {
            slug.push(ch);
        }
    }

    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_extended_markdown_features() {
        let markdown = r#"# Feature Tour

| Feature | Syntax |
|---------|--------|
| Strike  | `~~`   |

~~Old plan~~

- [x] Done
- [ ] Pending

A claim[^1].

[^1]: The source.
"#;

        let html = render_markdown(markdown).expect("render markdown");

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Feature</th>"));
        assert!(html.contains("<del>Old plan</del>"));
        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains("footnote"));
    }

    #[test]
    fn headings_get_anchor_ids() {
        let html = render_markdown("# Welcome\n\n## Getting started\n").expect("render markdown");

        assert!(html.contains(r##"<h1 id="welcome">Welcome</h1>"##));
        assert!(html.contains(r##"<h2 id="getting-started">Getting started</h2>"##));
    }

    #[test]
    fn duplicate_headings_get_numbered_anchors() {
        let html =
            render_markdown("## Setup\n\nfirst\n\n## Setup\n\nsecond\n\n## Setup\n\nthird\n")
                .expect("render markdown");

        assert!(html.contains(r##"id="setup""##));
        assert!(html.contains(r##"id="setup-1""##));
        assert!(html.contains(r##"id="setup-2""##));
    }

    #[test]
    fn heading_anchor_ignores_inline_markup() {
        let html = render_markdown("## Using `cargo run` here\n").expect("render markdown");

        assert!(html.contains(r##"<h2 id="using-cargo-run-here">"##));
        assert!(html.contains("<code>cargo run</code>"));
    }

    #[test]
    fn symbol_only_headings_fall_back_to_section() {
        let html = render_markdown("## !!!\n\n## ???\n").expect("render markdown");

        assert!(html.contains(r##"id="section""##));
        assert!(html.contains(r##"id="section-1""##));
    }

    #[test]
    fn raw_html_passes_through() {
        let markdown = "intro\n\n<div class=\"callout\">Handle with care.</div>\n";
        let html = render_markdown(markdown).expect("render markdown");

        assert!(html.contains(r#"<div class="callout">Handle with care.</div>"#));
    }

    #[test]
    fn heading_slug_normalizes_text() {
        assert_eq!(heading_slug("Getting Started!"), "getting-started");
        assert_eq!(heading_slug("  Spaced Out  "), "spaced-out");
        assert_eq!(heading_slug("Under_score-mix"), "under_score-mix");
        assert_eq!(heading_slug("MiXeD CaSe"), "mixed-case");
        assert_eq!(heading_slug("!!!"), "section");
    }
}
