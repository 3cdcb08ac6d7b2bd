//! Markdown parsing and section segmentation.
//!
//! Turns pasted or typed text into the HTML the page renderer flows into
//! columns. Two quirks of real pasted content drive this module:
//!
//! - **Bullet soup**: text copied from websites, docs, and rich editors
//!   arrives with `•`, `■`, `–`, `→` and friends where markdown wants `-`.
//!   [`normalize_bullets`] rewrites them so lists survive the paste.
//! - **Bare line breaks**: people typing lyrics or notes expect a newline to
//!   be a line break, not a paragraph join. Soft breaks are promoted to hard
//!   `<br>` breaks before HTML rendering.
//!
//! After rendering, the HTML is split immediately before each `<h1>`/`<h2>`
//! open tag and every segment is wrapped in `<div class="section">`. Sections
//! are the unit the column layout keeps together; content with fewer than
//! two segments passes through unwrapped.

use pulldown_cmark::{Event, Parser, Tag, TagEnd, html as md_html};
use regex::Regex;
use std::sync::LazyLock;

/// Non-standard bullet glyphs seen in pasted content, at line start after
/// optional indentation.
static BULLET_GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)[■▪▸▹►▻●○◦◽◾•–—→»‣⁃∙]").expect("bullet pattern")
});

/// A top-level heading open tag: `<h1` or `<h2` followed by `>` or an
/// attribute. Section boundaries sit immediately before these.
static SECTION_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h[12][\s>]").expect("heading pattern"));

/// Rewrite non-standard bullet characters to markdown dashes, preserving
/// indentation so nested lists keep their depth.
pub fn normalize_bullets(input: &str) -> String {
    BULLET_GLYPH.replace_all(input, "${1}-").into_owned()
}

/// Parse markdown content into HTML with per-heading section wrappers.
///
/// Empty or whitespace-only input yields an empty string.
pub fn parse_content(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let normalized = normalize_bullets(input);
    let events = Parser::new(&normalized).map(|event| match event {
        // Single newlines are line breaks in pasted text
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut raw = String::new();
    md_html::push_html(&mut raw, events);

    wrap_sections(&raw)
}

/// Document title: the text of the first heading, any level.
///
/// Returns `None` when the content has no heading; callers fall back to a
/// default.
pub fn extract_title(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
                title.clear();
            }
            _ => {}
        }
    }
    None
}

/// Split rendered HTML at h1/h2 boundaries and wrap each segment in a
/// section div. A boundary at offset 0 opens the first segment rather than
/// creating an empty one.
fn wrap_sections(raw: &str) -> String {
    let splits: Vec<usize> = SECTION_BOUNDARY
        .find_iter(raw)
        .map(|m| m.start())
        .filter(|&start| start > 0)
        .collect();

    if splits.is_empty() {
        return raw.to_string();
    }

    let mut segments = Vec::with_capacity(splits.len() + 1);
    let mut prev = 0;
    for &start in &splits {
        segments.push(&raw[prev..start]);
        prev = start;
    }
    segments.push(&raw[prev..]);

    segments
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| format!("<div class=\"section\">{segment}</div>"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_become_html() {
        let result = parse_content("# Hello");
        assert!(result.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn bullet_lists_become_html() {
        let result = parse_content("- item one\n- item two");
        assert!(result.contains("<li>item one</li>"));
        assert!(result.contains("<li>item two</li>"));
    }

    #[test]
    fn emphasis_becomes_html() {
        let result = parse_content("**bold** and *italic*");
        assert!(result.contains("<strong>bold</strong>"));
        assert!(result.contains("<em>italic</em>"));
    }

    #[test]
    fn horizontal_rules_become_html() {
        let result = parse_content("above\n\n---\n\nbelow");
        assert!(result.contains("<hr"));
    }

    #[test]
    fn headings_start_sections() {
        let result = parse_content("# Section 1\ntext\n# Section 2\nmore");
        assert_eq!(result.matches("class=\"section\"").count(), 2);
    }

    #[test]
    fn single_heading_passes_through_unwrapped() {
        let result = parse_content("# Only\ntext");
        assert!(!result.contains("class=\"section\""));
        assert!(result.contains("<h1>Only</h1>"));
    }

    #[test]
    fn h2_boundaries_also_split() {
        let result = parse_content("## Verse 1\nla la\n## Chorus\nna na");
        assert_eq!(result.matches("class=\"section\"").count(), 2);
    }

    #[test]
    fn h3_does_not_split() {
        let result = parse_content("### small\ntext\n\n### also small\nmore");
        assert!(!result.contains("class=\"section\""));
    }

    #[test]
    fn nonstandard_bullets_become_list_items() {
        let result = parse_content("■ item one\n■ item two");
        assert!(result.contains("<li>item one</li>"));
        assert!(result.contains("<li>item two</li>"));
    }

    #[test]
    fn nested_nonstandard_bullets_keep_depth() {
        let result = parse_content("- parent\n  ■ child");
        assert!(result.contains("<li>parent"));
        assert!(result.contains("<li>child</li>"));
        assert!(result.contains("<ul>"));
    }

    #[test]
    fn single_newlines_become_breaks() {
        let result = parse_content("line one\nline two\nline three");
        assert!(result.contains("<br"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(parse_content(""), "");
        assert_eq!(parse_content("   \n  "), "");
    }

    #[test]
    fn title_from_first_heading() {
        assert_eq!(
            extract_title("# My Song\n\n## Verse 1").as_deref(),
            Some("My Song")
        );
    }

    #[test]
    fn title_from_h2_when_no_h1() {
        assert_eq!(extract_title("## Chorus\nla la").as_deref(), Some("Chorus"));
    }

    #[test]
    fn title_none_without_headings() {
        assert_eq!(extract_title("just plain text"), None);
    }

    #[test]
    fn normalize_preserves_indentation() {
        assert_eq!(normalize_bullets("  • deep"), "  - deep");
        assert_eq!(normalize_bullets("• flat"), "- flat");
    }

    #[test]
    fn normalize_leaves_mid_line_glyphs_alone() {
        assert_eq!(normalize_bullets("a • b"), "a • b");
    }
}
