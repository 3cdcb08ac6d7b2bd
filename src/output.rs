//! CLI output formatting.
//!
//! Output is information-first: the header line carries what the user asked
//! about (the fitted layout, the rendered sheet), indented context lines
//! carry the supporting detail. Each surface has a `format_*` function
//! returning `Vec<String>` for testability; `main` does the printing.
//! Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! Sheet → song.html
//!     Template: Lyrics
//!     Theme: Minimal
//!     Sections: 4
//!     Content height: 1310px (estimated)
//!     Font size: 16px
//!     Columns: 1
//!     Margin: 48px
//!     Page: 816 × 1056px, portrait, 1 page
//! ```

use crate::layout::{LayoutResult, Orientation};
use crate::templates::Template;
use crate::themes::Theme;

/// Format a px value without a trailing `.0` for whole numbers.
fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    }
}

/// The indented layout detail lines shared by `fit` and `render` output.
fn layout_lines(layout: &LayoutResult, max_pages: u32, orientation: Orientation) -> Vec<String> {
    vec![
        format!("    Font size: {}px", fmt_px(layout.font_size)),
        format!("    Columns: {}", layout.columns),
        format!("    Margin: {}px", layout.margin_px),
        format!(
            "    Page: {} × {}px, {}, {} page{}",
            fmt_px(layout.page_width),
            fmt_px(layout.page_height),
            orientation_label(orientation),
            max_pages,
            if max_pages == 1 { "" } else { "s" }
        ),
    ]
}

/// Format the result of a bare `fit` invocation.
pub fn format_fit(
    layout: &LayoutResult,
    content_height: f64,
    max_pages: u32,
    orientation: Orientation,
) -> Vec<String> {
    let mut lines = vec![
        "Layout".to_string(),
        format!("    Content height: {}px", fmt_px(content_height)),
    ];
    lines.extend(layout_lines(layout, max_pages, orientation));
    lines
}

/// Format the summary printed after rendering a sheet.
#[allow(clippy::too_many_arguments)]
pub fn format_render_summary(
    output_name: &str,
    template: Option<&Template>,
    theme: &Theme,
    section_count: usize,
    content_height: f64,
    height_estimated: bool,
    layout: &LayoutResult,
    max_pages: u32,
    orientation: Orientation,
) -> Vec<String> {
    let mut lines = vec![
        format!("Sheet → {output_name}"),
        format!(
            "    Template: {}",
            template.map(|t| t.label).unwrap_or("none")
        ),
        format!("    Theme: {}", theme.label),
        format!("    Sections: {section_count}"),
        format!(
            "    Content height: {}px{}",
            fmt_px(content_height),
            if height_estimated { " (estimated)" } else { "" }
        ),
    ];
    lines.extend(layout_lines(layout, max_pages, orientation));
    lines
}

/// Format the theme registry listing.
pub fn format_themes(themes: &[Theme]) -> Vec<String> {
    let mut lines = vec!["Themes".to_string()];
    for theme in themes {
        lines.push(format!("    {} ({})", theme.label, theme.css_class));
    }
    lines
}

/// Format the template registry listing.
pub fn format_templates(templates: &[&Template]) -> Vec<String> {
    let mut lines = vec!["Templates".to_string()];
    for template in templates {
        lines.push(format!("    {} ({})", template.label, template.css_class));
    }
    lines
}
