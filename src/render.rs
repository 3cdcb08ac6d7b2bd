//! Print document rendering.
//!
//! Takes the sectioned HTML from the parser and the fitted layout from the
//! fitter and produces a complete, self-contained HTML document. Everything
//! is embedded: base CSS and theme CSS at compile time via `include_str!`,
//! layout values as generated CSS custom properties. The output is a single
//! file you can open and print — no assets to ship alongside.
//!
//! Layout application is pure CSS: the fitted column count becomes
//! `column-count` on the content flow, the margin becomes padding plus the
//! `@page` margin, and the font size sets the root em. The renderer does not
//! paginate; the browser's print engine does, against the `@page` size.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked, type-safe, escaped by default. The parser's pre-rendered
//! section HTML is the one `PreEscaped` interpolation.

use crate::layout::LayoutResult;
use crate::templates::Template;
use crate::themes::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const BASE_CSS: &str = include_str!("../static/sheet.css");

/// Format a px value without a trailing `.0` for whole numbers.
fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// CSS carrying the fitted layout: custom properties consumed by the base
/// stylesheet, plus the `@page` rule for the print engine.
pub fn layout_css(layout: &LayoutResult) -> String {
    format!(
        ":root {{\n  \
           --font-size: {font};\n  \
           --columns: {columns};\n  \
           --margin: {margin};\n  \
           --page-width: {width};\n  \
           --page-height: {height};\n\
         }}\n\n\
         @page {{\n  \
           size: {width} {height};\n  \
           margin: {margin};\n\
         }}",
        font = px(layout.font_size),
        columns = layout.columns,
        margin = px(f64::from(layout.margin_px)),
        width = px(layout.page_width),
        height = px(layout.page_height),
    )
}

/// Render the complete print-ready document.
///
/// `sections_html` is the parser's output (trusted, pre-escaped markdown
/// rendering). The template, when present, contributes a body class so
/// themes can style per content type.
pub fn render_document(
    title: &str,
    sections_html: &str,
    layout: &LayoutResult,
    theme: &Theme,
    template: Option<&Template>,
) -> Markup {
    let css = format!("{}\n\n{}\n{}", layout_css(layout), BASE_CSS, theme.css);
    let body_class = match template {
        Some(t) => format!("{} {}", theme.css_class, t.css_class),
        None => theme.css_class.to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=(body_class) {
                main.sheet {
                    (PreEscaped(sections_html))
                }
            }
        }
    }
}
