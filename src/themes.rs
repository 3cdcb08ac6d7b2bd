//! Theme registry: named style presets for the rendered sheet.
//!
//! A theme is static data — a label for display, a `theme-*` class the
//! renderer puts on `<body>`, and a stylesheet embedded at compile time.
//! There is no per-theme computation; layout parameters come from the
//! fitter and are injected separately (see [`crate::render::layout_css`]).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The available theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Plain type on white, minimal ornament. The default.
    #[default]
    Minimal,
    /// Sans-serif with heavier headings and accent rules.
    Modern,
    /// Serif book style with centered headings.
    Classic,
}

/// A named style preset.
pub struct Theme {
    pub name: ThemeName,
    pub label: &'static str,
    pub css_class: &'static str,
    /// Stylesheet appended after the base sheet CSS.
    pub css: &'static str,
}

static THEMES: [Theme; 3] = [
    Theme {
        name: ThemeName::Minimal,
        label: "Minimal",
        css_class: "theme-minimal",
        css: include_str!("../static/theme-minimal.css"),
    },
    Theme {
        name: ThemeName::Modern,
        label: "Modern",
        css_class: "theme-modern",
        css: include_str!("../static/theme-modern.css"),
    },
    Theme {
        name: ThemeName::Classic,
        label: "Classic",
        css_class: "theme-classic",
        css: include_str!("../static/theme-classic.css"),
    },
];

/// All registered themes.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

impl Theme {
    /// Look up a theme preset. Total: every `ThemeName` has a theme.
    pub fn get(name: ThemeName) -> &'static Theme {
        THEMES
            .iter()
            .find(|t| t.name == name)
            .unwrap_or(&THEMES[0])
    }
}
