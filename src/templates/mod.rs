//! Content-type templates: keyword detection and line rewrites.
//!
//! Pasted content often follows a recognizable shape — song lyrics with
//! `[Verse 1]` markers, recipes with an `Ingredients` block — that plain
//! markdown rendering would flatten into one undifferentiated paragraph
//! soup. A template is a pair of pure functions over the raw text:
//!
//! - `detect`: does this input look like the template's content type?
//! - `transform`: rewrite marker lines into markdown (`## Heading`,
//!   `**Label:** value`) so the parser produces structured sections.
//!
//! Transforms run before markdown conversion and share no state with the
//! rest of the pipeline. Each template also carries a css class the
//! renderer puts on `<body>` so themes can style per content type.

mod lyrics;
mod recipe;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use lyrics::LYRICS;
pub use recipe::RECIPE;

/// A content-type template. `detect` and `transform` are fn pointers:
/// templates are static data, not trait objects.
pub struct Template {
    pub name: &'static str,
    pub label: &'static str,
    pub css_class: &'static str,
    detect: fn(&str) -> bool,
    transform: fn(&str) -> String,
}

impl Template {
    /// Whether `input` looks like this template's content type.
    pub fn detect(&self, input: &str) -> bool {
        (self.detect)(input)
    }

    /// Rewrite marker lines into markdown. Input without markers passes
    /// through unchanged.
    pub fn transform(&self, input: &str) -> String {
        (self.transform)(input)
    }
}

static TEMPLATES: [&Template; 2] = [&LYRICS, &RECIPE];

/// All registered templates, in detection priority order.
pub fn templates() -> &'static [&'static Template] {
    &TEMPLATES
}

/// Look up a template by name.
pub fn get(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().copied().find(|t| t.name == name)
}

/// First template whose detector matches, if any.
pub fn detect(input: &str) -> Option<&'static Template> {
    TEMPLATES.iter().copied().find(|t| t.detect(input))
}

/// Template selection as it appears in config files and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateChoice {
    /// Run detection and use the first matching template.
    #[default]
    Auto,
    /// Render as plain markdown, no template.
    None,
    Lyrics,
    Recipe,
}

impl TemplateChoice {
    /// Resolve the choice against the input text.
    pub fn resolve(self, input: &str) -> Option<&'static Template> {
        match self {
            TemplateChoice::Auto => detect(input),
            TemplateChoice::None => None,
            TemplateChoice::Lyrics => Some(&LYRICS),
            TemplateChoice::Recipe => Some(&RECIPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_both_templates() {
        let names: Vec<&str> = templates().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["lyrics", "recipe"]);
    }

    #[test]
    fn get_by_name() {
        assert_eq!(get("lyrics").unwrap().label, "Lyrics");
        assert_eq!(get("recipe").unwrap().label, "Recipe");
        assert!(get("screenplay").is_none());
    }

    #[test]
    fn detect_picks_lyrics_for_verse_markers() {
        let found = detect("[Verse 1]\nSome lyrics here").unwrap();
        assert_eq!(found.name, "lyrics");
    }

    #[test]
    fn detect_picks_recipe_for_ingredient_block() {
        let found = detect("Ingredients\n- 1 cup flour").unwrap();
        assert_eq!(found.name, "recipe");
    }

    #[test]
    fn detect_returns_none_for_plain_text() {
        assert!(detect("Just some regular text").is_none());
    }

    #[test]
    fn choice_auto_runs_detection() {
        assert_eq!(
            TemplateChoice::Auto.resolve("[Chorus]\nLa la").unwrap().name,
            "lyrics"
        );
        assert!(TemplateChoice::Auto.resolve("plain").is_none());
    }

    #[test]
    fn choice_none_suppresses_detection() {
        assert!(TemplateChoice::None.resolve("[Chorus]\nLa la").is_none());
    }

    #[test]
    fn choice_forced_ignores_detection() {
        let t = TemplateChoice::Recipe.resolve("no keywords at all").unwrap();
        assert_eq!(t.name, "recipe");
    }
}
