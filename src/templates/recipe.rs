//! Recipes: bare section keywords become headings, metadata lines become
//! bold labels.

use super::Template;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A section keyword alone on its line (`Ingredients`, `Method`, ...).
static SECTION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^(Ingredients|Instructions|Directions|Method|Steps|Preparation|Notes|Tips)\s*$")
        .expect("recipe pattern")
});

/// A metadata line like `Prep time: 10 min` or `Servings: 4`. Accepts the
/// fullwidth colon common in content pasted from East Asian recipe sites.
static META_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^(Prep\s*time|Cook\s*time|Total\s*time|Servings|Serves|Yield)\s*[:：]\s*(.+)$")
        .expect("recipe pattern")
});

fn transform(input: &str) -> String {
    let result = SECTION_KEYWORD.replace_all(input, "## ${1}");
    META_LINE
        .replace_all(&result, |caps: &Captures| {
            format!("**{}:** {}", &caps[1], caps[2].trim())
        })
        .into_owned()
}

pub static RECIPE: Template = Template {
    name: "recipe",
    label: "Recipe",
    css_class: "template-recipe",
    detect: |input| SECTION_KEYWORD.is_match(input),
    transform,
};
