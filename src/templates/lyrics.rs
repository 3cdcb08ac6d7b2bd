//! Song lyrics: `[Verse 1]`-style section markers become headings.

use super::Template;
use regex::Regex;
use std::sync::LazyLock;

const MARKERS: &str = "Verse\\s*\\d*|Chorus|Bridge|Intro|Outro|Pre-Chorus|Hook|Refrain|Interlude";

static SECTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?mi)^\[({MARKERS})\]")).expect("lyrics pattern"));

static SECTION_REWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?mi)^\[({MARKERS})\]\s*")).expect("lyrics pattern"));

pub static LYRICS: Template = Template {
    name: "lyrics",
    label: "Lyrics",
    css_class: "template-lyrics",
    detect: |input| SECTION_MARKER.is_match(input),
    transform: |input| SECTION_REWRITE.replace_all(input, "## ${1}\n").into_owned(),
};
