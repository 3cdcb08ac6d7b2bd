//! # Onesheet
//!
//! Render free-form pasted or typed text into a print-ready single- or
//! double-page HTML document. Paste in notes, song lyrics, or a recipe;
//! get back one self-contained file sized for paper.
//!
//! # Architecture: One Pipeline, One Decision
//!
//! Content flows through five small stages:
//!
//! ```text
//! 1. Template   raw text   →  markdown     (lyrics/recipe marker rewrites)
//! 2. Parse      markdown   →  sections     (HTML, split at h1/h2 boundaries)
//! 3. Measure    markdown   →  height px    (heuristic, at reference settings)
//! 4. Fit        height     →  layout       (font size, columns, margin)
//! 5. Render     sections + layout → HTML   (self-contained printable file)
//! ```
//!
//! Only stage 4 makes decisions. Everything else is a mechanical transform;
//! the fitter runs an ordered, bounded search that trades away page
//! qualities from least to most disruptive: margins shrink first, then
//! columns are added, then the type shrinks. See [`layout`] for the full
//! model, including the linear height-scaling approximation that lets the
//! whole pipeline converge in one pass instead of a measure/re-layout loop.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`templates`] | Content-type detection and marker rewrites (lyrics, recipe) |
//! | [`parser`] | Bullet normalization, markdown → HTML, section segmentation |
//! | [`measure`] | Heuristic content-height estimation at reference settings |
//! | [`layout`] | The fitting core: margin/column/font search over the page budget |
//! | [`render`] | Maud document shell, theme CSS, layout as CSS custom properties |
//! | [`themes`] | Static style presets (minimal, modern, classic) |
//! | [`config`] | `onesheet.toml` loading and validation |
//! | [`output`] | CLI output formatting — information-first summary lines |
//!
//! # Design Decisions
//!
//! ## Fit Once, Don't Iterate
//!
//! The fitter assumes occupied height scales linearly with font size and
//! inversely with column count, so it never re-measures after adjusting a
//! parameter. Reflow remainders make this approximate, but it is
//! deterministic, O(1), and good enough when the downstream renderer is a
//! print engine that tolerates a few px of slack. Callers with a real
//! measurement (a browser, a typesetter) pass it in and get the same
//! single-call convergence.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, interpolation is
//! escaped by default, and there is no template directory to ship. The one
//! `PreEscaped` seam is the parser's own markdown rendering.
//!
//! ## Self-Contained Output
//!
//! The rendered document embeds all CSS — base sheet styles, the theme, and
//! the generated layout properties. One file in, one file out; the output
//! prints identically from any browser with no assets to resolve.

pub mod config;
pub mod layout;
pub mod measure;
pub mod output;
pub mod parser;
pub mod render;
pub mod templates;
pub mod themes;
