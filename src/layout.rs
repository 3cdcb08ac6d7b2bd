//! Layout fitting: the decision core of the render pipeline.
//!
//! Given the height the content occupies at reference settings (16px font,
//! single column — measured upstream, see [`crate::measure`]) and a page
//! configuration, [`fit`] picks the font size, column count, and margin that
//! make the content fit the page budget.
//!
//! ## Degradation order
//!
//! Three adjustments are available, and they are applied in strict priority
//! order, each exhausted before the next begins:
//!
//! 1. **Margins** shrink from 48px down to 24px in 4px steps — whitespace
//!    loss is the least disruptive change, so it always goes first.
//! 2. **Columns** grow from 1 up to 3 — reflowing into columns changes the
//!    reading experience, so it only happens once margins are spent.
//! 3. **Font size** shrinks from 16px down to 9px in 0.5px steps — the most
//!    disruptive change, reserved for last (and skipped entirely when the
//!    caller pins the font size).
//!
//! This is a lexicographic search, not a round-robin: there is no input for
//! which columns are added while margin headroom remains, or the font
//! shrinks while column headroom remains.
//!
//! ## Scaling model
//!
//! Occupied height is assumed to scale linearly with the font-size ratio and
//! inversely with column count; the fitter never re-measures after adjusting
//! a parameter. Reflow remainders make this an approximation, but it
//! converges in a single call instead of a measure/re-layout loop.
//!
//! If every stage exhausts its bound and the content still overflows, the
//! extremal values are returned as-is. Residual overflow is a normal outcome
//! for very large content, not an error; callers decide whether to accept
//! the spill or surface it.
//!
//! Every loop strictly steps a bounded counter (at most 6 + 2 + 14
//! predicate checks), so a call is O(1) regardless of content height. The
//! function is pure: no I/O, no state, identical inputs give identical
//! results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reference font size in px; content height is measured at this size.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
/// Floor for automatic font shrinking.
pub const MIN_FONT_SIZE: f64 = 9.0;
/// Starting page margin in px (top/bottom and left/right).
pub const DEFAULT_MARGIN: u32 = 48;
/// Floor for margin reduction.
pub const MIN_MARGIN: u32 = 24;
/// Ceiling for column addition.
pub const MAX_COLUMNS: u32 = 3;

const MARGIN_STEP: u32 = 4;
const FONT_STEP: f64 = 0.5;

/// Page orientation. The configured dimensions are always the portrait
/// base; landscape swaps them at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Fit request: page geometry plus the knobs the caller may pin.
///
/// `page_width`/`page_height` are the portrait base dimensions in px at
/// 96dpi (US letter is 816×1056), regardless of `orientation`. Callers are
/// expected to pass positive dimensions and `max_pages >= 1`; the fitter
/// does not validate — the config layer does (see
/// [`crate::config::SheetConfig::validate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub page_width: f64,
    pub page_height: f64,
    /// Number of pages the content must fit across (typically 1 or 2).
    pub max_pages: u32,
    pub orientation: Orientation,
    /// When set, this font size is returned verbatim and the font-shrink
    /// stage never runs. Margin and column stages still run.
    pub font_size_override: Option<f64>,
}

impl LayoutConfig {
    /// Orientation-resolved `(width, height)`: landscape swaps the portrait
    /// base dimensions, portrait passes them through.
    pub fn resolved(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Portrait => (self.page_width, self.page_height),
            Orientation::Landscape => (self.page_height, self.page_width),
        }
    }
}

/// Fitted layout parameters, applied downstream as CSS values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub font_size: f64,
    pub columns: u32,
    pub margin_px: u32,
    /// Orientation-resolved page width, echoed for the renderer.
    pub page_width: f64,
    /// Orientation-resolved page height.
    pub page_height: f64,
}

/// Compute layout parameters that fit `content_height` within the page
/// budget described by `config`.
///
/// `content_height` is the height in px the content occupies at the default
/// font size in a single column. It must be finite and non-negative; that
/// is a documented precondition, not a runtime check.
pub fn fit(content_height: f64, config: &LayoutConfig) -> LayoutResult {
    let (page_width, page_height) = config.resolved();

    let total_height = page_height * f64::from(config.max_pages);

    let mut font_size = config.font_size_override.unwrap_or(DEFAULT_FONT_SIZE);
    let mut margin_px = DEFAULT_MARGIN;
    let mut columns = 1u32;

    // Margin is deducted once against the combined budget, not per page.
    // Deliberate: matches the behavior existing documents were laid out
    // with. The renderer still draws margins on every physical page.
    let overflows = |font_size: f64, columns: u32, margin_px: u32| {
        let scale = font_size / DEFAULT_FONT_SIZE;
        let effective = content_height * scale / f64::from(columns);
        effective > total_height - f64::from(margin_px * 2)
    };

    // Stage 1: trade whitespace for budget.
    while overflows(font_size, columns, margin_px) && margin_px > MIN_MARGIN {
        margin_px -= MARGIN_STEP;
    }

    // Stage 2: split into columns.
    while overflows(font_size, columns, margin_px) && columns < MAX_COLUMNS {
        columns += 1;
    }

    // Stage 3: shrink the type, last resort.
    if config.font_size_override.is_none() {
        while overflows(font_size, columns, margin_px) && font_size > MIN_FONT_SIZE {
            font_size -= FONT_STEP;
        }
        // Invariant, not dead code: holds the floor even if the loop step
        // ever changes to one that could overshoot.
        font_size = font_size.max(MIN_FONT_SIZE);
    }

    LayoutResult {
        font_size,
        columns,
        margin_px,
        page_width,
        page_height,
    }
}
