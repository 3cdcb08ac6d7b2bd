//! Heuristic content-height estimation.
//!
//! The fitter never measures text; it wants the height the content occupies
//! at reference settings (16px font, single column) as an input. In a
//! browser that number comes from DOM measurement. Here it comes from a
//! rough estimator: walk the markdown block structure, count lines with an
//! average-glyph-width wrap, and charge each block its line height plus
//! spacing.
//!
//! This is deliberately coarse. An average glyph advance of 0.5em tracks
//! ordinary prose within a few percent, which is plenty for a fitter whose
//! adjustment steps are 4px of margin and half a point of type. Soft breaks
//! count as line breaks because the parser promotes them to `<br>` before
//! rendering. Loose list items are charged as paragraphs. Callers that have
//! a real measurement pass it via `--content-height` and skip this module
//! entirely.

use crate::layout::{DEFAULT_FONT_SIZE, DEFAULT_MARGIN, LayoutConfig};
use crate::parser::normalize_bullets;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Body line-height multiplier, matching the sheet stylesheet.
const LINE_HEIGHT: f64 = 1.5;
/// Average glyph advance in em.
const AVG_GLYPH_EM: f64 = 0.5;
/// Vertical spacing charged after a block, in em at the reference size.
const BLOCK_SPACING_EM: f64 = 0.75;
/// Height of a horizontal rule, borders included.
const RULE_PX: f64 = 2.0;

/// The text width content wraps at during reference measurement: the
/// orientation-resolved page width net of default margins, single column.
pub fn reference_text_width(config: &LayoutConfig) -> f64 {
    let (width, _) = config.resolved();
    width - f64::from(DEFAULT_MARGIN * 2)
}

/// Estimate the height in px that `markdown` occupies when rendered at the
/// reference font size in a single column of `text_width_px`.
pub fn estimate_height(markdown: &str, text_width_px: f64) -> f64 {
    let normalized = normalize_bullets(markdown);
    let mut height = 0.0;
    let mut block: Option<BlockAcc> = None;

    for event in Parser::new(&normalized) {
        match event {
            Event::Start(Tag::Paragraph) => block = Some(BlockAcc::new(1.0)),
            Event::Start(Tag::Heading { level, .. }) => {
                block = Some(BlockAcc::new(heading_em(level)));
            }
            // A nested list arrives before its parent item ends; charge the
            // parent's partial line first or it would be lost.
            Event::Start(Tag::List(_)) => {
                flush_partial(&mut block, &mut height, text_width_px);
            }
            Event::Start(Tag::Item) => {
                flush_partial(&mut block, &mut height, text_width_px);
                block = Some(BlockAcc::new(1.0));
            }
            Event::Start(Tag::CodeBlock(_)) => block = Some(BlockAcc::new(0.9)),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) => {
                if let Some(acc) = block.take() {
                    height += acc.finish(text_width_px) + BLOCK_SPACING_EM * DEFAULT_FONT_SIZE;
                }
            }
            Event::End(TagEnd::Item) => {
                if let Some(acc) = block.take() {
                    height += acc.finish(text_width_px);
                }
            }
            Event::End(TagEnd::List(_)) => {
                height += BLOCK_SPACING_EM * DEFAULT_FONT_SIZE;
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(acc) = block.as_mut() {
                    for (i, segment) in text.split('\n').enumerate() {
                        if i > 0 {
                            acc.break_line(text_width_px);
                        }
                        acc.chars += segment.chars().count();
                    }
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(acc) = block.as_mut() {
                    acc.break_line(text_width_px);
                }
            }
            Event::Rule => {
                height += RULE_PX + BLOCK_SPACING_EM * DEFAULT_FONT_SIZE;
            }
            _ => {}
        }
    }

    height
}

/// Charge a partially filled block before a nested block begins. Empty
/// accumulators are dropped: loose items hand their text to the inner
/// paragraph.
fn flush_partial(block: &mut Option<BlockAcc>, height: &mut f64, width: f64) {
    if let Some(acc) = block.take() {
        if acc.chars > 0 || acc.lines > 0 {
            *height += acc.finish(width);
        }
    }
}

fn heading_em(level: HeadingLevel) -> f64 {
    match level {
        HeadingLevel::H1 => 2.0,
        HeadingLevel::H2 => 1.5,
        HeadingLevel::H3 => 1.17,
        _ => 1.0,
    }
}

/// Line accumulator for one block: completed lines plus the characters on
/// the line currently being filled.
struct BlockAcc {
    font_em: f64,
    chars: usize,
    lines: u32,
}

impl BlockAcc {
    fn new(font_em: f64) -> Self {
        Self {
            font_em,
            chars: 0,
            lines: 0,
        }
    }

    fn break_line(&mut self, width: f64) {
        self.lines += self.wrapped(width);
        self.chars = 0;
    }

    /// Lines the current segment wraps to. An empty segment still takes a
    /// line: a bare heading or a blank forced line has height.
    fn wrapped(&self, width: f64) -> u32 {
        let glyph_px = DEFAULT_FONT_SIZE * self.font_em * AVG_GLYPH_EM;
        let per_line = (width / glyph_px).max(1.0);
        ((self.chars as f64 / per_line).ceil() as u32).max(1)
    }

    fn finish(self, width: f64) -> f64 {
        let total = self.lines + self.wrapped(width);
        f64::from(total) * DEFAULT_FONT_SIZE * self.font_em * LINE_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Orientation;

    const WIDTH: f64 = 720.0; // letter width net of default margins

    #[test]
    fn empty_input_has_no_height() {
        assert_eq!(estimate_height("", WIDTH), 0.0);
    }

    #[test]
    fn short_paragraph_is_one_line() {
        let h = estimate_height("hello world", WIDTH);
        // one 24px line plus block spacing
        assert!(h > 20.0 && h < 60.0, "got {h}");
    }

    #[test]
    fn long_paragraph_wraps() {
        let long = "word ".repeat(200);
        let h = estimate_height(&long, WIDTH);
        // 1000 chars at ~90 per line is a dozen lines
        assert!(h > 200.0, "got {h}");
    }

    #[test]
    fn headings_are_taller_than_body_text() {
        let heading = estimate_height("# Title", WIDTH);
        let body = estimate_height("Title", WIDTH);
        assert!(heading > body);
    }

    #[test]
    fn line_breaks_add_lines() {
        let one = estimate_height("line one", WIDTH);
        let three = estimate_height("line one\nline two\nline three", WIDTH);
        assert!(three > one * 2.0, "one={one} three={three}");
    }

    #[test]
    fn list_items_each_take_a_line() {
        let h = estimate_height("- a\n- b\n- c\n- d", WIDTH);
        // four 24px item lines plus list spacing
        assert!(h >= 96.0, "got {h}");
    }

    #[test]
    fn nested_list_keeps_the_parent_item_line() {
        let nested = estimate_height("- parent\n  - child", WIDTH);
        let flat = estimate_height("- parent\n- child", WIDTH);
        // both items contribute a line; nesting never measures shorter
        assert!(nested >= flat, "nested={nested} flat={flat}");
    }

    #[test]
    fn outline_items_each_take_a_line() {
        let h = estimate_height("- a\n  - b\n    - c\n- d", WIDTH);
        // four 24px item lines plus list spacing
        assert!(h >= 96.0, "got {h}");
    }

    #[test]
    fn pasted_bullet_glyphs_measure_as_lists() {
        let glyphs = estimate_height("• a\n• b\n• c", WIDTH);
        let dashes = estimate_height("- a\n- b\n- c", WIDTH);
        assert_eq!(glyphs, dashes);
    }

    #[test]
    fn more_content_never_measures_smaller() {
        let base = "Some paragraph text here.\n\nAnother paragraph.";
        let more = format!("{base}\n\nYet another paragraph of similar length.");
        assert!(estimate_height(&more, WIDTH) > estimate_height(base, WIDTH));
    }

    #[test]
    fn narrow_width_measures_taller() {
        let text = "a paragraph that is long enough to wrap at narrow widths ".repeat(4);
        assert!(estimate_height(&text, 300.0) > estimate_height(&text, 720.0));
    }

    #[test]
    fn reference_width_uses_resolved_orientation() {
        let portrait = LayoutConfig {
            page_width: 816.0,
            page_height: 1056.0,
            max_pages: 1,
            orientation: Orientation::Portrait,
            font_size_override: None,
        };
        let landscape = LayoutConfig {
            orientation: Orientation::Landscape,
            ..portrait.clone()
        };
        assert_eq!(reference_text_width(&portrait), 816.0 - 96.0);
        assert_eq!(reference_text_width(&landscape), 1056.0 - 96.0);
    }
}
