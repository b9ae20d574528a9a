use std::ops::Range;

use crate::board::model::LetterBoard;
use crate::foundation::core::Rect;
use crate::foundation::error::{KinotypeError, KinotypeResult};

/// Resolves letter indices to glyph bounding boxes in board-local
/// coordinates (origin at the board's top-left).
///
/// Returns one slot per char of the board text; separators and glyphs
/// the engine could not resolve are `None`.
pub trait GlyphMetrics {
    /// Measure every letter of a board.
    fn measure(&mut self, board: &LetterBoard) -> KinotypeResult<Vec<Option<Rect>>>;
}

/// Brush placeholder for measurement-only Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphBrush;

/// Parley-backed glyph measurement over raw font bytes.
///
/// Shaping assumptions: plain left-to-right text with one glyph per
/// char. Complex scripts and ligatures are out of scope for the board
/// phrase.
pub struct ParleyGlyphMetrics {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<GlyphBrush>,
    family_name: String,
}

impl ParleyGlyphMetrics {
    /// Construct a measurement engine over the board font. The font is
    /// registered once; the first family it provides is used for every
    /// measurement.
    pub fn new(font_bytes: Vec<u8>) -> KinotypeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            KinotypeError::layout("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| KinotypeError::layout("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    fn build_layout(&mut self, board: &LetterBoard) -> parley::Layout<GlyphBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &board.text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(board.font_size));

        let mut layout: parley::Layout<GlyphBrush> = builder.build(&board.text);
        if let Some(w) = board.max_width {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        layout
    }
}

impl GlyphMetrics for ParleyGlyphMetrics {
    fn measure(&mut self, board: &LetterBoard) -> KinotypeResult<Vec<Option<Rect>>> {
        board.validate()?;
        let layout = self.build_layout(board);

        let byte_to_char = byte_to_char_index(&board.text);
        let mut boxes: Vec<Option<Rect>> = vec![None; board.letter_count()];

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let run = glyph_run.run();
                let metrics = run.metrics();
                let ascent = f64::from(metrics.ascent);
                let descent = f64::from(metrics.descent);

                // One glyph per char within the run's text range.
                let Range { start, .. } = run.text_range();
                let base = char_index_at(&byte_to_char, start);

                for (offset, glyph) in glyph_run.glyphs().enumerate() {
                    let idx = base + offset;
                    if idx >= boxes.len() || !board.is_glyph(idx) {
                        continue;
                    }
                    let x0 = f64::from(glyph.x);
                    let y_baseline = f64::from(glyph.y);
                    boxes[idx] = Some(Rect::new(
                        x0,
                        y_baseline - ascent,
                        x0 + f64::from(glyph.advance),
                        y_baseline + descent,
                    ));
                }
            }
        }

        Ok(boxes)
    }
}

/// Deterministic monospace grid metrics: every glyph occupies a fixed
/// cell on a single line. Used headless and in tests where no font is
/// available.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixedGridMetrics {
    /// Horizontal advance of each cell, in pixels.
    pub advance: f64,
    /// Cell height, in pixels.
    pub height: f64,
}

impl GlyphMetrics for FixedGridMetrics {
    fn measure(&mut self, board: &LetterBoard) -> KinotypeResult<Vec<Option<Rect>>> {
        board.validate()?;
        if !self.advance.is_finite() || self.advance <= 0.0 {
            return Err(KinotypeError::validation(
                "grid advance must be finite and > 0",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(KinotypeError::validation(
                "grid height must be finite and > 0",
            ));
        }

        let boxes = (0..board.letter_count())
            .map(|i| {
                board.is_glyph(i).then(|| {
                    let x0 = i as f64 * self.advance;
                    Rect::new(x0, 0.0, x0 + self.advance, self.height)
                })
            })
            .collect();
        Ok(boxes)
    }
}

fn byte_to_char_index(text: &str) -> Vec<(usize, usize)> {
    text.char_indices()
        .enumerate()
        .map(|(char_idx, (byte_idx, _))| (byte_idx, char_idx))
        .collect()
}

fn char_index_at(map: &[(usize, usize)], byte_idx: usize) -> usize {
    match map.binary_search_by_key(&byte_idx, |(b, _)| *b) {
        Ok(i) => map[i].1,
        Err(i) => i.saturating_sub(1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/glyphs.rs"]
mod tests;
