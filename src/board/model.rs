use crate::foundation::error::{KinotypeError, KinotypeResult};

/// The phrase displayed on screen, one letter element per char.
///
/// Letter identity is the char index into the phrase. Whitespace chars
/// are separators: they occupy an index but have no glyph and never
/// take part in layout or matching.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LetterBoard {
    /// The phrase text.
    pub text: String,
    /// Font size of the letter elements, in pixels.
    pub font_size: f32,
    /// Wrap width of the board in pixels, or `None` for a single line.
    pub max_width: Option<f32>,
}

impl LetterBoard {
    /// Build a board over a phrase.
    pub fn new(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            max_width: None,
        }
    }

    /// Number of letter elements (chars) on the board.
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Indices of separator (whitespace) chars, ascending.
    pub fn excluded_indices(&self) -> Vec<usize> {
        self.text
            .chars()
            .enumerate()
            .filter(|(_, c)| c.is_whitespace())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether an index is a glyph letter rather than a separator.
    pub fn is_glyph(&self, index: usize) -> bool {
        self.text
            .chars()
            .nth(index)
            .is_some_and(|c| !c.is_whitespace())
    }

    /// Reject empty or degenerate boards.
    pub fn validate(&self) -> KinotypeResult<()> {
        if self.text.is_empty() {
            return Err(KinotypeError::validation("board text must be non-empty"));
        }
        if self.text.chars().all(char::is_whitespace) {
            return Err(KinotypeError::validation(
                "board text must contain at least one glyph char",
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(KinotypeError::validation(
                "board font_size must be finite and > 0",
            ));
        }
        if let Some(w) = self.max_width
            && (!w.is_finite() || w <= 0.0)
        {
            return Err(KinotypeError::validation(
                "board max_width must be finite and > 0 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/model.rs"]
mod tests;
