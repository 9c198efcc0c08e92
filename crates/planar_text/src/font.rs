//! Bitmap font measurement
//!
//! Pure arithmetic over precomputed glyph metrics. Rendering and texture
//! management live elsewhere; this type only answers "how big is this
//! string".

use std::collections::HashMap;
use std::fmt;

use planar_math::{Rect, Size, Vec2};

use crate::region::FontRegion;

/// A bitmap font: a glyph table plus line metrics
pub struct BitmapFont {
    name: String,
    line_height: i32,
    letter_spacing: i32,
    regions: HashMap<u32, FontRegion>,
}

impl BitmapFont {
    /// Create a font from its glyph regions
    pub fn new(
        name: impl Into<String>,
        regions: impl IntoIterator<Item = FontRegion>,
        line_height: i32,
    ) -> Self {
        Self {
            name: name.into(),
            line_height,
            letter_spacing: 0,
            regions: regions.into_iter().map(|r| (r.character, r)).collect(),
        }
    }

    /// Set the extra spacing inserted between glyphs
    pub fn with_letter_spacing(mut self, letter_spacing: i32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    pub fn letter_spacing(&self) -> i32 {
        self.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: i32) {
        self.letter_spacing = letter_spacing;
    }

    /// Look up the glyph metrics for a codepoint
    pub fn region(&self, codepoint: u32) -> Option<&FontRegion> {
        self.regions.get(&codepoint)
    }

    /// Measure the pixel extent of a single line of text
    ///
    /// Every glyph but the last contributes its advance plus letter
    /// spacing; the last contributes its offset plus bitmap width, so the
    /// result is the inked extent rather than the final pen position.
    /// Codepoints without a glyph are skipped. Height is the tallest
    /// `height + y_offset` over the measured glyphs.
    pub fn measure(&self, text: &str) -> Size {
        let mut width = 0;
        let mut height = 0;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if let Some(region) = self.regions.get(&(c as u32)) {
                if chars.peek().is_some() {
                    width += region.x_advance + self.letter_spacing;
                } else {
                    width += region.x_offset + region.width;
                }
                height = height.max(region.height + region.y_offset);
            }
        }

        Size::new(width, height)
    }

    /// The rectangle a string occupies when drawn at `position`
    pub fn string_rect(&self, text: &str, position: Vec2) -> Rect {
        let size = self.measure(text);
        Rect::new(position.x as i32, position.y as i32, size.width, size.height)
    }
}

impl fmt::Display for BitmapFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
