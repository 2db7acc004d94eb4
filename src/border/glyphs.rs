//! Border glyph sets

use serde::{Deserialize, Serialize};

use crate::buffer::Charset;

/// Line-drawing characters used for a border
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub horizontal: String,
    pub vertical: String,
}

impl Glyphs {
    /// DEC special graphics codes; drawn as ┌ ┐ └ ┘ ─ │ inside the
    /// semigraphic charset.
    pub fn dec() -> Self {
        Self::from_chars(['l', 'k', 'm', 'j', 'q', 'x'])
    }

    /// Unicode box drawing characters
    pub fn unicode() -> Self {
        Self::from_chars(['┌', '┐', '└', '┘', '─', '│'])
    }

    /// Plain ASCII for terminals without line drawing support
    pub fn ascii() -> Self {
        Self::from_chars(['+', '+', '+', '+', '-', '|'])
    }

    /// Get glyph set by name; unknown names fall back to `dec`.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "unicode" | "single" => Self::unicode(),
            "ascii" => Self::ascii(),
            _ => Self::dec(),
        }
    }

    /// DEC line-drawing codes (`` ` `` to `~`) must be drawn from the
    /// semigraphic charset; anything else is printed as is.
    pub fn charset(&self) -> Charset {
        let dec = [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
            &self.horizontal,
            &self.vertical,
        ]
        .iter()
        .all(|glyph| {
            let mut chars = glyph.chars();
            matches!((chars.next(), chars.next()), (Some('`'..='~'), None))
        });

        if dec {
            Charset::Semigraphic
        } else {
            Charset::Standard
        }
    }

    fn from_chars([tl, tr, bl, br, h, v]: [char; 6]) -> Self {
        Self {
            top_left: tl.to_string(),
            top_right: tr.to_string(),
            bottom_left: bl.to_string(),
            bottom_right: br.to_string(),
            horizontal: h.to_string(),
            vertical: v.to_string(),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::dec()
    }
}
