//! Colour pairs and full cell presentation

use serde::{Deserialize, Serialize};

use super::style::Style;
use super::translator::{ColourMode, ColourTranslator};

/// Reset all SGR state
pub const RESET: &str = "\x1b[0m";

/// A foreground/background pair of raw colour specifications
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Colour {
    pub foreground: String,
    pub background: String,
}

impl Colour {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    pub fn foreground(spec: impl Into<String>) -> Self {
        Self::new(spec, "")
    }

    pub fn background(spec: impl Into<String>) -> Self {
        Self::new("", spec)
    }

    pub fn is_empty(&self) -> bool {
        self.foreground.trim().is_empty() && self.background.trim().is_empty()
    }
}

/// Both colour translators, sharing one colour mode.
#[derive(Debug)]
pub struct Palette {
    pub foreground: ColourTranslator,
    pub background: ColourTranslator,
}

impl Palette {
    pub fn new(mode: ColourMode) -> Self {
        Self {
            foreground: ColourTranslator::foreground(mode),
            background: ColourTranslator::background(mode),
        }
    }

    pub fn mode(&self) -> ColourMode {
        self.foreground.mode()
    }

    pub fn set_mode(&mut self, mode: ColourMode) {
        self.foreground.set_mode(mode);
        self.background.set_mode(mode);
    }

    /// Foreground escape followed by background escape.
    pub fn colour(&mut self, colour: &Colour) -> String {
        let mut out = self.foreground.escape_sequence(&colour.foreground);
        out.push_str(&self.background.escape_sequence(&colour.background));
        out
    }

    /// Absolute presentation for a cell: reset, colours, then style.
    ///
    /// Starting from a reset makes the sequence independent of whatever the
    /// terminal was showing before.
    pub fn presentation(&mut self, colour: &Colour, style: Style) -> String {
        let mut out = String::from(RESET);
        out.push_str(&self.colour(colour));
        out.push_str(&style.escape_sequence());
        out
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColourMode::default())
    }
}
