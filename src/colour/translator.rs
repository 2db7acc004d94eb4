//! Colour translator - CSS, indexed and named colours to escape sequences

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Colour depth supported by the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColourMode {
    #[serde(rename = "16")]
    Sixteen,
    #[default]
    #[serde(rename = "256")]
    Indexed,
    #[serde(rename = "truecolor", alias = "24bit", alias = "16777216")]
    Truecolor,
}

impl ColourMode {
    pub fn supports_truecolor(&self) -> bool {
        matches!(self, ColourMode::Truecolor)
    }
}

/// Which half of a colour pair is being set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Extended colour prefix (`38;` or `48;`)
    fn prefix(&self) -> &'static str {
        match self {
            Layer::Foreground => "\x1b[38;",
            Layer::Background => "\x1b[48;",
        }
    }

    fn named_code(&self, name: &str) -> Option<u8> {
        let base = match name.to_lowercase().replace('-', "_").as_str() {
            "black" => 30,
            "red" => 31,
            "green" => 32,
            "yellow" => 33,
            "blue" => 34,
            "magenta" => 35,
            "cyan" => 36,
            "light_grey" | "light_gray" => 37,
            "default" => 39,
            "dark_grey" | "dark_gray" => 90,
            "light_red" => 91,
            "light_green" => 92,
            "light_yellow" => 93,
            "light_blue" => 94,
            "light_magenta" => 95,
            "light_cyan" => 96,
            "white" => 97,
            _ => return None,
        };
        Some(match self {
            Layer::Foreground => base,
            Layer::Background => base + 10,
        })
    }
}

/// The outcome of resolving one colour specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    spec: String,
    escape: String,
    css: bool,
}

impl Translation {
    fn new(spec: &str, escape: String, css: bool) -> Self {
        Self {
            spec: spec.to_string(),
            escape,
            css,
        }
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The escape sequence; empty means "no colour change".
    pub fn escape_sequence(&self) -> &str {
        &self.escape
    }

    /// The CSS string for CSS specs, empty otherwise.
    pub fn to_html(&self) -> &str {
        if self.css {
            &self.spec
        } else {
            ""
        }
    }

    pub fn is_empty(&self) -> bool {
        self.escape.is_empty()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape)
    }
}

/// Resolves colour specifications for one layer, memoizing CSS conversions.
#[derive(Debug)]
pub struct ColourTranslator {
    layer: Layer,
    mode: ColourMode,
    /// CSS spec → escape sequence
    cache: HashMap<String, String>,
    /// Number of CSS conversions actually computed
    conversions: usize,
}

impl ColourTranslator {
    pub fn new(layer: Layer, mode: ColourMode) -> Self {
        Self {
            layer,
            mode,
            cache: HashMap::new(),
            conversions: 0,
        }
    }

    pub fn foreground(mode: ColourMode) -> Self {
        Self::new(Layer::Foreground, mode)
    }

    pub fn background(mode: ColourMode) -> Self {
        Self::new(Layer::Background, mode)
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Change the colour depth; cached escapes were computed for the old
    /// depth and are dropped.
    pub fn set_mode(&mut self, mode: ColourMode) {
        if self.mode != mode {
            self.mode = mode;
            self.cache.clear();
        }
    }

    /// Resolve a specification. Never fails: unrecognised input resolves to
    /// an empty escape.
    pub fn resolve(&mut self, spec: &str) -> Translation {
        let spec = spec.trim();
        if spec.is_empty() {
            return Translation::new(spec, String::new(), false);
        }

        if let Some(escape) = self.cache.get(spec) {
            return Translation::new(spec, escape.clone(), true);
        }

        if let Some(rgb) = css_to_rgb(spec) {
            let escape = self.rgb(rgb);
            self.conversions += 1;
            debug!(spec, layer = ?self.layer, "Registered colour");
            self.cache.insert(spec.to_string(), escape.clone());
            return Translation::new(spec, escape, true);
        }

        if let Ok(index) = spec.parse::<u16>() {
            if let Ok(index) = u8::try_from(index) {
                return Translation::new(spec, self.numbered(index), false);
            }
        }

        if let Some(code) = self.layer.named_code(spec) {
            return Translation::new(spec, format!("\x1b[{}m", code), false);
        }

        warn!(spec, "Unrecognised colour, ignoring");
        Translation::new(spec, String::new(), false)
    }

    /// Shorthand for `resolve(spec).escape_sequence()`.
    pub fn escape_sequence(&mut self, spec: &str) -> String {
        self.resolve(spec).escape
    }

    pub fn is_registered(&self, spec: &str) -> bool {
        self.cache.contains_key(spec.trim())
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn conversions(&self) -> usize {
        self.conversions
    }

    fn rgb(&self, (r, g, b): (u8, u8, u8)) -> String {
        if self.mode.supports_truecolor() {
            format!("{}2;{};{};{}m", self.layer.prefix(), r, g, b)
        } else {
            self.numbered(rgb_to_indexed(r, g, b))
        }
    }

    fn numbered(&self, index: u8) -> String {
        format!("{}5;{}m", self.layer.prefix(), index)
    }
}

/// Parse `#rrggbb`.
pub fn css_to_rgb(spec: &str) -> Option<(u8, u8, u8)> {
    let hex = spec.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Per-channel cube level, 0..=5. Linear integer division, not rounding.
pub fn levels(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    (r / 51, g / 51, b / 51)
}

/// Index into the 216-colour cube that follows the 16 base colours.
pub fn rgb_to_indexed(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = levels(r, g, b);
    16 + 36 * r + 6 * g + b
}
