//! Colour and style translation into ANSI escape sequences.
//!
//! - **translator**: `ColourTranslator`, the memoizing spec → escape resolver
//! - **presentation**: `Colour` (foreground/background pair) and `Palette`,
//!   which resolves a cell's full presentation
//! - **style**: `Style` attribute flags
//!
//! # Resolution Order
//!
//! ```text
//! spec ─→ cached? ──yes──→ cached escape
//!          │no
//!          ├─ "#rrggbb" ─→ truecolor? ─→ 38;2;r;g;b  (cached)
//!          │                   └──────→ 38;5;16+36r+6g+b (cached)
//!          ├─ "0".."255" ─→ 38;5;n
//!          ├─ named ─────→ 30..37, 39, 90..97
//!          └─ otherwise ─→ "" (no colour change)
//! ```

pub mod presentation;
pub mod style;
pub mod translator;

pub use presentation::{Colour, Palette, RESET};
pub use style::Style;
pub use translator::{ColourMode, ColourTranslator, Layer, Translation};
