//! Borders drawn around region content.
//!
//! - **glyphs**: `Glyphs`, the line-drawing character sets
//! - **decoration**: `Border`, per-region edge switches, title and caption
//!
//! # Layout
//!
//! ```text
//! l q Title q q q q q k      top:    tl (if left) + horizontal × width + tr (if right)
//! x content . . . . . x      rows:   left + row[..width] + right
//! m q q q q q Caption j      bottom: bl (if left) + horizontal × width + br (if right)
//! ```
//!
//! Width shrinks by 2, 1 or 0 depending on how many of left/right are on;
//! height likewise for top/bottom.

pub mod decoration;
pub mod glyphs;

pub use decoration::Border;
pub use glyphs::Glyphs;
