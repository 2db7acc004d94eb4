//! Region geometry: where each interface sits on the character grid.
//!
//! - **area**: `Area`, a 1-based rectangle with derived bounds and clamping
//! - **placement**: `Geometry`, the registry model (maximise, movement)
//! - **size**: terminal size collaborators (`TerminalSize`)
//!
//! # Coordinates
//!
//! ```text
//! (1,1) ─────────────── x ──→
//!   │   (x,y) ┌────────┐
//!   │         │ width  │ height
//!   y         └────────┘ (xn,yn) = (x+width, y+height)
//!   ↓
//! ```

pub mod area;
pub mod placement;
pub mod size;

pub use area::Area;
pub use placement::{Direction, Geometry};
pub use size::{CrosstermSize, FixedSize, TerminalSize};
