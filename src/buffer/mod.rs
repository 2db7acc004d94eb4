//! Region content and its generations.
//!
//! - **content**: `Cell`, `Position`, `Charset` and `Content` (one generation)
//! - **slots**: `Buffer`, the back/front/previous slot store
//!
//! # Generations
//!
//! ```text
//! add(c)  ──→ [back]
//! render  ──→ [back] ─→ [front] ─→ [previous]     (rotation, back non-empty)
//!             draws front, else previous, else nothing
//! ```

pub mod content;
pub mod slots;

pub use content::{Cell, Charset, Content, Position, Row};
pub use slots::Buffer;
