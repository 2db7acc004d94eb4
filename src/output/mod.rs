//! Output pipeline: from buffered content to terminal bytes.
//!
//! - **viewport**: fits a generation into its region, adds the border and
//!   assigns screen positions
//! - **compressor**: serializes positioned rows, eliding redundant escapes
//! - **refresh**: addressing modes (all, by group, by focus, by name)
//! - **writer**: `TerminalWriter` collaborators (crossterm, in-memory)
//!
//! # Data Flow
//!
//! ```text
//! Refresh ─→ Screen::render_buffer(name)
//!              ├─ Buffer::render()          (rotate, pick generation)
//!              ├─ Viewport::rows()          (crop/pad, Border, positions)
//!              ├─ Compressor::compress()    (minimal escapes)
//!              └─ TerminalWriter::write()
//! ```

pub mod compressor;
pub mod refresh;
pub mod viewport;
pub mod writer;

pub use compressor::Compressor;
pub use refresh::Refresh;
pub use viewport::Viewport;
pub use writer::{Capture, CrosstermTerminal, TerminalWriter};
