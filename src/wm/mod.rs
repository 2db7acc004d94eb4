//! Window management - the named interfaces and the screen they live on.
//!
//! This module provides the runtime model the rendering core draws from:
//!
//! - **screen**: `Screen`, the context object owning every registry
//! - **interface**: `Interface`, a named region and its presentation
//! - **group**: `Group`, interfaces refreshed together
//! - **focus**: `FocusRing` (focus oracle)
//! - **visibility**: `Visibility` (visibility oracle)
//!
//! # Module Hierarchy
//!
//! ```text
//! wm/
//! ├── mod.rs         - Module exports
//! ├── screen.rs      - Screen (registries, palette, events, writer)
//! ├── interface.rs   - Interface (name, group, colour, style)
//! ├── group.rs       - Group (member names)
//! ├── focus.rs       - FocusRing
//! └── visibility.rs  - Visibility
//! ```

pub mod focus;
pub mod group;
pub mod interface;
pub mod screen;
pub mod visibility;

pub use focus::{FocusOracle, FocusRing};
pub use group::Group;
pub use interface::Interface;
pub use screen::Screen;
pub use visibility::{Visibility, VisibilityOracle};
