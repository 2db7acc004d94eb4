//! termpane - a terminal rendering core for named regions
//!
//! termpane manages independently addressable rectangular regions
//! ("interfaces") on a character-grid terminal. Each interface keeps its
//! content across generations, gets a border and colours composited
//! around it, and is written to the terminal with as few escape sequences
//! as possible.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        wm::Screen                           │
//! │  ┌──────────┐ ┌──────────┐ ┌────────┐ ┌────────┐ ┌───────┐  │
//! │  │Interfaces│ │Geometries│ │Buffers │ │Borders │ │Groups │  │
//! │  └──────────┘ └──────────┘ └────────┘ └────────┘ └───────┘  │
//! │        registry::Registry<T>  (soft by_name / strict find)  │
//! │  Palette (colour) · EventBus · FocusRing · Visibility       │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ output::Refresh
//!                                ▼
//!        Buffer::render → Viewport (+Border) → Compressor
//!                                │
//!                                ▼
//!                     output::TerminalWriter
//! ```
//!
//! # Example
//!
//! ```
//! use termpane::buffer::Content;
//! use termpane::colour::{Colour, ColourMode, Style};
//! use termpane::geometry::{Area, FixedSize};
//! use termpane::output::Capture;
//! use termpane::wm::{Interface, Screen};
//!
//! let mut screen = Screen::new(Capture::new(), FixedSize::new(80, 24), ColourMode::Indexed);
//! screen.register(Interface::new("hello"), Area::new(1, 1, 20, 1)).unwrap();
//! screen.add("hello", Content::from_lines(&["Hello!"], &Colour::foreground("green"), Style::BOLD));
//! screen.refresh().by_name("hello").unwrap();
//! assert!(screen.writer().output().contains("Hello!"));
//! ```

pub mod border;
pub mod buffer;
pub mod colour;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod output;
pub mod registry;
pub mod wm;

pub use error::{Error, Result};
