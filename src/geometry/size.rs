//! Terminal size collaborators

use std::cell::Cell;
use std::rc::Rc;

use crossterm::terminal;

/// Answers "how big is the screen right now".
pub trait TerminalSize {
    /// Current `(width, height)` in cells.
    fn size(&self) -> (u16, u16);
}

impl<T: TerminalSize + ?Sized> TerminalSize for Rc<T> {
    fn size(&self) -> (u16, u16) {
        (**self).size()
    }
}

/// Queries the real terminal through crossterm.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermSize {
    /// Used when the terminal cannot be queried (e.g. output is piped)
    fallback: (u16, u16),
}

impl CrosstermSize {
    pub fn new(fallback_width: u16, fallback_height: u16) -> Self {
        Self {
            fallback: (fallback_width, fallback_height),
        }
    }
}

impl TerminalSize for CrosstermSize {
    fn size(&self) -> (u16, u16) {
        match terminal::size() {
            Ok((0, _)) | Ok((_, 0)) | Err(_) => self.fallback,
            Ok(size) => size,
        }
    }
}

/// A size that only changes when told to; used by tests and headless output.
#[derive(Debug, Clone)]
pub struct FixedSize {
    size: Cell<(u16, u16)>,
}

impl FixedSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Cell::new((width, height)),
        }
    }

    pub fn set(&self, width: u16, height: u16) {
        self.size.set((width, height));
    }
}

impl TerminalSize for FixedSize {
    fn size(&self) -> (u16, u16) {
        self.size.get()
    }
}
