//! Compressor - serializes positioned rows into terminal bytes
//!
//! Works like a line buffer: glyphs accumulate until the cursor has to jump
//! or the presentation changes, and only then is an escape emitted.

use crate::buffer::{Cell, Charset, Position, Row};
use crate::colour::{Colour, Palette, Style, RESET};

/// Enter the DEC special graphics set
pub const SEMIGRAPHIC_ON: &str = "\x1b(0";
/// Back to the standard (ASCII) set
pub const SEMIGRAPHIC_OFF: &str = "\x1b(B";

/// Turns rows of cells into a terminal payload.
pub struct Compressor<'a> {
    palette: &'a mut Palette,
}

impl<'a> Compressor<'a> {
    pub fn new(palette: &'a mut Palette) -> Self {
        Self { palette }
    }

    /// Minimal output: cursor moves only where the next cell is not where the
    /// cursor already is, presentation only where it differs from the
    /// previous cell, charset switches only at the edges of a glyph run.
    pub fn compress(&mut self, rows: &[Row]) -> String {
        let mut out = String::with_capacity(rows.len() * 64);
        let mut cursor: Option<Position> = None;
        let mut last: Option<(&Colour, Style)> = None;
        let mut charset = Charset::Standard;

        for cell in rows.iter().flatten() {
            if let Some(position) = cell.position {
                if cursor != Some(position) {
                    out.push_str(&position.escape_sequence());
                }
            }
            cursor = cell
                .position
                .or(cursor)
                .map(|position| position.advance(cell.width()));

            if last != Some((&cell.colour, cell.style)) {
                out.push_str(&self.palette.presentation(&cell.colour, cell.style));
                last = Some((&cell.colour, cell.style));
            }

            if cell.charset != charset {
                out.push_str(charset_switch(cell.charset));
                charset = cell.charset;
            }
            out.push_str(&cell.value);
        }

        if charset != Charset::Standard {
            out.push_str(SEMIGRAPHIC_OFF);
        }
        if last.is_some() {
            out.push_str(RESET);
        }
        out
    }

    /// Reference form: every cell carries its own position, presentation and
    /// charset wrapping.
    pub fn expand(&mut self, rows: &[Row]) -> String {
        let mut out = String::new();
        for cell in rows.iter().flatten() {
            self.expand_cell(&mut out, cell);
        }
        if rows.iter().any(|row| !row.is_empty()) {
            out.push_str(RESET);
        }
        out
    }

    fn expand_cell(&mut self, out: &mut String, cell: &Cell) {
        if let Some(position) = cell.position {
            out.push_str(&position.escape_sequence());
        }
        out.push_str(&self.palette.presentation(&cell.colour, cell.style));
        match cell.charset {
            Charset::Standard => out.push_str(&cell.value),
            Charset::Semigraphic => {
                out.push_str(SEMIGRAPHIC_ON);
                out.push_str(&cell.value);
                out.push_str(SEMIGRAPHIC_OFF);
            }
        }
    }
}

fn charset_switch(charset: Charset) -> &'static str {
    match charset {
        Charset::Standard => SEMIGRAPHIC_OFF,
        Charset::Semigraphic => SEMIGRAPHIC_ON,
    }
}
