//! Border - box drawing composited around a region's content

use unicode_width::UnicodeWidthChar;

use super::glyphs::Glyphs;
use crate::buffer::{Cell, Charset, Row};
use crate::colour::{Colour, Style};
use crate::registry::Model;

/// Per-region border configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    name: String,
    /// Master switch; when false the content passes through untouched
    pub enabled: bool,
    pub show_top: bool,
    pub show_bottom: bool,
    pub show_left: bool,
    pub show_right: bool,
    pub glyphs: Glyphs,
    /// Left-aligned within the top edge
    pub title: String,
    /// Right-aligned within the bottom edge
    pub caption: String,
    pub colour: Colour,
    pub style: Style,
}

impl Border {
    /// A disabled border with every edge switched on.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: false,
            show_top: true,
            show_bottom: true,
            show_left: true,
            show_right: true,
            glyphs: Glyphs::default(),
            title: String::new(),
            caption: String::new(),
            colour: Colour::default(),
            style: Style::empty(),
        }
    }

    /// An enabled border on all four edges.
    pub fn enabled(name: impl Into<String>) -> Self {
        Self {
            enabled: true,
            ..Self::new(name)
        }
    }

    fn top(&self) -> bool {
        self.enabled && self.show_top
    }

    fn bottom(&self) -> bool {
        self.enabled && self.show_bottom
    }

    fn left(&self) -> bool {
        self.enabled && self.show_left
    }

    fn right(&self) -> bool {
        self.enabled && self.show_right
    }

    /// Usable content width inside a region `width` columns wide.
    pub fn content_width(&self, width: u16) -> u16 {
        width.saturating_sub(edges(self.left(), self.right()))
    }

    /// Usable content height inside a region `height` rows tall.
    pub fn content_height(&self, height: u16) -> u16 {
        height.saturating_sub(edges(self.top(), self.bottom()))
    }

    /// Surround `rows` with the enabled edges.
    ///
    /// Rows are cropped to the content area of a `width` x `height` region;
    /// a disabled border returns them unmodified.
    pub fn decorate(&self, rows: Vec<Row>, width: u16, height: u16) -> Vec<Row> {
        if !self.enabled {
            return rows;
        }

        let inner_width = self.content_width(width) as usize;
        let inner_height = self.content_height(height) as usize;
        let mut out = Vec::with_capacity(inner_height + 2);

        if self.top() {
            out.push(self.edge_row(
                &self.glyphs.top_left,
                &self.glyphs.top_right,
                &self.title,
                Align::Left,
                inner_width,
            ));
        }

        for line in rows.into_iter().take(inner_height) {
            let mut row = Vec::with_capacity(inner_width + 2);
            if self.left() {
                row.push(self.glyph(&self.glyphs.vertical));
            }
            row.extend(line.into_iter().take(inner_width));
            if self.right() {
                row.push(self.glyph(&self.glyphs.vertical));
            }
            out.push(row);
        }

        if self.bottom() {
            out.push(self.edge_row(
                &self.glyphs.bottom_left,
                &self.glyphs.bottom_right,
                &self.caption,
                Align::Right,
                inner_width,
            ));
        }

        out
    }

    fn glyph(&self, glyph: &str) -> Cell {
        match self.glyphs.charset() {
            Charset::Semigraphic => Cell::semigraphic(glyph, self.colour.clone(), self.style),
            Charset::Standard => Cell::styled(glyph, self.colour.clone(), self.style),
        }
    }

    /// Corners, horizontal fill, and an optional label over the fill.
    fn edge_row(&self, left: &str, right: &str, label: &str, align: Align, width: usize) -> Row {
        let (label, columns) = self.label(label, width);
        let start = match align {
            _ if label.is_empty() => width,
            Align::Left => 1,
            Align::Right => width - 1 - columns,
        };

        let mut row = Vec::with_capacity(width + 2);
        if self.left() {
            row.push(self.glyph(left));
        }
        row.extend((0..start).map(|_| self.glyph(&self.glyphs.horizontal)));
        row.extend(label);
        row.extend((start + columns..width).map(|_| self.glyph(&self.glyphs.horizontal)));
        if self.right() {
            row.push(self.glyph(right));
        }
        row
    }

    /// ` label ` as cells and the columns they cover, truncated to leave one
    /// fill glyph on each side.
    fn label(&self, text: &str, width: usize) -> (Vec<Cell>, usize) {
        if text.is_empty() || width < 3 {
            return (Vec::new(), 0);
        }
        let budget = width - 2;
        let mut cells = Vec::new();
        let mut columns = 0;
        for ch in format!(" {} ", text).chars() {
            let Some(ch_width) = ch.width().filter(|w| *w > 0) else {
                continue;
            };
            if columns + ch_width > budget {
                break;
            }
            cells.push(Cell::styled(ch.to_string(), self.colour.clone(), self.style));
            columns += ch_width;
        }
        (cells, columns)
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn edges(first: bool, second: bool) -> u16 {
    u16::from(first) + u16::from(second)
}

impl Model for Border {
    const KIND: &'static str = "border";

    fn name(&self) -> &str {
        &self.name
    }
}
