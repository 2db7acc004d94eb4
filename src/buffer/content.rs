//! Content - cells and rows making up one generation of a region

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::colour::{Colour, Style};

/// A 1-based screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: u16,
    pub x: u16,
}

impl Position {
    pub const fn new(y: u16, x: u16) -> Self {
        Self { y, x }
    }

    /// CUP sequence moving the cursor here
    pub fn escape_sequence(&self) -> String {
        format!("\x1b[{};{}H", self.y, self.x)
    }

    /// The position `width` columns to the right.
    pub fn advance(&self, width: u16) -> Self {
        Self::new(self.y, self.x.saturating_add(width))
    }
}

/// Character set a glyph is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    #[default]
    Standard,
    /// The DEC special graphics (line drawing) set
    Semigraphic,
}

/// One glyph with its presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// A single grapheme (base character plus any combining marks)
    pub value: String,
    pub colour: Colour,
    pub style: Style,
    pub charset: Charset,
    /// Screen position, assigned when content is placed in a viewport
    pub position: Option<Position>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            colour: Colour::default(),
            style: Style::empty(),
            charset: Charset::Standard,
            position: None,
        }
    }

    pub fn styled(value: impl Into<String>, colour: Colour, style: Style) -> Self {
        Self {
            colour,
            style,
            ..Self::new(value)
        }
    }

    /// A space in the given presentation.
    pub fn blank(colour: &Colour, style: Style) -> Self {
        Self::styled(" ", colour.clone(), style)
    }

    /// A line-drawing glyph.
    pub fn semigraphic(glyph: impl Into<String>, colour: Colour, style: Style) -> Self {
        Self {
            charset: Charset::Semigraphic,
            ..Self::styled(glyph, colour, style)
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Display width in columns (at least 1).
    pub fn width(&self) -> u16 {
        UnicodeWidthStr::width(self.value.as_str()).clamp(1, 2) as u16
    }

    /// Whether two cells would be drawn with identical escape state.
    pub fn same_presentation(&self, other: &Cell) -> bool {
        self.colour == other.colour && self.style == other.style
    }
}

pub type Row = Vec<Cell>;

/// One generation of a region's visual content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    rows: Vec<Row>,
}

impl Content {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build content from text lines, one row per line.
    ///
    /// Zero-width characters (combining marks) are attached to the preceding
    /// cell rather than occupying a cell of their own. Control characters
    /// (tabs, escapes) become a blank so nothing moves the terminal cursor.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], colour: &Colour, style: Style) -> Self {
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Row = Vec::new();
                for ch in line.as_ref().chars() {
                    match ch.width() {
                        None => row.push(Cell::blank(colour, style)),
                        Some(0) => {
                            if let Some(cell) = row.last_mut() {
                                cell.value.push(ch);
                            }
                        }
                        Some(_) => row.push(Cell::styled(ch.to_string(), colour.clone(), style)),
                    }
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// A `width` x `height` block of blank cells.
    pub fn blank(width: u16, height: u16, colour: &Colour, style: Style) -> Self {
        let row: Row = (0..width).map(|_| Cell::blank(colour, style)).collect();
        Self {
            rows: vec![row; height as usize],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// No rows, or only empty rows.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Plain text of each row, without escapes.
    pub fn text(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.value.as_str()).collect())
            .collect()
    }
}

impl From<Vec<Row>> for Content {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines() {
        let content = Content::from_lines(&["ab", "c"], &Colour::foreground("red"), Style::BOLD);
        assert_eq!(content.height(), 2);
        assert_eq!(content.width(), 2);
        assert_eq!(content.text(), vec!["ab".to_string(), "c".to_string()]);
        assert_eq!(content.rows()[0][0].colour.foreground, "red");
        assert_eq!(content.rows()[1][0].style, Style::BOLD);
    }

    #[test]
    fn test_combining_marks_join_previous_cell() {
        let content = Content::from_lines(&["e\u{301}x"], &Colour::default(), Style::empty());
        assert_eq!(content.rows()[0].len(), 2);
        assert_eq!(content.rows()[0][0].value, "e\u{301}");
        assert_eq!(content.rows()[0][0].width(), 1);
    }

    #[test]
    fn test_control_characters_become_blanks() {
        let content = Content::from_lines(
            &["a\tb", "\tx", "p\x1b[2Jq"],
            &Colour::default(),
            Style::empty(),
        );
        assert_eq!(
            content.text(),
            vec!["a b".to_string(), " x".to_string(), "p [2Jq".to_string()]
        );
        assert!(content
            .rows()
            .iter()
            .flatten()
            .all(|cell| !cell.value.chars().any(char::is_control)));
    }

    #[test]
    fn test_wide_cell_width() {
        assert_eq!(Cell::new("漢").width(), 2);
        assert_eq!(Cell::new("a").width(), 1);
    }

    #[test]
    fn test_emptiness() {
        assert!(Content::empty().is_empty());
        assert!(Content::new(vec![Vec::new(), Vec::new()]).is_empty());
        assert!(!Content::from_lines(&["x"], &Colour::default(), Style::empty()).is_empty());
    }

    #[test]
    fn test_blank() {
        let content = Content::blank(3, 2, &Colour::background("blue"), Style::empty());
        assert_eq!(content.text(), vec!["   ".to_string(), "   ".to_string()]);
        assert_eq!(content.rows()[1][2].colour.background, "blue");
    }

    #[test]
    fn test_position() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.escape_sequence(), "\x1b[3;7H");
        assert_eq!(pos.advance(2), Position::new(3, 9));
    }
}
