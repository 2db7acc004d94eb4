//! Viewport - fits a generation into its region and places it on screen

use crate::border::Border;
use crate::buffer::{Cell, Content, Position, Row};
use crate::colour::{Colour, Style};
use crate::geometry::Geometry;

/// The on-screen frame of one region: where it is, its border, and the
/// presentation used to pad short content.
pub struct Viewport<'a> {
    geometry: &'a Geometry,
    border: &'a Border,
    colour: &'a Colour,
    style: Style,
    /// Cells beyond the screen are dropped
    screen: (u16, u16),
}

impl<'a> Viewport<'a> {
    pub fn new(
        geometry: &'a Geometry,
        border: &'a Border,
        colour: &'a Colour,
        style: Style,
        screen: (u16, u16),
    ) -> Self {
        Self {
            geometry,
            border,
            colour,
            style,
            screen,
        }
    }

    /// Crop or pad `content` to the content area, surround it with the
    /// border and assign screen positions.
    pub fn rows(&self, content: &Content) -> Vec<Row> {
        let width = self.border.content_width(self.geometry.width());
        let height = self.border.content_height(self.geometry.height()) as usize;

        let mut rows: Vec<Row> = content
            .rows()
            .iter()
            .take(height)
            .map(|row| self.fit(row, width))
            .collect();
        while rows.len() < height {
            rows.push(self.fit(&[], width));
        }

        let decorated = self
            .border
            .decorate(rows, self.geometry.width(), self.geometry.height());
        self.place(decorated)
    }

    /// Blank cells over the whole region, border included.
    pub fn blank(&self) -> Vec<Row> {
        let content = Content::blank(
            self.geometry.width(),
            self.geometry.height(),
            &Colour::default(),
            Style::empty(),
        );
        self.place(content.into_rows())
    }

    /// Crop `row` to `width` columns and pad the remainder with blanks.
    ///
    /// A wide glyph that would straddle the right edge becomes a blank.
    fn fit(&self, row: &[Cell], width: u16) -> Row {
        let mut out = Vec::with_capacity(width as usize);
        let mut used = 0u16;
        for cell in row {
            let cell_width = cell.width();
            if used + cell_width > width {
                break;
            }
            out.push(cell.clone());
            used += cell_width;
        }
        while used < width {
            out.push(Cell::blank(self.colour, self.style));
            used += 1;
        }
        out
    }

    /// Position every cell from the geometry origin, clipping to both the
    /// region and the screen.
    fn place(&self, rows: Vec<Row>) -> Vec<Row> {
        let (screen_width, screen_height) = self.screen;
        let right = self
            .geometry
            .x()
            .saturating_add(self.geometry.width())
            .saturating_sub(1)
            .min(screen_width);
        rows.into_iter()
            .take(self.geometry.height() as usize)
            .enumerate()
            .filter_map(|(index, row)| {
                let y = self.geometry.y().saturating_add(index as u16);
                if y > screen_height {
                    return None;
                }
                let mut position = Position::new(y, self.geometry.x());
                let placed: Row = row
                    .into_iter()
                    .filter_map(|cell| {
                        let width = cell.width();
                        let at = position;
                        position = position.advance(width);
                        (at.x.saturating_add(width - 1) <= right).then(|| cell.at(at))
                    })
                    .collect();
                Some(placed)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Area;

    fn content(lines: &[&str]) -> Content {
        Content::from_lines(lines, &Colour::default(), Style::empty())
    }

    #[test]
    fn test_pads_and_positions() {
        let geometry = Geometry::new("main", Area::new(3, 2, 4, 2));
        let border = Border::new("main");
        let colour = Colour::background("blue");
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));

        let rows = viewport.rows(&content(&["ab"]));
        assert_eq!(Content::new(rows.clone()).text(), vec!["ab  ", "    "]);
        assert_eq!(rows[0][0].position, Some(Position::new(2, 3)));
        assert_eq!(rows[1][3].position, Some(Position::new(3, 6)));
        assert_eq!(rows[0][2].colour.background, "blue");
    }

    #[test]
    fn test_crops_to_content_area_inside_border() {
        let geometry = Geometry::new("main", Area::new(1, 1, 4, 3));
        let border = Border::enabled("main");
        let colour = Colour::default();
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));

        let rows = viewport.rows(&content(&["abcdef", "ghi"]));
        assert_eq!(Content::new(rows.clone()).text(), vec!["lqqk", "xabx", "mqqj"]);
        assert_eq!(rows[1][1].position, Some(Position::new(2, 2)));
    }

    #[test]
    fn test_wide_glyph_at_edge_becomes_blank() {
        let geometry = Geometry::new("main", Area::new(1, 1, 3, 1));
        let border = Border::new("main");
        let colour = Colour::default();
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));

        let rows = viewport.rows(&content(&["a漢字"]));
        assert_eq!(Content::new(rows.clone()).text(), vec!["a漢"]);
        assert_eq!(rows[0][1].position, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_clips_to_screen() {
        let geometry = Geometry::new("main", Area::new(7, 2, 4, 3));
        let border = Border::new("main");
        let colour = Colour::default();
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (8, 3));

        let rows = viewport.rows(&content(&["abcd", "efgh", "ijkl"]));
        assert_eq!(Content::new(rows).text(), vec!["ab", "ef"]);
    }

    #[test]
    fn test_border_larger_than_region_stays_inside() {
        let border = Border::enabled("main");
        let colour = Colour::default();

        let geometry = Geometry::new("main", Area::new(3, 2, 1, 1));
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));
        let rows = viewport.rows(&content(&["abc"]));
        assert_eq!(Content::new(rows.clone()).text(), vec!["l"]);
        assert_eq!(rows[0][0].position, Some(Position::new(2, 3)));

        let geometry = Geometry::new("main", Area::new(3, 2, 1, 3));
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));
        let rows = viewport.rows(&content(&["abc"]));
        assert_eq!(Content::new(rows.clone()).text(), vec!["l", "x", "m"]);
        assert!(rows.iter().flatten().all(|cell| cell.position.map(|p| p.x) == Some(3)));

        let geometry = Geometry::new("main", Area::new(3, 2, 4, 1));
        let viewport = Viewport::new(&geometry, &border, &colour, Style::empty(), (80, 24));
        let rows = viewport.rows(&content(&["abc"]));
        assert_eq!(Content::new(rows).text(), vec!["lqqk"]);
    }

    #[test]
    fn test_blank_covers_border() {
        let geometry = Geometry::new("main", Area::new(2, 2, 3, 2));
        let border = Border::enabled("main");
        let colour = Colour::foreground("red");
        let viewport = Viewport::new(&geometry, &border, &colour, Style::BOLD, (80, 24));

        let rows = viewport.blank();
        assert_eq!(Content::new(rows.clone()).text(), vec!["   ", "   "]);
        assert_eq!(rows[1][2].position, Some(Position::new(3, 4)));
        assert_eq!(rows[0][0].colour, Colour::default());
    }
}
