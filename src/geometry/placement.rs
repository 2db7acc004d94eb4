//! Geometry - the stored rectangle of a named region

use std::fmt;
use std::str::FromStr;

use super::area::{to_coord, Area};
use crate::registry::Model;

/// Direction of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// Position and extent of a named region
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    name: String,
    area: Area,
    /// Draw precedence; higher draws later (on top)
    zindex: u32,
    maximised: bool,
    /// Area to restore on unmaximise
    saved: Option<Area>,
}

impl Geometry {
    pub fn new(name: impl Into<String>, area: Area) -> Self {
        Self {
            name: name.into(),
            area,
            zindex: 0,
            maximised: false,
            saved: None,
        }
    }

    /// The stand-in returned for unregistered names: the whole screen.
    pub fn null(name: &str, screen_width: u16, screen_height: u16) -> Self {
        Self::new(name, Area::full(screen_width, screen_height))
    }

    pub fn with_zindex(mut self, zindex: u32) -> Self {
        self.zindex = zindex;
        self
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn x(&self) -> u16 {
        self.area.x
    }

    pub fn y(&self) -> u16 {
        self.area.y
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn xn(&self) -> u16 {
        self.area.xn()
    }

    pub fn yn(&self) -> u16 {
        self.area.yn()
    }

    pub fn zindex(&self) -> u32 {
        self.zindex
    }

    pub fn set_zindex(&mut self, zindex: u32) {
        self.zindex = zindex;
    }

    pub fn is_maximised(&self) -> bool {
        self.maximised
    }

    /// Expand to the full screen, remembering the current area.
    ///
    /// Returns false if already maximised.
    pub fn maximise(&mut self, screen_width: u16, screen_height: u16) -> bool {
        if self.maximised {
            return false;
        }
        self.saved = Some(self.area);
        self.area = Area::full(screen_width.max(1), screen_height.max(1));
        self.maximised = true;
        true
    }

    /// Restore the area saved by `maximise`; a no-op if not maximised.
    pub fn unmaximise(&mut self) -> bool {
        if !self.maximised {
            return false;
        }
        if let Some(saved) = self.saved.take() {
            self.area = saved;
        }
        self.maximised = false;
        true
    }

    /// Translate the origin by `offset` cells, keeping the whole area on
    /// screen. Ignored while maximised.
    ///
    /// Returns whether the origin changed.
    pub fn move_by(
        &mut self,
        direction: Direction,
        offset: u16,
        screen_width: u16,
        screen_height: u16,
    ) -> bool {
        if self.maximised {
            return false;
        }

        let before = self.area;
        let offset = i32::from(offset);
        let mut x = i32::from(self.area.x);
        let mut y = i32::from(self.area.y);
        match direction {
            Direction::Up => y -= offset,
            Direction::Down => y += offset,
            Direction::Left => x -= offset,
            Direction::Right => x += offset,
        }

        let moved = Area::new(to_coord(x.max(1)), to_coord(y.max(1)), self.area.width, self.area.height);
        self.area = moved.clamp(screen_width, screen_height);
        self.area != before
    }

    /// Refit to a (possibly resized) screen.
    pub fn fit(&mut self, screen_width: u16, screen_height: u16) {
        if self.maximised {
            self.area = Area::full(screen_width.max(1), screen_height.max(1));
            if let Some(saved) = self.saved {
                self.saved = Some(saved.clamp(screen_width, screen_height));
            }
        } else {
            self.area = self.area.clamp(screen_width, screen_height);
        }
    }
}

impl Model for Geometry {
    const KIND: &'static str = "geometry";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry(x: u16, y: u16, width: u16, height: u16) -> Geometry {
        Geometry::new("main", Area::new(x, y, width, height))
    }

    #[test]
    fn test_null_covers_screen() {
        let null = Geometry::null("ghost", 80, 24);
        assert_eq!((null.x(), null.y()), (1, 1));
        assert_eq!((null.width(), null.height()), (80, 24));
        assert_eq!((null.xn(), null.yn()), (81, 25));
    }

    #[test]
    fn test_maximise_and_restore() {
        let mut geo = geometry(5, 5, 10, 4);
        assert!(geo.maximise(80, 24));
        assert!(geo.is_maximised());
        assert_eq!(geo.area(), Area::full(80, 24));
        assert!(!geo.maximise(80, 24));

        assert!(geo.unmaximise());
        assert_eq!(geo.area(), Area::new(5, 5, 10, 4));
        assert!(!geo.unmaximise());
    }

    #[test]
    fn test_move_ignored_while_maximised() {
        let mut geo = geometry(5, 5, 10, 4);
        geo.maximise(80, 24);
        assert!(!geo.move_by(Direction::Right, 3, 80, 24));
        assert_eq!(geo.x(), 1);
    }

    #[test]
    fn test_move_left_clamps_at_first_column() {
        // width 10 on an 8-column screen, moved left by 5
        let mut geo = geometry(1, 1, 10, 3);
        geo.move_by(Direction::Left, 5, 8, 24);
        assert_eq!(geo.x(), 1);
        assert_eq!(geo.width(), 8);
    }

    #[test]
    fn test_move_right_stops_at_edge() {
        let mut geo = geometry(60, 1, 10, 3);
        assert!(geo.move_by(Direction::Right, 50, 80, 24));
        assert_eq!(geo.x(), 71);
        assert_eq!(geo.xn(), 81);
        assert!(!geo.move_by(Direction::Right, 1, 80, 24));
    }

    #[test]
    fn test_move_up_and_down() {
        let mut geo = geometry(1, 10, 10, 5);
        geo.move_by(Direction::Up, 3, 80, 24);
        assert_eq!(geo.y(), 7);
        geo.move_by(Direction::Down, 100, 80, 24);
        assert_eq!(geo.y(), 20);
    }

    #[test]
    fn test_fit_after_resize() {
        let mut geo = geometry(70, 1, 10, 3);
        geo.fit(40, 10);
        assert_eq!(geo.area(), Area::new(31, 1, 10, 3));

        geo.maximise(40, 10);
        geo.fit(100, 30);
        assert_eq!(geo.area(), Area::full(100, 30));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("Left".parse::<Direction>(), Ok(Direction::Left));
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Down.to_string(), "down");
    }

    proptest! {
        #[test]
        fn prop_move_never_leaves_screen(
            x in 1u16..100, y in 1u16..100,
            w in 1u16..100, h in 1u16..100,
            offset in 0u16..200,
            dir in 0usize..4,
            sw in 1u16..120, sh in 1u16..60,
        ) {
            let mut geo = geometry(x, y, w, h);
            geo.move_by(Direction::ALL[dir], offset, sw, sh);
            prop_assert!(geo.x() >= 1 && geo.y() >= 1);
            prop_assert!(geo.xn() <= sw + 1 && geo.yn() <= sh + 1);
            prop_assert!(geo.width() >= 1 && geo.height() >= 1);
        }
    }
}
