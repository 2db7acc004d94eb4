//! Area - a rectangle on the character grid

use crate::error::{Error, Result};

/// A rectangle with a 1-based origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// The whole screen.
    pub const fn full(screen_width: u16, screen_height: u16) -> Self {
        Self::new(1, 1, screen_width, screen_height)
    }

    /// Build from signed values as they arrive from configuration.
    ///
    /// Origins below 1 are pulled to 1 and a zero extent floors at 1; a
    /// negative extent is a programmer error.
    pub fn checked(name: &str, x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidGeometry {
                name: name.to_string(),
                width,
                height,
            });
        }
        Ok(Self::new(
            to_coord(x.max(1)),
            to_coord(y.max(1)),
            to_coord(width.max(1)),
            to_coord(height.max(1)),
        ))
    }

    /// Build from an origin and the derived bounds.
    pub fn from_bounds(name: &str, x: i32, y: i32, xn: i32, yn: i32) -> Result<Self> {
        Self::checked(name, x, y, xn - x, yn - y)
    }

    pub fn xn(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn yn(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Shrink and shift this area until it fits on the given screen.
    pub fn clamp(&self, screen_width: u16, screen_height: u16) -> Self {
        let (x, width) = clamp_axis(self.x, self.width, screen_width);
        let (y, height) = clamp_axis(self.y, self.height, screen_height);
        Self::new(x, y, width, height)
    }

    /// Check if a cell (1-based) is inside this area
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.xn() && row >= self.y && row < self.yn()
    }

    /// Overlapping part of two areas, if any.
    pub fn intersection(&self, other: &Area) -> Option<Area> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let xn = self.xn().min(other.xn());
        let yn = self.yn().min(other.yn());

        if x >= xn || y >= yn {
            None
        } else {
            Some(Area::new(x, y, xn - x, yn - y))
        }
    }

    pub fn overlaps(&self, other: &Area) -> bool {
        self.intersection(other).is_some()
    }
}

/// Clamp one axis: extent to `1..=limit`, origin so that the extent fits.
fn clamp_axis(origin: u16, extent: u16, limit: u16) -> (u16, u16) {
    let limit = i32::from(limit.max(1));
    let extent = i32::from(extent).clamp(1, limit);
    let max_origin = (limit - extent + 1).max(1);
    let origin = i32::from(origin).clamp(1, max_origin);
    (to_coord(origin), to_coord(extent))
}

pub(crate) fn to_coord(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounds() {
        let area = Area::new(3, 2, 10, 5);
        assert_eq!(area.xn(), 13);
        assert_eq!(area.yn(), 7);
    }

    #[test]
    fn test_checked_floors_zero_extent() {
        let area = Area::checked("a", 0, -4, 0, 0).unwrap();
        assert_eq!(area, Area::new(1, 1, 1, 1));
    }

    #[test]
    fn test_checked_rejects_negative_extent() {
        let err = Area::checked("a", 1, 1, -2, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { width: -2, .. }));

        let err = Area::from_bounds("b", 10, 1, 4, 5).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { .. }));
    }

    #[test]
    fn test_clamp_shrinks_oversized() {
        let area = Area::new(1, 1, 10, 3).clamp(8, 24);
        assert_eq!(area, Area::new(1, 1, 8, 3));
    }

    #[test]
    fn test_clamp_pulls_origin_back() {
        let area = Area::new(75, 20, 10, 10).clamp(80, 24);
        assert_eq!(area, Area::new(71, 15, 10, 10));
    }

    #[test]
    fn test_intersection() {
        let a = Area::new(1, 1, 10, 10);
        let b = Area::new(6, 6, 10, 10);
        assert_eq!(a.intersection(&b), Some(Area::new(6, 6, 5, 5)));
        assert!(!a.overlaps(&Area::new(11, 1, 3, 3)));
    }

    #[test]
    fn test_contains() {
        let area = Area::new(2, 2, 2, 2);
        assert!(area.contains(2, 2));
        assert!(area.contains(3, 3));
        assert!(!area.contains(4, 3));
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_on_screen(
            x in 0u16..300, y in 0u16..300,
            w in 0u16..300, h in 0u16..300,
            sw in 1u16..250, sh in 1u16..250,
        ) {
            let area = Area::new(x, y, w, h).clamp(sw, sh);
            prop_assert!(area.x >= 1 && area.y >= 1);
            prop_assert!(area.width >= 1 && area.height >= 1);
            prop_assert!(area.xn() <= sw + 1);
            prop_assert!(area.yn() <= sh + 1);
        }
    }
}
