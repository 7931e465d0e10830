use super::Coordinate;

/// Width and height of a pixel grid, such as the rasterizer viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Dimensions {
        Dimensions::new(1920, 1080)
    }
}

impl Dimensions {
    #[inline(always)]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Returns the number of pixels as `usize` by multiplying the current width and height
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks if the given coordinate is within the dimension bounds
    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 &&
            (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    /// Largest valid pixel coordinate. Negative for an empty grid.
    #[inline]
    pub(crate) fn max_coordinate(&self) -> Coordinate {
        Coordinate::new(i32::try_from(self.width).unwrap_or(i32::MAX) - 1,
                        i32::try_from(self.height).unwrap_or(i32::MAX) - 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let d = Dimensions::default();

        assert_eq!((d.width, d.height), (1920, 1080));
        assert_eq!(d.area(), 1920 * 1080);
    }

    #[test]
    fn test_in_bounds() {
        let d = Dimensions::new(800, 600);

        assert!(d.in_bounds(Coordinate::new(0, 0)));
        assert!(d.in_bounds(Coordinate::new(799, 599)));
        assert!(!d.in_bounds(Coordinate::new(800, 10)));
        assert!(!d.in_bounds(Coordinate::new(-1, 10)));
    }
}
