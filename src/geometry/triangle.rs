//! Triangle setup and barycentric coordinates in screen-space

use crate::utils::{min3, max3};

use super::{Coordinate, Dimensions};

/// Edge function of the directed line `a -> b` evaluated at `c`.
///
/// Applied to the three corners of a triangle it returns twice the signed area of the triangle,
/// which is positive for triangles that are counter-clockwise as seen on screen
/// (equivalently, counter-clockwise in y-up normalized device coordinates).
///
/// Evaluated in `f64` so that far off-screen vertices cannot overflow.
#[inline]
pub fn edge_function(a: Coordinate, b: Coordinate, c: Coordinate) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (cx, cy) = (c.x as f64, c.y as f64);

    (cx - ax) * (by - ay) - (cy - ay) * (bx - ax)
}

/// Barycentric weights of a point relative to the three corners of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub w0: f32,
    pub w1: f32,
    pub w2: f32,
}

impl Barycentric {
    /// Inclusive coverage test. Points exactly on an edge are inside,
    /// so pixels on an edge shared by two triangles are covered by both.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.w0 >= 0.0 && self.w1 >= 0.0 && self.w2 >= 0.0
    }

    /// Weighted sum of three scalar values
    #[inline]
    pub fn interpolate(&self, a: f32, b: f32, c: f32) -> f32 {
        self.w0 * a + self.w1 * b + self.w2 * c
    }
}

/// Inclusive, row-major range of pixels.
///
/// Empty when `min` exceeds `max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Iterates the covered pixels row by row
    pub fn pixels(self) -> impl Iterator<Item = Coordinate> {
        let BoundingBox { min, max } = self;

        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Coordinate::new(x, y)))
    }
}

/// Screen-space triangle with its signed area precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p0: Coordinate,
    pub p1: Coordinate,
    pub p2: Coordinate,
    area: f64,
}

impl Triangle {
    pub fn new(p0: Coordinate, p1: Coordinate, p2: Coordinate) -> Triangle {
        Triangle { p0, p1, p2, area: edge_function(p0, p1, p2) }
    }

    /// Twice the signed area, see [`edge_function`]
    #[inline(always)]
    pub fn area(&self) -> f64 { self.area }

    /// Degenerate and back-facing triangles have a non-positive area
    /// and are never rasterized.
    #[inline(always)]
    pub fn is_front_facing(&self) -> bool { self.area > 0.0 }

    /// Pixel bounds of the triangle clamped to the viewport.
    pub fn bounding_box(&self, viewport: Dimensions) -> BoundingBox {
        let Triangle { p0, p1, p2, .. } = *self;

        let limit = viewport.max_coordinate();

        BoundingBox {
            min: Coordinate::new(min3(p0.x, p1.x, p2.x).max(0),
                                 min3(p0.y, p1.y, p2.y).max(0)),
            max: Coordinate::new(max3(p0.x, p1.x, p2.x).min(limit.x),
                                 max3(p0.y, p1.y, p2.y).min(limit.y)),
        }
    }

    /// Barycentric weights of `p`. Only meaningful for triangles with a non-zero area.
    #[inline]
    pub fn barycentric(&self, p: Coordinate) -> Barycentric {
        Barycentric {
            w0: (edge_function(self.p1, self.p2, p) / self.area) as f32,
            w1: (edge_function(self.p2, self.p0, p) / self.area) as f32,
            w2: (edge_function(self.p0, self.p1, p) / self.area) as f32,
        }
    }
}
