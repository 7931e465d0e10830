//! Triangle scan conversion, depth testing and pixel write-back

use crate::color::Color;
use crate::geometry::{Dimensions, ScreenVertex, Triangle};
use crate::mesh::Vertex;
use crate::pixel::Pixel;
use crate::resource::Resource;

use super::DrawStats;

/// Locked output buffers of a single draw
pub(crate) struct RasterTarget<'a, P> {
    pub color: &'a mut Resource<P>,
    pub depth: Option<&'a mut Resource<f32>>,
    pub viewport: Dimensions,
}

impl<'a, P> RasterTarget<'a, P> {
    /// Passes when no depth buffer is bound, or when `z` is strictly closer than the stored depth.
    #[inline]
    fn depth_test(&self, z: f32, x: usize, y: usize) -> bool {
        match self.depth {
            Some(ref depth) => *depth.item_at(x, y) > z,
            None => true,
        }
    }
}

pub(crate) fn rasterize_triangle<V, P>(target: &mut RasterTarget<P>,
                                       pixel_shader: &dyn Fn(&V, f32) -> Color,
                                       stats: &mut DrawStats,
                                       a: &ScreenVertex<V>,
                                       b: &ScreenVertex<V>,
                                       c: &ScreenVertex<V>)
    where V: Vertex,
          P: Pixel {
    let triangle = Triangle::new(a.coordinate, b.coordinate, c.coordinate);

    // degenerate or back-facing
    if !triangle.is_front_facing() {
        stats.culled += 1;
        return;
    }

    for pixel in triangle.bounding_box(target.viewport).pixels() {
        let weights = triangle.barycentric(pixel);

        if !weights.is_inside() {
            continue;
        }

        // bounding box is clamped to the viewport, so these are non-negative
        let (x, y) = (pixel.x as usize, pixel.y as usize);

        let z = weights.interpolate(a.depth, b.depth, c.depth);

        if !target.depth_test(z, x, y) {
            stats.depth_rejected += 1;
            continue;
        }

        let attributes = V::barycentric_interpolate(weights.w0, &a.attributes,
                                                    weights.w1, &b.attributes,
                                                    weights.w2, &c.attributes);

        let color = pixel_shader(&attributes, z);

        *target.color.item_at_mut(x, y) = P::from_color(color);

        if let Some(ref mut depth) = target.depth {
            *depth.item_at_mut(x, y) = z;
        }

        stats.fragments += 1;
    }
}
