use nalgebra::Vector4;

use super::{Coordinate, Dimensions, ScreenVertex};

/// Defines a vertex in clip-space, as produced by the vertex shader stage.
#[derive(Debug, Clone)]
pub struct ClipVertex<V> {
    /// Homogeneous position returned by the vertex shader.
    ///
    /// The rasterizer never divides by `w`. A vertex shader that wants perspective
    /// has to divide `x`, `y` and `z` itself.
    pub position: Vector4<f32>,
    /// Vertex attributes returned by the vertex shader, interpolated across the triangle.
    pub attributes: V,
}

impl<V> ClipVertex<V> {
    /// Creates a new `ClipVertex` from the given clip-space position and attributes
    #[inline(always)]
    pub fn new(position: Vector4<f32>, attributes: V) -> ClipVertex<V> {
        ClipVertex { position, attributes }
    }

    /// Maps the normalized device coordinates of this vertex to a pixel of the given viewport.
    ///
    /// This assumes a viewport in the shape of:
    ///
    /// ```text
    /// 0,0-----------------x
    ///  |                  |
    ///  |                  |
    ///  |                  |
    ///  y-----------------x,y
    /// ```
    ///
    /// where the y-axis is flipped. Coordinates are truncated towards zero.
    pub fn to_screen(self, viewport: Dimensions) -> ScreenVertex<V> {
        let x = (self.position.x + 1.0) * 0.5 * viewport.width as f32;
        let y = (1.0 - self.position.y) * 0.5 * viewport.height as f32;

        ScreenVertex {
            coordinate: Coordinate::new(x as i32, y as i32),
            depth: self.position.z,
            attributes: self.attributes,
        }
    }
}
