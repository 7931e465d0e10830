use nalgebra::{Point3, Vector2, Vector3};

use crate::color::Color;
use crate::interpolate::Interpolate;

/// Vertex attribute records accepted by the rasterizer.
///
/// The rasterizer reads the position to build the homogeneous input `(x, y, z, 1)` of the
/// vertex shader, and interpolates whatever the vertex shader returns across each triangle.
pub trait Vertex: Interpolate + Clone {
    fn position(&self) -> Point3<f32>;
}

/// Standard vertex record produced by model loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub texcoord: Vector2<f32>,
    pub diffuse: Color,
    pub ambient: Color,
    pub emissive: Color,
}

impl Default for MeshVertex {
    fn default() -> MeshVertex {
        MeshVertex {
            position: Point3::origin(),
            normal: Vector3::zeros(),
            texcoord: Vector2::zeros(),
            diffuse: Color::BLACK,
            ambient: Color::BLACK,
            emissive: Color::BLACK,
        }
    }
}

impl Vertex for MeshVertex {
    #[inline(always)]
    fn position(&self) -> Point3<f32> { self.position }
}

/// Interpolates every attribute and re-normalizes the normal.
///
/// An interpolated normal of zero length is left as it is.
impl Interpolate for MeshVertex {
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        let normal: Vector3<f32> = Interpolate::barycentric_interpolate(u, &ux.normal, v, &vx.normal, w, &wx.normal);

        MeshVertex {
            position: Interpolate::barycentric_interpolate(u, &ux.position, v, &vx.position, w, &wx.position),
            normal: normal.try_normalize(::std::f32::EPSILON).unwrap_or(normal),
            texcoord: Interpolate::barycentric_interpolate(u, &ux.texcoord, v, &vx.texcoord, w, &wx.texcoord),
            diffuse: Interpolate::barycentric_interpolate(u, &ux.diffuse, v, &vx.diffuse, w, &wx.diffuse),
            ambient: Interpolate::barycentric_interpolate(u, &ux.ambient, v, &vx.ambient, w, &wx.ambient),
            emissive: Interpolate::barycentric_interpolate(u, &ux.emissive, v, &vx.emissive, w, &wx.emissive),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn vertex(normal: Vector3<f32>, diffuse: Color) -> MeshVertex {
        MeshVertex { normal, diffuse, ..MeshVertex::default() }
    }

    #[test]
    fn test_interpolated_normal_is_normalized() {
        let a = vertex(Vector3::new(1.0, 0.0, 0.0), Color::new(1.0, 0.0, 0.0));
        let b = vertex(Vector3::new(0.0, 1.0, 0.0), Color::new(0.0, 1.0, 0.0));
        let c = vertex(Vector3::new(0.0, 0.0, 1.0), Color::new(0.0, 0.0, 1.0));

        let v = MeshVertex::barycentric_interpolate(0.5, &a, 0.5, &b, 0.0, &c);

        assert!((v.normal.norm() - 1.0).abs() < 1e-6);
        assert!((v.normal.x - v.normal.y).abs() < 1e-6);
        assert_eq!(v.diffuse, Color::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_zero_normal_stays_zero() {
        let a = vertex(Vector3::new(1.0, 0.0, 0.0), Color::BLACK);
        let b = vertex(Vector3::new(-1.0, 0.0, 0.0), Color::BLACK);

        let v = MeshVertex::barycentric_interpolate(0.5, &a, 0.5, &b, 0.0, &a);

        assert_eq!(v.normal, Vector3::zeros());
    }

    #[test]
    fn test_position_and_texcoord() {
        let mut a = MeshVertex::default();
        let mut b = MeshVertex::default();

        a.position = Point3::new(0.0, 0.0, 0.0);
        b.position = Point3::new(4.0, 8.0, -4.0);
        a.texcoord = Vector2::new(0.0, 0.0);
        b.texcoord = Vector2::new(1.0, 1.0);

        let v = MeshVertex::barycentric_interpolate(0.75, &a, 0.25, &b, 0.0, &a);

        assert_eq!(v.position(), Point3::new(1.0, 2.0, -1.0));
        assert_eq!(v.texcoord, Vector2::new(0.25, 0.25));
    }
}
