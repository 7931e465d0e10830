//! Color type definitions, for both shader output and render targets

use std::ops::{Add, Mul};

use crate::interpolate::Interpolate;

/// Normalized floating point RGB color, as returned by the pixel shader.
///
/// Components are nominally within `[0, 1]`, but are not clamped until
/// the color is converted into a render target pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red Component
    pub r: f32,
    /// Green Component
    pub g: f32,
    /// Blue Component
    pub b: f32,
}

/// 8-bit per channel RGB color, the usual render target pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnsignedColor {
    /// Red Component
    pub r: u8,
    /// Green Component
    pub g: u8,
    /// Blue Component
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from(c: [f32; 3]) -> Color {
        Color::new(c[0], c[1], c[2])
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Interpolate for Color {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Color, v: f32, vx: &Color, w: f32, wx: &Color) -> Color {
        *ux * u + *vx * v + *wx * w
    }
}

impl UnsignedColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> UnsignedColor {
        UnsignedColor { r, g, b }
    }
}

impl From<UnsignedColor> for Color {
    fn from(c: UnsignedColor) -> Color {
        Color::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_color_interpolate() {
        let red = Color::new(1.0, 0.0, 0.0);
        let green = Color::new(0.0, 1.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);

        let c = Interpolate::barycentric_interpolate(0.5, &red, 0.25, &green, 0.25, &blue);

        assert_eq!(c, Color::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_unsigned_to_normalized() {
        assert_eq!(Color::from(UnsignedColor::new(255, 0, 51)), Color::new(1.0, 0.0, 0.2));
    }
}
