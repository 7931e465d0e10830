//! Render target pixel definition and conversion

use crate::color::{Color, UnsignedColor};
use crate::utils::clamp;

/// Trait required of render target pixel types.
///
/// The pixel shader returns a normalized [`Color`], which is converted into the render target's
/// own representation with `from_color` before being written. A render target type
/// without an implementation cannot be used with the rasterizer at all.
pub trait Pixel: Copy + 'static {
    /// Convert a normalized color into this pixel representation
    fn from_color(color: Color) -> Self;
}

/// Scales a normalized channel to `[0, 255]`, truncating the fraction. NaN becomes 0.
#[inline]
fn channel_to_u8(c: f32) -> u8 {
    clamp(c * 255.0, 0.0, 255.0) as u8
}

impl Pixel for UnsignedColor {
    #[inline]
    fn from_color(color: Color) -> UnsignedColor {
        UnsignedColor {
            r: channel_to_u8(color.r),
            g: channel_to_u8(color.g),
            b: channel_to_u8(color.b),
        }
    }
}

/// Floating point render targets store the shader output unchanged
impl Pixel for Color {
    #[inline(always)]
    fn from_color(color: Color) -> Color { color }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unsigned_conversion_truncates() {
        let c = UnsignedColor::from_color(Color::new(1.0, 0.5, 0.0));

        // 127.5 truncates to 127
        assert_eq!(c, UnsignedColor::new(255, 127, 0));
    }

    #[test]
    fn test_unsigned_conversion_extremes() {
        assert_eq!(UnsignedColor::from_color(Color::WHITE), UnsignedColor::new(255, 255, 255));
        assert_eq!(UnsignedColor::from_color(Color::BLACK), UnsignedColor::new(0, 0, 0));
    }

    #[test]
    fn test_unsigned_conversion_clamps() {
        let c = UnsignedColor::from_color(Color::new(4.0, -2.0, ::std::f32::NAN));

        assert_eq!(c, UnsignedColor::new(255, 0, 0));
    }

    #[test]
    fn test_float_target_is_identity() {
        let c = Color::new(2.0, -1.0, 0.5);

        assert_eq!(Color::from_color(c), c);
    }
}
