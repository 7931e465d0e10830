//! Interpolation utilities

use std::ops::{Add, Mul};

use nalgebra::{Point, SVector};
use num_traits::{Bounded, NumCast, ToPrimitive};

/// Describes a type that can be interpolated with barycentric coordinates.
///
/// This is required of every vertex type given to the rasterizer, since each covered pixel
/// receives a weighted blend of the three vertices of its triangle.
///
/// See [This document](https://classes.soe.ucsc.edu/cmps160/Fall10/resources/barycentricInterpolation.pdf) for more information.
///
/// This trait can be implemented automatically for most vertex types by using the [`declare_attributes!`](../macro.declare_attributes.html) macro,
/// which for any collection of attributes for which `Interpolate` is implemented, will delegate `Interpolate::barycentric_interpolate` to each member.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: f32, x1: &Self, v: f32, x2: &Self, w: f32, x3: &Self) -> Self;
}

/// Convenience method for interpolating three values with barycentric coordinates.
#[inline]
pub fn barycentric_interpolate<T>(u: f32, ux: T, v: f32, vx: T, w: f32, wx: T) -> T where T: Add<Output = T> + Mul<f32, Output = T> {
    ux * u + vx * v + wx * w
}

impl Interpolate for () {
    #[inline(always)]
    fn barycentric_interpolate(_: f32, _: &Self, _: f32, _: &Self, _: f32, _: &Self) -> Self {}
}

// Out of range results saturate instead of failing the cast
fn saturating_cast<T>(value: f64) -> T where T: NumCast + Bounded {
    <T as NumCast>::from(value).unwrap_or_else(|| {
        if value < 0.0 { T::min_value() } else { T::max_value() }
    })
}

macro_rules! impl_primitive_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn barycentric_interpolate(u: f32, ux: &$t, v: f32, vx: &$t, w: f32, wx: &$t) -> $t {
                    let sum = ux.to_f64().unwrap_or(0.0) * u as f64 +
                              vx.to_f64().unwrap_or(0.0) * v as f64 +
                              wx.to_f64().unwrap_or(0.0) * w as f64;

                    saturating_cast(sum)
                }
            }
        )+
    }
}

impl_primitive_interpolate!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f64);

impl Interpolate for f32 {
    #[inline(always)]
    fn barycentric_interpolate(u: f32, ux: &f32, v: f32, vx: &f32, w: f32, wx: &f32) -> f32 {
        ux * u + vx * v + wx * w
    }
}

impl<const D: usize> Interpolate for SVector<f32, D> {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        ux * u + vx * v + wx * w
    }
}

impl<const D: usize> Interpolate for Point<f32, D> {
    #[inline]
    fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
        Point::from(Interpolate::barycentric_interpolate(u, &ux.coords,
                                                         v, &vx.coords,
                                                         w, &wx.coords))
    }
}
