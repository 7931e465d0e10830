//! Macro for declaring interpolated vertex attribute structures
//!
//! The [`Interpolate`](../interpolate/trait.Interpolate.html) trait is implemented for `f32`, integer primitives,
//! nalgebra vectors and points and [`Color`](../color/struct.Color.html), so most vertex types can be declared
//! with [`declare_attributes!`](../macro.declare_attributes.html) instead of implementing the trait by hand.

/// Declares a structure and implements the [`Interpolate`](interpolate/trait.Interpolate.html) trait for it by delegating the trait to each member.
///
/// So, for example, this:
///
/// ```ignore
/// declare_attributes! {
///     #[derive(Debug, Clone)]
///     pub struct MyVertex {
///         /// Position in model-space
///         pub position: Point3<f32>,
///         pub color: Color,
///         pub uv: Vector2<f32>,
///     }
/// }
/// ```
///
/// becomes:
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// pub struct MyVertex {
///     /// Position in model-space
///     pub position: Point3<f32>,
///     pub color: Color,
///     pub uv: Vector2<f32>,
/// }
///
/// impl Interpolate for MyVertex {
///     fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
///         MyVertex {
///             position: Interpolate::barycentric_interpolate(u, &ux.position, v, &vx.position, w, &wx.position),
///             color: Interpolate::barycentric_interpolate(u, &ux.color, v, &vx.color, w, &wx.color),
///             uv: Interpolate::barycentric_interpolate(u, &ux.uv, v, &vx.uv, w, &wx.uv),
///         }
///     }
/// }
/// ```
///
/// To rasterize it, the structure still needs a [`Vertex`](mesh/trait.Vertex.html) implementation telling where its position is.
///
/// For now, the struct itself must be `pub` and all the members must be `pub`.
#[macro_export]
macro_rules! declare_attributes {
    ($(#[$($struct_attrs:tt)*])* pub struct $name:ident {
        $($(#[$($field_attrs:tt)*])* pub $field:ident: $t:ty,)*
    }) => {
        $(#[$($struct_attrs)*])*
        pub struct $name {
            $(
                $(#[$($field_attrs)*])*
                pub $field: $t
            ),*
        }

        impl $crate::Interpolate for $name {
            fn barycentric_interpolate(u: f32, ux: &Self, v: f32, vx: &Self, w: f32, wx: &Self) -> Self {
                $name {
                    $(
                        $field: $crate::Interpolate::barycentric_interpolate(u, &ux.$field,
                                                                             v, &vx.$field,
                                                                             w, &wx.$field)
                    ),*
                }
            }
        }
    };
}
