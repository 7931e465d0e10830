//! Software triangle rasterizer in Rust
//!
//! ### Example:
//!
//! See `full_example/` for loading and rendering a Wavefront OBJ model to a PNG file.
//!
//! ### Features:
//!
//! * Indexed triangle rasterization into user-supplied buffers.
//! * User-defined vertex and pixel shaders, given as closures.
//! * User-defined vertex attributes, interpolated with barycentric coordinates.
//! * Normals are re-normalized after interpolation.
//! * Back-face and degenerate triangle culling.
//! * Optional depth buffer, where smaller values are closer.
//! * Generic render target pixels, converted from normalized colors.
//! * Built-in compatibility with the `image` crate, using the `image_compat` cargo feature.
//!
//! ### Limitations:
//!
//! * No clipping. Vertices behind the camera produce garbage rather than being cut away.
//! * Attribute interpolation is linear in screen-space, not perspective-correct.
//! * Pixels on an edge shared by two triangles are shaded by both.

pub mod error;
pub mod utils;
pub mod interpolate;
#[macro_use]
pub mod attributes;
pub mod color;
pub mod pixel;
pub mod resource;
pub mod geometry;
pub mod mesh;
pub mod rasterizer;

#[cfg(feature = "image_compat")]
pub mod image_compat;

pub use error::{RenderError, RenderResult};
pub use interpolate::Interpolate;
pub use color::{Color, UnsignedColor};
pub use pixel::Pixel;
pub use resource::{Resource, SharedResource};
pub use geometry::{ClipVertex, Coordinate, Dimensions, ScreenVertex};
pub use mesh::{Mesh, MeshVertex, Vertex};
pub use rasterizer::{DrawStats, PixelShader, Rasterizer, VertexShader, DEFAULT_DEPTH};
