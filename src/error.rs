//! Rasterizer error types

use thiserror::Error;

use crate::geometry::Dimensions;

/// Configuration errors reported by the rasterizer.
///
/// A draw with a missing binding is not an error, it is skipped.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("index {index} at position {position} is out of bounds for a vertex buffer of {vertex_count} vertices")]
    IndexOutOfBounds {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("{0} indices is invalid for triangle indexing")]
    InvalidIndexCount(usize),
    #[error("render target of {width}x{height} is smaller than the {}x{} viewport", viewport.width, viewport.height)]
    RenderTargetTooSmall {
        width: usize,
        height: usize,
        viewport: Dimensions,
    },
    #[error("depth buffer of {depth_width}x{depth_height} does not match the {width}x{height} render target")]
    DepthBufferMismatch {
        width: usize,
        height: usize,
        depth_width: usize,
        depth_height: usize,
    },
    #[cfg(feature = "image_compat")]
    #[error("a {width}x{height} resource does not fit an image")]
    ImageDimensions {
        width: usize,
        height: usize,
    },
    #[cfg(feature = "image_compat")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
