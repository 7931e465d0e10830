//! The rasterizer pipeline
//!
//! A [`Rasterizer`] holds references to the buffers it reads from and writes to, the viewport,
//! and the two user-defined shader stages. Each call to [`Rasterizer::draw`] runs, for every
//! triangle of the index buffer:
//!
//! 1. the vertex shader, once per corner,
//! 2. the mapping of normalized device coordinates onto viewport pixels,
//! 3. culling of degenerate and back-facing triangles,
//! 4. a barycentric coverage test over the triangle's bounding box,
//! 5. the depth test, attribute interpolation and the pixel shader for every covered pixel,
//! 6. the write of the converted color and new depth.
//!
//! Triangles are processed in index order and pixels row by row, so output is deterministic.
//! There is no clipping, and attributes are interpolated linearly in screen-space.

use std::fmt::{self, Debug};
use std::ops::AddAssign;

use log::{debug, trace};

use nalgebra::Vector4;

use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::geometry::{ClipVertex, Dimensions};
use crate::mesh::{Mesh, Vertex};
use crate::pixel::Pixel;
use crate::resource::SharedResource;

mod triangle;

use self::triangle::{rasterize_triangle, RasterTarget};

/// Depth value a depth buffer is cleared to by default. Everything is closer than it.
pub const DEFAULT_DEPTH: f32 = ::std::f32::MAX;

/// Maps a homogeneous position `(x, y, z, 1)` and its vertex to a clip-space position and the vertex
/// attributes to interpolate.
pub type VertexShader<V> = Box<dyn Fn(Vector4<f32>, V) -> (Vector4<f32>, V)>;

/// Maps interpolated vertex attributes and depth to a normalized color.
pub type PixelShader<V> = Box<dyn Fn(&V, f32) -> Color>;

/// Counters gathered during a single draw call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawStats {
    /// Triangles assembled from the index buffer
    pub triangles: usize,
    /// Triangles skipped for having a non-positive area
    pub culled: usize,
    /// Pixels shaded and written
    pub fragments: usize,
    /// Covered pixels that failed the depth test
    pub depth_rejected: usize,
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: DrawStats) {
        self.triangles += rhs.triangles;
        self.culled += rhs.culled;
        self.fragments += rhs.fragments;
        self.depth_rejected += rhs.depth_rejected;
    }
}

/// Software triangle rasterizer, generic over the vertex type `V` and render target pixel type `P`.
pub struct Rasterizer<V, P> {
    vertex_buffer: Option<SharedResource<V>>,
    index_buffer: Option<SharedResource<u32>>,
    render_target: Option<SharedResource<P>>,
    depth_buffer: Option<SharedResource<f32>>,
    viewport: Dimensions,
    vertex_shader: Option<VertexShader<V>>,
    pixel_shader: Option<PixelShader<V>>,
}

impl<V, P> Debug for Rasterizer<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rasterizer")
         .field("viewport", &self.viewport)
         .field("vertex_buffer", &self.vertex_buffer.is_some())
         .field("index_buffer", &self.index_buffer.is_some())
         .field("render_target", &self.render_target.is_some())
         .field("depth_buffer", &self.depth_buffer.is_some())
         .field("vertex_shader", &self.vertex_shader.is_some())
         .field("pixel_shader", &self.pixel_shader.is_some())
         .finish()
    }
}

impl<V, P> Default for Rasterizer<V, P> where V: Vertex, P: Pixel {
    fn default() -> Rasterizer<V, P> {
        Rasterizer::new()
    }
}

impl<V, P> Rasterizer<V, P> where V: Vertex, P: Pixel {
    /// Create a rasterizer with nothing bound and the default 1920x1080 viewport
    pub fn new() -> Rasterizer<V, P> {
        Rasterizer {
            vertex_buffer: None,
            index_buffer: None,
            render_target: None,
            depth_buffer: None,
            viewport: Dimensions::default(),
            vertex_shader: None,
            pixel_shader: None,
        }
    }

    /// Sets the screen dimensions triangles are mapped onto.
    ///
    /// Bound buffers are not resized, so the render target has to be at least this large by the next draw.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Dimensions::new(width, height);
    }

    #[inline]
    pub fn viewport(&self) -> Dimensions { self.viewport }

    /// Binds the output buffers.
    ///
    /// Without a depth buffer every covered pixel passes the depth test,
    /// so later triangles simply overwrite earlier ones.
    pub fn set_render_target(&mut self, render_target: SharedResource<P>, depth_buffer: Option<SharedResource<f32>>) {
        self.render_target = Some(render_target);
        self.depth_buffer = depth_buffer;
    }

    pub fn set_vertex_buffer(&mut self, vertex_buffer: SharedResource<V>) {
        self.vertex_buffer = Some(vertex_buffer);
    }

    pub fn set_index_buffer(&mut self, index_buffer: SharedResource<u32>) {
        self.index_buffer = Some(index_buffer);
    }

    /// Sets the vertex shader.
    ///
    /// It receives the vertex position as `(x, y, z, 1)` along with the vertex itself,
    /// and returns the clip-space position and the vertex to interpolate. The rasterizer does not
    /// perform a perspective divide, so a perspective vertex shader divides `x`, `y` and `z` by `w` itself.
    pub fn set_vertex_shader<S>(&mut self, vertex_shader: S) where S: Fn(Vector4<f32>, V) -> (Vector4<f32>, V) + 'static {
        self.vertex_shader = Some(Box::new(vertex_shader));
    }

    /// Sets the pixel shader.
    ///
    /// It receives the interpolated vertex and depth of a covered pixel which passed the depth test.
    pub fn set_pixel_shader<S>(&mut self, pixel_shader: S) where S: Fn(&V, f32) -> Color + 'static {
        self.pixel_shader = Some(Box::new(pixel_shader));
    }

    /// Fills the render target with `clear_color` and the depth buffer, if any, with [`DEFAULT_DEPTH`].
    pub fn clear_render_target(&self, clear_color: P) {
        self.clear_render_target_with_depth(clear_color, DEFAULT_DEPTH)
    }

    /// Fills the render target with `clear_color` and the depth buffer, if any, with `clear_depth`.
    pub fn clear_render_target_with_depth(&self, clear_color: P, clear_depth: f32) {
        match self.render_target {
            Some(ref render_target) => render_target.write().fill(clear_color),
            None => debug!("no render target bound to clear"),
        }

        if let Some(ref depth_buffer) = self.depth_buffer {
            depth_buffer.write().fill(clear_depth);
        }
    }

    fn missing_bindings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.vertex_buffer.is_none() { missing.push("vertex buffer"); }
        if self.index_buffer.is_none() { missing.push("index buffer"); }
        if self.render_target.is_none() { missing.push("render target"); }
        if self.vertex_shader.is_none() { missing.push("vertex shader"); }
        if self.pixel_shader.is_none() { missing.push("pixel shader"); }

        missing
    }

    /// Rasterizes the triangles formed by `num_vertices` indices starting at index `vertex_offset`.
    ///
    /// A trailing group of fewer than three indices, whether cut off by `num_vertices` or by the end
    /// of the index buffer, is ignored.
    ///
    /// If a buffer, the render target or either shader is unbound, nothing is drawn and empty
    /// statistics are returned. Indices referencing missing vertices, a render target smaller than
    /// the viewport, or a depth buffer of different dimensions than the render target are rejected
    /// before anything is written.
    ///
    /// The bound buffers are locked for the duration of the draw, so no guards to them may be held
    /// by the caller.
    pub fn draw(&self, num_vertices: usize, vertex_offset: usize) -> RenderResult<DrawStats> {
        let (vertex_buffer, index_buffer, render_target, vertex_shader, pixel_shader) =
            match (&self.vertex_buffer, &self.index_buffer, &self.render_target, &self.vertex_shader, &self.pixel_shader) {
                (&Some(ref vb), &Some(ref ib), &Some(ref rt), &Some(ref vs), &Some(ref ps)) => (vb, ib, rt, vs, ps),
                _ => {
                    debug!("draw skipped, missing {}", self.missing_bindings().join(", "));
                    return Ok(DrawStats::default());
                }
            };

        let vertices = vertex_buffer.read();
        let indices = index_buffer.read();

        let start = vertex_offset.min(indices.count());
        let end = vertex_offset.saturating_add(num_vertices).min(indices.count());
        let triangle_count = end.saturating_sub(start) / 3;

        let range = start..start + triangle_count * 3;

        for position in range.clone() {
            let index = *indices.item(position);

            if index as usize >= vertices.count() {
                return Err(RenderError::IndexOutOfBounds { position, index, vertex_count: vertices.count() });
            }
        }

        let mut color = render_target.write();

        if color.width() < self.viewport.width as usize || color.height() < self.viewport.height as usize {
            return Err(RenderError::RenderTargetTooSmall {
                width: color.width(),
                height: color.height(),
                viewport: self.viewport,
            });
        }

        let mut depth = self.depth_buffer.as_ref().map(|depth_buffer| depth_buffer.write());

        if let Some(ref depth) = depth {
            if depth.width() != color.width() || depth.height() != color.height() {
                return Err(RenderError::DepthBufferMismatch {
                    width: color.width(),
                    height: color.height(),
                    depth_width: depth.width(),
                    depth_height: depth.height(),
                });
            }
        }

        let mut target = RasterTarget {
            color: &mut *color,
            depth: depth.as_deref_mut(),
            viewport: self.viewport,
        };

        let mut stats = DrawStats::default();

        for triangle in indices.as_slice()[range].chunks_exact(3) {
            let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|index| {
                let vertex = vertices.item(index as usize).clone();

                let (position, attributes) = vertex_shader(vertex.position().to_homogeneous(), vertex);

                ClipVertex::new(position, attributes).to_screen(self.viewport)
            });

            rasterize_triangle(&mut target, &**pixel_shader, &mut stats, &a, &b, &c);

            stats.triangles += 1;
        }

        trace!("drew {} triangles ({} culled), {} fragments written, {} depth rejected",
               stats.triangles, stats.culled, stats.fragments, stats.depth_rejected);

        Ok(stats)
    }

    /// Binds the buffers of `mesh` and draws all of its indices
    pub fn draw_mesh(&mut self, mesh: &Mesh<V>) -> RenderResult<DrawStats> {
        self.set_vertex_buffer(mesh.vertices.clone());
        self.set_index_buffer(mesh.indices.clone());

        self.draw(mesh.index_count(), 0)
    }
}
