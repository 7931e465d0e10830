use super::Coordinate;

/// Defines a vertex in screen-space, ready for rasterization.
///
/// Clip-space vertices are transformed to screen-space after the vertex shader
/// stage but before the pixel shader stage.
#[derive(Debug, Clone)]
pub struct ScreenVertex<V> {
    /// Pixel this vertex lands on.
    pub coordinate: Coordinate,
    /// Clip-space `z` as returned by the vertex shader. Smaller is closer.
    pub depth: f32,
    /// Vertex attributes returned by the vertex shader.
    pub attributes: V,
}
