//! Shader geometry structures

pub mod dimension;
pub mod coordinate;
pub mod clipvertex;
pub mod screenvertex;
pub mod triangle;

pub use self::dimension::Dimensions;
pub use self::coordinate::Coordinate;
pub use self::clipvertex::ClipVertex;
pub use self::screenvertex::ScreenVertex;
pub use self::triangle::{edge_function, Barycentric, BoundingBox, Triangle};
