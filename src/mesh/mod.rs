//! Indexed triangle meshes

use std::fmt::{self, Debug};

pub mod vertex;

use crate::error::{RenderError, RenderResult};
use crate::resource::{Resource, SharedResource};

pub use self::vertex::{MeshVertex, Vertex};

/// A vertex buffer and the index buffer describing its triangles.
///
/// Both buffers are shared handles, so a mesh can be cloned cheaply and bound to a rasterizer
/// while the caller keeps its own reference.
#[derive(Clone)]
pub struct Mesh<V> {
    pub vertices: SharedResource<V>,
    pub indices: SharedResource<u32>,
}

impl<V: Vertex> Mesh<V> {
    /// Creates a mesh from vertices and triangle indices.
    ///
    /// Fails if the indices cannot be split into triangles or reference a missing vertex.
    pub fn new(vertices: Vec<V>, indices: Vec<u32>) -> RenderResult<Mesh<V>> {
        if indices.len() % 3 != 0 {
            return Err(RenderError::InvalidIndexCount(indices.len()));
        }

        if let Some((position, &index)) = indices.iter().enumerate().find(|&(_, &index)| index as usize >= vertices.len()) {
            return Err(RenderError::IndexOutOfBounds { position, index, vertex_count: vertices.len() });
        }

        Ok(Mesh {
            vertices: Resource::from_vec(vertices).into_shared(),
            indices: Resource::from_vec(indices).into_shared(),
        })
    }

    /// Creates a mesh where every three consecutive vertices form a triangle.
    pub fn from_vertices(vertices: Vec<V>) -> RenderResult<Mesh<V>> {
        let len = vertices.len();

        if len % 3 != 0 {
            return Err(RenderError::InvalidIndexCount(len));
        }

        let indices = (0..len as u32).collect();

        Mesh::new(vertices, indices)
    }

    /// Number of indices, the vertex count to pass to `draw`
    pub fn index_count(&self) -> usize {
        self.indices.read().count()
    }
}

impl<V> Debug for Mesh<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mesh {{ vertices: {}, indices: {} }}", self.vertices.read().count(), self.indices.read().count())
    }
}

#[cfg(test)]
mod test {
    use nalgebra::Point3;

    use super::*;

    fn at(x: f32, y: f32) -> MeshVertex {
        MeshVertex { position: Point3::new(x, y, 0.0), ..MeshVertex::default() }
    }

    #[test]
    fn test_sequential_indices() {
        let mesh = Mesh::from_vertices(vec![at(0.0, 0.0), at(1.0, 0.0), at(0.0, 1.0),
                                            at(1.0, 1.0), at(2.0, 1.0), at(1.0, 2.0)]).unwrap();

        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.indices.read().as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_vertex_count() {
        match Mesh::from_vertices(vec![at(0.0, 0.0), at(1.0, 0.0)]) {
            Err(RenderError::InvalidIndexCount(2)) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_index_out_of_bounds() {
        match Mesh::new(vec![at(0.0, 0.0), at(1.0, 0.0), at(0.0, 1.0)], vec![0, 1, 3]) {
            Err(RenderError::IndexOutOfBounds { position: 2, index: 3, vertex_count: 3 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
