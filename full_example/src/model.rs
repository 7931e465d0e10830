//! Wavefront OBJ model loading

use std::path::{Path, PathBuf};

use log::{debug, info};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};
use thiserror::Error;

use softraster::{Color, Mesh, MeshVertex, RenderError};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: tobj::LoadError,
    },
    #[error("failed to load materials of {}: {source}", path.display())]
    Materials {
        path: PathBuf,
        source: tobj::LoadError,
    },
    #[error("shape '{shape}' references missing {attribute} {index}")]
    MissingAttribute {
        shape: String,
        attribute: &'static str,
        index: u32,
    },
    #[error(transparent)]
    Mesh(#[from] RenderError),
}

/// A model made of one mesh per OBJ shape
#[derive(Debug)]
pub struct Model {
    meshes: Vec<Mesh<MeshVertex>>,
    textures: Vec<PathBuf>,
}

/// Reads `N` consecutive floats of the element at `index`
fn attribute<const N: usize>(data: &[f32], index: u32) -> Option<[f32; N]> {
    let start = index as usize * N;

    data.get(start..start + N)?.try_into().ok()
}

#[derive(Clone, Copy, Default)]
struct MaterialColors {
    diffuse: Color,
    ambient: Color,
    emissive: Color,
}

impl MaterialColors {
    fn new(material: Option<&tobj::Material>) -> MaterialColors {
        match material {
            Some(material) => MaterialColors {
                diffuse: material.diffuse.map(Color::from).unwrap_or_default(),
                ambient: material.ambient.map(Color::from).unwrap_or_default(),
                emissive: material.emissive.map(Color::from).unwrap_or_default(),
            },
            None => MaterialColors::default(),
        }
    }
}

impl Model {
    /// Loads and triangulates an OBJ file along with its materials.
    ///
    /// Every face corner becomes its own vertex. Missing normals are replaced by the face normal,
    /// missing texture coordinates by `(0, 0)`. A material library which cannot be loaded fails the
    /// whole model.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Model, ModelError> {
        let path = path.as_ref();

        let options = tobj::LoadOptions {
            triangulate: true,
            ignore_points: true,
            ignore_lines: true,
            ..tobj::LoadOptions::default()
        };

        let (shapes, materials) = tobj::load_obj(path, &options)
            .map_err(|source| ModelError::Load { path: path.to_owned(), source })?;

        let materials = materials.map_err(|source| ModelError::Materials { path: path.to_owned(), source })?;

        let base_folder = path.parent().unwrap_or_else(|| Path::new(""));

        let mut meshes = Vec::with_capacity(shapes.len());

        for shape in &shapes {
            let material = shape.mesh.material_id.and_then(|id| materials.get(id));

            let mesh = build_mesh(shape, MaterialColors::new(material))?;

            debug!("loaded shape '{}' with {} vertices", shape.name, mesh.index_count());

            meshes.push(mesh);
        }

        let mut textures: Vec<PathBuf> = Vec::new();

        for texture in materials.iter().filter_map(|material| material.diffuse_texture.as_ref()) {
            let texture_path = base_folder.join(texture);

            if !texture.is_empty() && !textures.contains(&texture_path) {
                textures.push(texture_path);
            }
        }

        info!("loaded {} shapes and {} materials from {}", meshes.len(), materials.len(), path.display());

        Ok(Model { meshes, textures })
    }

    #[inline]
    pub fn meshes(&self) -> &[Mesh<MeshVertex>] { &self.meshes }

    /// Diffuse texture files referenced by the materials, without duplicates
    #[inline]
    pub fn texture_files(&self) -> &[PathBuf] { &self.textures }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        Matrix4::identity()
    }
}

fn build_mesh(shape: &tobj::Model, colors: MaterialColors) -> Result<Mesh<MeshVertex>, ModelError> {
    let mesh = &shape.mesh;

    let missing = |attribute: &'static str, index: u32| ModelError::MissingAttribute {
        shape: shape.name.clone(),
        attribute,
        index,
    };

    let mut vertices = Vec::with_capacity(mesh.indices.len());

    for (face, corners) in mesh.indices.chunks_exact(3).enumerate() {
        let mut positions = [Point3::origin(); 3];

        for (position, &index) in positions.iter_mut().zip(corners) {
            *position = Point3::from(attribute::<3>(&mesh.positions, index).ok_or_else(|| missing("position", index))?);
        }

        let face_normal = (positions[1] - positions[0]).cross(&(positions[2] - positions[0]))
                                                        .try_normalize(::std::f32::EPSILON)
                                                        .unwrap_or_else(Vector3::zeros);

        for (corner, position) in positions.iter().enumerate() {
            let offset = face * 3 + corner;

            let normal = match mesh.normal_indices.get(offset) {
                Some(&index) => Vector3::from(attribute::<3>(&mesh.normals, index).ok_or_else(|| missing("normal", index))?),
                None => face_normal,
            };

            let texcoord = match mesh.texcoord_indices.get(offset) {
                Some(&index) => Vector2::from(attribute::<2>(&mesh.texcoords, index).ok_or_else(|| missing("texture coordinate", index))?),
                None => Vector2::zeros(),
            };

            vertices.push(MeshVertex {
                position: *position,
                normal,
                texcoord,
                diffuse: colors.diffuse,
                ambient: colors.ambient,
                emissive: colors.emissive,
            });
        }
    }

    Ok(Mesh::from_vertices(vertices)?)
}
