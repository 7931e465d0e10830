#[macro_use]
extern crate softraster;

use nalgebra::{Point3, Vector2};

use softraster::{Color, Interpolate, Rasterizer, Resource, UnsignedColor, Vertex};

declare_attributes! {
    /// Vertex with only a position and a texture coordinate.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TexturedVertex {
        /// Position in normalized device coordinates
        pub position: Point3<f32>,
        pub uv: Vector2<f32>,
        pub layer: u8,
    }
}

impl Vertex for TexturedVertex {
    fn position(&self) -> Point3<f32> { self.position }
}

#[test]
fn test_declared_attributes_interpolate_field_wise() {
    let a = TexturedVertex { position: Point3::new(0.0, 0.0, 0.0), uv: Vector2::new(0.0, 0.0), layer: 0 };
    let b = TexturedVertex { position: Point3::new(4.0, 0.0, 0.0), uv: Vector2::new(1.0, 0.0), layer: 100 };
    let c = TexturedVertex { position: Point3::new(0.0, 4.0, 0.0), uv: Vector2::new(0.0, 1.0), layer: 200 };

    let mid = TexturedVertex::barycentric_interpolate(0.5, &a, 0.25, &b, 0.25, &c);

    assert_eq!(mid, TexturedVertex {
        position: Point3::new(1.0, 1.0, 0.0),
        uv: Vector2::new(0.25, 0.25),
        layer: 75,
    });
}

#[test]
fn test_render_declared_vertex() {
    let target = Resource::with_dimensions(4, 4).into_shared();

    let mut rasterizer = Rasterizer::<TexturedVertex, UnsignedColor>::new();

    // covers the whole 4x4 viewport
    let vertices = vec![
        TexturedVertex { position: Point3::new(-1.0, 1.0, 0.0), uv: Vector2::new(0.0, 0.0), layer: 0 },
        TexturedVertex { position: Point3::new(-1.0, -5.0, 0.0), uv: Vector2::new(0.0, 1.0), layer: 0 },
        TexturedVertex { position: Point3::new(5.0, 1.0, 0.0), uv: Vector2::new(1.0, 0.0), layer: 0 },
    ];

    rasterizer.set_viewport(4, 4);
    rasterizer.set_render_target(target.clone(), None);
    rasterizer.set_vertex_buffer(Resource::from_vec(vertices).into_shared());
    rasterizer.set_index_buffer(Resource::from_vec(vec![0, 1, 2]).into_shared());
    rasterizer.set_vertex_shader(|position, vertex| (position, vertex));
    rasterizer.set_pixel_shader(|vertex: &TexturedVertex, _| Color::new(vertex.uv.x, vertex.uv.y, 1.0));

    let stats = rasterizer.draw(3, 0).unwrap();

    assert_eq!(stats.fragments, 16);

    assert_eq!(*target.read().item_at(0, 0), UnsignedColor::new(0, 0, 255));
    assert!(target.read().iter().all(|p| p.b == 255));
}
