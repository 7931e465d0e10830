//! Renders a model into an image file

use std::time::Instant;

use log::info;

use softraster::image_compat::{depth_to_image, ImageResource};
use softraster::{DrawStats, MeshVertex, Rasterizer, RenderError, RenderResult, Resource, SharedResource, UnsignedColor};

use crate::camera::Camera;
use crate::model::{Model, ModelError};
use crate::settings::Settings;

/// Background color of every render
pub const CLEAR_COLOR: UnsignedColor = UnsignedColor::new(56, 178, 37);

/// Far plane in normalized device coordinates
pub const CLEAR_DEPTH: f32 = 1.0;

pub struct RasterizationRenderer {
    settings: Settings,
    rasterizer: Rasterizer<MeshVertex, UnsignedColor>,
    render_target: SharedResource<UnsignedColor>,
    depth_buffer: SharedResource<f32>,
    model: Model,
    camera: Camera,
}

impl RasterizationRenderer {
    /// Allocates the render target and depth buffer at the configured size, then loads the model and camera
    pub fn init(settings: Settings) -> Result<RasterizationRenderer, ModelError> {
        let (width, height) = (settings.width as usize, settings.height as usize);

        let render_target = Resource::with_dimensions(width, height).into_shared();
        let depth_buffer = Resource::with_dimensions(width, height).into_shared();

        let mut rasterizer = Rasterizer::new();

        rasterizer.set_viewport(settings.width, settings.height);
        rasterizer.set_render_target(render_target.clone(), Some(depth_buffer.clone()));

        let model = Model::load_obj(&settings.model_path)?;
        let camera = Camera::from_settings(&settings);

        Ok(RasterizationRenderer { settings, rasterizer, render_target, depth_buffer, model, camera })
    }

    #[inline]
    pub fn camera(&self) -> &Camera { &self.camera }

    #[inline]
    pub fn model(&self) -> &Model { &self.model }

    #[inline]
    pub fn render_target(&self) -> &SharedResource<UnsignedColor> { &self.render_target }

    /// Draws every shape of the model with its diffuse color and saves the result
    pub fn render(&mut self) -> RenderResult<DrawStats> {
        let start = Instant::now();

        self.rasterizer.clear_render_target_with_depth(CLEAR_COLOR, CLEAR_DEPTH);

        let mvp = self.camera.projection_matrix() * self.camera.view_matrix() * self.model.world_matrix();

        self.rasterizer.set_vertex_shader(move |position, vertex| {
            let mut transformed = mvp * position;

            // perspective divide
            if transformed.w != 0.0 {
                let w = transformed.w;

                transformed.x /= w;
                transformed.y /= w;
                transformed.z /= w;
            }

            (transformed, vertex)
        });

        self.rasterizer.set_pixel_shader(|vertex: &MeshVertex, _| vertex.diffuse);

        let mut stats = DrawStats::default();

        for mesh in self.model.meshes() {
            stats += self.rasterizer.draw_mesh(mesh)?;
        }

        info!("rendered {} triangles ({} culled), {} fragments in {:?}",
              stats.triangles, stats.culled, stats.fragments, start.elapsed());

        self.render_target.read().save(&self.settings.result_path)?;

        info!("saved render to {}", self.settings.result_path.display());

        if let Some(ref depth_path) = self.settings.depth_path {
            depth_to_image(&self.depth_buffer.read()).save(depth_path).map_err(RenderError::from)?;

            info!("saved depth to {}", depth_path.display());
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod test {
    use std::ffi::OsString;
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_triangle() {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("red.mtl"), "newmtl red\nKd 1 0 0\n").unwrap();

        // counter-clockwise on screen when seen from the default camera
        fs::write(dir.path().join("triangle.obj"), "\
mtllib red.mtl
v -0.5 -0.5 0
v 0 0.5 0
v 0.5 -0.5 0
usemtl red
f 1 2 3
").unwrap();

        let result = dir.path().join("result.png");
        let depth = dir.path().join("depth.png");

        let args: Vec<OsString> = vec![
            "main".into(),
            "--width".into(), "64".into(),
            "--height".into(), "48".into(),
            "--model-path".into(), dir.path().join("triangle.obj").into(),
            "--result-path".into(), result.clone().into(),
            "--depth-path".into(), depth.clone().into(),
        ];

        let settings = Settings::try_parse_from(args).unwrap();

        let mut renderer = RasterizationRenderer::init(settings).unwrap();

        let stats = renderer.render().unwrap();

        assert_eq!(stats.triangles, 1);
        assert_eq!(stats.culled, 0);
        assert!(stats.fragments > 0);

        assert_eq!((renderer.camera().width, renderer.camera().height), (64.0, 48.0));
        assert_eq!(renderer.camera().position, nalgebra::Point3::new(0.0, 0.0, 2.0));
        assert_eq!(*renderer.render_target().read().item_at(32, 28), UnsignedColor::new(255, 0, 0));

        let image = image::open(&result).unwrap().to_rgb8();

        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(image.get_pixel(0, 0).0, [56, 178, 37]);
        assert_eq!(image.get_pixel(32, 28).0, [255, 0, 0]);

        assert_eq!(image::open(&depth).unwrap().to_luma8().dimensions(), (64, 48));
    }

    #[test]
    fn test_init_missing_model() {
        let settings = Settings::try_parse_from(["main", "--model-path", "/nonexistent/model.obj"]).unwrap();

        assert!(RasterizationRenderer::init(settings).is_err());
    }
}
