//! Driving application for the softraster rasterizer
//!
//! Loads a Wavefront OBJ model, places a camera, rasterizes every shape of the model with its
//! material's diffuse color and saves the result as an image.

pub mod settings;
pub mod camera;
pub mod model;
pub mod renderer;

pub use self::settings::Settings;
pub use self::camera::Camera;
pub use self::model::{Model, ModelError};
pub use self::renderer::RasterizationRenderer;
