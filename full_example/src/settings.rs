//! Command line settings

use std::path::PathBuf;

use clap::Parser;

/// Render a Wavefront OBJ model with the software rasterizer
#[derive(Debug, Clone, Parser)]
#[command(name = "main", version, about)]
pub struct Settings {
    /// Width of the rendered image in pixels
    #[arg(long, default_value_t = 1920, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the rendered image in pixels
    #[arg(long, default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Path of the OBJ model to render
    #[arg(long)]
    pub model_path: PathBuf,

    /// Where to save the rendered image
    #[arg(long, default_value = "result.png")]
    pub result_path: PathBuf,

    /// Where to save a grayscale image of the depth buffer, if given
    #[arg(long)]
    pub depth_path: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_x: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_y: f32,

    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub camera_z: f32,

    /// Camera pitch in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_theta: f32,

    /// Camera yaw in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub camera_phi: f32,

    /// Vertical angle of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub camera_angle_of_view: f32,

    #[arg(long, default_value_t = 0.001)]
    pub camera_z_near: f32,

    #[arg(long, default_value_t = 100.0)]
    pub camera_z_far: f32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
