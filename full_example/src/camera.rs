//! Orbit-style camera producing view and projection matrices

use nalgebra::{Matrix4, Point3, Vector3};

use crate::settings::Settings;

/// Camera described by a position and two angles.
///
/// `theta` pitches the camera up and down, `phi` turns it around the y-axis.
/// With both at zero the camera's z-axis is the world z-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub theta: f32,
    pub phi: f32,
    /// Vertical angle of view in radians
    pub angle_of_view: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Camera {
    fn default() -> Camera {
        Camera {
            position: Point3::origin(),
            theta: 0.0,
            phi: 0.0,
            angle_of_view: 60.0f32.to_radians(),
            z_near: 0.001,
            z_far: 100.0,
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl Camera {
    pub fn from_settings(settings: &Settings) -> Camera {
        Camera {
            position: Point3::new(settings.camera_x, settings.camera_y, settings.camera_z),
            theta: settings.camera_theta,
            phi: settings.camera_phi,
            angle_of_view: settings.camera_angle_of_view.to_radians(),
            z_near: settings.camera_z_near,
            z_far: settings.camera_z_far,
            width: settings.width as f32,
            height: settings.height as f32,
        }
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    pub fn direction(&self) -> Vector3<f32> {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();

        Vector3::new(sin_phi * cos_theta, sin_theta, cos_phi * cos_theta)
    }

    pub fn right(&self) -> Vector3<f32> {
        self.direction().cross(&Vector3::y()).normalize()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(&self.direction()).normalize()
    }

    /// World to camera transform, with the camera axes as rows
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let direction = self.direction();
        let right = self.right();
        let up = self.up();

        let position = self.position.coords;

        Matrix4::new(right.x, right.y, right.z, -right.dot(&position),
                     up.x, up.y, up.z, -up.dot(&position),
                     direction.x, direction.y, direction.z, -direction.dot(&position),
                     0.0, 0.0, 0.0, 1.0)
    }

    /// OpenGL-style perspective projection mapping the near and far planes to -1 and 1
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let f = 1.0 / (self.angle_of_view * 0.5).tan();
        let range_inv = 1.0 / (self.z_near - self.z_far);

        Matrix4::new(f / self.aspect_ratio(), 0.0, 0.0, 0.0,
                     0.0, f, 0.0, 0.0,
                     0.0, 0.0, (self.z_far + self.z_near) * range_inv, 2.0 * self.z_far * self.z_near * range_inv,
                     0.0, 0.0, -1.0, 0.0)
    }
}
