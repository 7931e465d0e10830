//! Conversion of render targets into `image` crate buffers

use std::path::Path;

use image::{GrayImage, Luma, RgbImage};

use crate::color::UnsignedColor;
use crate::error::{RenderError, RenderResult};
use crate::rasterizer::DEFAULT_DEPTH;
use crate::resource::Resource;

/// Render target resources which can be copied into an image
pub trait ImageResource {
    /// Copies the resource row by row into an RGB image.
    ///
    /// Returns `None` if the resource dimensions do not fit an image.
    fn copy_to_image(&self) -> Option<RgbImage>;

    /// Copies the resource and saves it, with the format chosen by the file extension
    fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()>;
}

impl ImageResource for Resource<UnsignedColor> {
    fn copy_to_image(&self) -> Option<RgbImage> {
        let mut raw = Vec::with_capacity(self.count() * 3);

        for color in self {
            raw.extend_from_slice(&[color.r, color.g, color.b]);
        }

        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;

        RgbImage::from_raw(width, height, raw)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let image = self.copy_to_image().ok_or(RenderError::ImageDimensions {
            width: self.width(),
            height: self.height(),
        })?;

        image.save(path)?;

        Ok(())
    }
}

/// Renders a depth buffer as a grayscale image, for debugging.
///
/// Depths are normalized over the finite values below [`DEFAULT_DEPTH`], with the nearest black
/// and the farthest white. Untouched and non-finite depths are white.
pub fn depth_to_image(depth: &Resource<f32>) -> GrayImage {
    let written = || depth.iter().cloned().filter(|d| d.is_finite() && *d < DEFAULT_DEPTH);

    let near = written().fold(::std::f32::INFINITY, f32::min);
    let far = written().fold(::std::f32::NEG_INFINITY, f32::max);

    let range = far - near;

    GrayImage::from_fn(depth.width() as u32, depth.height() as u32, |x, y| {
        let d = *depth.item_at(x as usize, y as usize);

        let value = if !d.is_finite() || d >= DEFAULT_DEPTH {
            255
        } else if range > 0.0 {
            ((d - near) / range * 255.0) as u8
        } else {
            0
        };

        Luma([value])
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_copy_to_image() {
        let mut target = Resource::with_dimensions(2, 2);

        *target.item_at_mut(1, 0) = UnsignedColor::new(255, 0, 0);
        *target.item_at_mut(0, 1) = UnsignedColor::new(0, 0, 255);

        let image = target.copy_to_image().unwrap();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 255]);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("target.png");

        let mut target = Resource::with_dimensions(3, 2);
        *target.item_at_mut(2, 1) = UnsignedColor::new(10, 20, 30);

        target.save(&path).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_save_unsupported_format_fails() {
        let dir = tempfile::TempDir::new().unwrap();

        let target: Resource<UnsignedColor> = Resource::with_dimensions(2, 2);

        match target.save(dir.path().join("target.unknown")) {
            Err(RenderError::Image(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_depth_to_image() {
        let depth = Resource::from_vec(vec![0.5, 1.0, DEFAULT_DEPTH, 0.75]);

        let image = depth_to_image(&depth);

        assert_eq!(image.dimensions(), (4, 1));
        assert_eq!(image.get_pixel(0, 0).0, [0]);
        assert_eq!(image.get_pixel(1, 0).0, [255]);
        assert_eq!(image.get_pixel(2, 0).0, [255]);
        assert_eq!(image.get_pixel(3, 0).0, [127]);
    }

    #[test]
    fn test_depth_to_image_cleared() {
        let depth: Resource<f32> = {
            let mut d = Resource::with_dimensions(3, 2);
            d.fill(DEFAULT_DEPTH);
            d
        };

        assert!(depth_to_image(&depth).pixels().all(|p| p.0 == [255]));
    }
}
