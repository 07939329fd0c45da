//! Camera configuration.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// View, lens and quality settings for a render.
///
/// Every field has a default, so scene files only need to list the
/// values they change. Vectors are written as `[x, y, z]` arrays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Ratio of image width over height
    pub aspect_ratio: f32,
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Random samples averaged per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,

    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Point the camera looks from
    pub look_from: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Camera-relative "up" direction
    pub vup: Vec3,

    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f32,
    /// Distance from `look_from` to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            look_from: Vec3::new(0.0, 0.0, -1.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

impl CameraSettings {
    /// Create settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image aspect ratio and width. Height is derived from both.
    pub fn with_image(mut self, aspect_ratio: f32, image_width: u32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self.image_width = image_width;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Image height in pixels: `width / aspect_ratio`, floored, at least 1.
    pub fn image_height(&self) -> u32 {
        let height = (self.image_width as f32 / self.aspect_ratio) as u32;
        height.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CameraSettings::default();
        assert_eq!(settings.image_width, 100);
        assert_eq!(settings.samples_per_pixel, 10);
        assert_eq!(settings.max_depth, 10);
        assert_eq!(settings.look_from, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(settings.focus_dist, 10.0);
    }

    #[test]
    fn test_image_height() {
        let settings = CameraSettings::new().with_image(16.0 / 9.0, 400);
        assert_eq!(settings.image_height(), 225);

        // Floors the division
        let settings = CameraSettings::new().with_image(1.5, 100);
        assert_eq!(settings.image_height(), 66);

        // Never drops below one row
        let settings = CameraSettings::new().with_image(1000.0, 10);
        assert_eq!(settings.image_height(), 1);
    }

    #[test]
    fn test_builders() {
        let settings = CameraSettings::new()
            .with_quality(64, 8)
            .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_lens(20.0, 0.6, 10.0);

        assert_eq!(settings.samples_per_pixel, 64);
        assert_eq!(settings.max_depth, 8);
        assert_eq!(settings.look_from, Vec3::new(13.0, 2.0, 3.0));
        assert_eq!(settings.vfov, 20.0);
        assert_eq!(settings.defocus_angle, 0.6);
    }

    #[test]
    fn test_partial_json() {
        let settings: CameraSettings =
            serde_json::from_str(r#"{ "image_width": 320, "look_from": [1.0, 2.0, 3.0] }"#)
                .unwrap();

        assert_eq!(settings.image_width, 320);
        assert_eq!(settings.look_from, Vec3::new(1.0, 2.0, 3.0));
        // Unlisted fields keep their defaults
        assert_eq!(settings.vfov, 90.0);
        assert_eq!(settings.vup, Vec3::Y);
    }
}
