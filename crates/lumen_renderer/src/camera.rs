//! Camera for ray generation.

use lumen_core::CameraSettings;
use lumen_math::{gen_f32, random_in_unit_disk, unit_vector, Point3, Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Built from [`CameraSettings`]; the view basis, pixel grid and defocus
/// disk are derived once in [`Camera::new`] and cached for the render.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    defocus_angle: f32,

    // Cached computed values
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Derive a ready-to-use camera from its settings.
    pub fn new(settings: &CameraSettings) -> Self {
        let image_width = settings.image_width;
        let image_height = settings.image_height();
        let center = settings.look_from;

        // Calculate viewport dimensions from the real (integer) image ratio
        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * settings.focus_dist;
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // Calculate camera basis vectors
        let w = unit_vector(settings.look_from - settings.look_at);
        let u = unit_vector(settings.vup.cross(w));
        let v = w.cross(u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            center - settings.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = settings.focus_dist * (settings.defocus_angle / 2.0).to_radians().tan();

        log::debug!(
            "Camera initialized: {}x{}, vfov {}, defocus radius {}",
            image_width,
            image_height,
            settings.vfov,
            defocus_radius
        );

        Self {
            image_width,
            image_height,
            samples_per_pixel: settings.samples_per_pixel,
            max_depth: settings.max_depth,
            defocus_angle: settings.defocus_angle,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
        }
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target is jittered within the pixel's footprint, and the origin
    /// is jittered across the defocus disk when the lens has an aperture.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + offset.x) * self.pixel_delta_u
            + ((j as f32) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Camera position.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Orthonormal camera frame (u right, v up, w backward).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    /// Center of the upper-left pixel.
    pub fn pixel00_loc(&self) -> Point3 {
        self.pixel00_loc
    }

    /// Offsets to the next pixel right and the next pixel down.
    pub fn pixel_deltas(&self) -> (Vec3, Vec3) {
        (self.pixel_delta_u, self.pixel_delta_v)
    }
}

/// Sample a random point in the square [-0.5, 0.5) x [-0.5, 0.5).
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_camera() -> CameraSettings {
        CameraSettings::new()
            .with_image(1.0, 100)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0)
    }

    #[test]
    fn test_camera_initialize() {
        let settings = CameraSettings::new()
            .with_image(4.0 / 3.0, 800)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 0.0, 1.0);

        let camera = Camera::new(&settings);

        assert_eq!(camera.image_width, 800);
        assert_eq!(camera.image_height, 600);
        assert_eq!(camera.center(), Vec3::ZERO);

        let (u, v, w) = camera.basis();
        assert!((w - Vec3::Z).length() < 0.001);
        assert!((u - Vec3::X).length() < 0.001);
        assert!((v - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let settings = CameraSettings::new()
            .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
            .with_lens(20.0, 0.6, 10.0);
        let (u, v, w) = Camera::new(&settings).basis();

        for axis in [u, v, w] {
            assert!((axis.length() - 1.0).abs() < 1e-5);
        }
        assert!(u.dot(v).abs() < 1e-5);
        assert!(v.dot(w).abs() < 1e-5);
        assert!(w.dot(u).abs() < 1e-5);
        // w points from the target back toward the camera
        assert!(w.dot(Vec3::new(13.0, 2.0, 3.0)) > 0.0);
    }

    #[test]
    fn test_pixel_grid() {
        // 90 degree fov at focus distance 1 gives a 2x2 viewport
        let camera = Camera::new(&square_camera());
        let (du, dv) = camera.pixel_deltas();

        assert!((du - Vec3::new(0.02, 0.0, 0.0)).length() < 1e-6);
        assert!((dv - Vec3::new(0.0, -0.02, 0.0)).length() < 1e-6);
        assert!((camera.pixel00_loc() - Vec3::new(-0.99, 0.99, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_camera_ray_stays_in_pixel() {
        let camera = Camera::new(&square_camera());
        let mut rng = StdRng::seed_from_u64(42);
        let (du, dv) = camera.pixel_deltas();
        let pixel_center = camera.pixel00_loc() + 50.0 * du + 50.0 * dv;

        for _ in 0..100 {
            let ray = camera.get_ray(50, 50, &mut rng);
            // No aperture: every ray starts at the camera center
            assert_eq!(ray.origin(), Vec3::ZERO);
            // The target lies on the focus plane within half a pixel of the center
            let target = ray.at(1.0);
            assert!((target.z + 1.0).abs() < 1e-5);
            assert!((target.x - pixel_center.x).abs() <= 0.5 * du.x + 1e-6);
            assert!((target.y - pixel_center.y).abs() <= 0.5 * dv.y.abs() + 1e-6);
        }
    }

    #[test]
    fn test_defocus_jitters_origin() {
        let settings = square_camera().with_lens(90.0, 10.0, 5.0);
        let camera = Camera::new(&settings);
        let mut rng = StdRng::seed_from_u64(42);
        let radius = 5.0 * (5.0_f32).to_radians().tan();

        let mut moved = false;
        for _ in 0..100 {
            let ray = camera.get_ray(10, 20, &mut rng);
            let offset = ray.origin() - camera.center();
            assert!(offset.length() < radius + 1e-5);
            // Origins stay in the lens plane
            assert!(offset.z.abs() < 1e-6);
            moved |= offset.length() > 0.0;
        }
        assert!(moved);
    }
}
