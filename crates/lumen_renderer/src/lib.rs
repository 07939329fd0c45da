//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over spheres with diffuse, metal and glass
//! materials, a thin-lens camera and a sky-gradient background.
//!
//! Rendering is single-threaded. Scene objects and materials are read-only
//! once built and every random draw goes through a caller-supplied
//! generator, so pixels can be split across workers without locking.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sphere;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList, Shape};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use output::{OutputError, OutputResult};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    SELF_INTERSECTION_EPSILON,
};
pub use sphere::Sphere;
pub use world::build_world;

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
