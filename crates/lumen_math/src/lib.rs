// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;
pub mod vec3;

pub use interval::Interval;
pub use ray::Ray;
pub use vec3::{
    fast_inv_sqrt, gen_f32, random_f32_range, random_in_unit_disk, random_in_unit_sphere,
    random_on_hemisphere, random_unit_vector, random_vec3, random_vec3_range, reflect, refract,
    unit_vector, unit_vector_fast, Vec3Ext, NEAR_ZERO_EPSILON,
};

/// Point in world space. Same representation as [`Vec3`].
pub type Point3 = Vec3;

/// Linear RGB color, one channel per component. Same representation as [`Vec3`].
pub type Color = Vec3;
