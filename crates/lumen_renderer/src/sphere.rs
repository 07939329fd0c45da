//! Sphere primitive for ray tracing.

use lumen_core::SphereDescription;
use lumen_math::{Interval, Point3, Ray};

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f32, material: impl Into<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material: material.into(),
        }
    }

    /// Get the sphere's center.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl From<&SphereDescription> for Sphere {
    fn from(desc: &SphereDescription) -> Self {
        Sphere::new(desc.center, desc.radius, desc.material)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material))
    }
}
