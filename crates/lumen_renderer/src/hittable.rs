//! Hittable trait and HitRecord for ray-object intersection.

use lumen_math::{Interval, Point3, Ray, Vec3};

use crate::material::Material;
use crate::sphere::Sphere;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (unit length, always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for a hit at `t`, orienting `outward_normal` against the ray.
    ///
    /// `outward_normal` must be unit length.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3, material: Material) -> Self {
        let mut rec = Self {
            p: ray.at(t),
            normal: outward_normal,
            material,
            t,
            front_face: true,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside the given interval.
    ///
    /// Returns the nearest qualifying hit, or `None`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Every kind of object a scene can hold.
pub enum Shape {
    Sphere(Sphere),
    List(HittableList),
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::List(list) => list.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<HittableList> for Shape {
    fn from(list: HittableList) -> Self {
        Shape::List(list)
    }
}

/// A list of hittable objects, tested linearly.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Shape>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Shape>) {
        self.objects.push(object.into());
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Each member only sees the range in front of the best hit so far,
        // so anything it reports is strictly closer.
        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Lambertian, Metal};
    use lumen_math::Color;

    fn grey() -> Material {
        Lambertian::new(Color::splat(0.5)).into()
    }

    fn query() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_set_face_normal() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Outside: normal faces the ray already
        let rec = HitRecord::new(&ray, 1.0, Vec3::Z, grey());
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);

        // Inside: normal gets flipped
        let rec = HitRecord::new(&ray, 1.0, -Vec3::Z, grey());
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        assert!(world.is_empty());

        for direction in [Vec3::X, Vec3::Y, -Vec3::Z, Vec3::new(1.0, -2.0, 0.5)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert!(world.hit(&ray, query()).is_none());
        }
    }

    #[test]
    fn test_list_returns_nearest() {
        let near: Material = Metal::new(Color::ONE, 0.0).into();
        let mut world = HittableList::new();

        // Insert far-to-near and near-to-far; the nearest must win either way
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, grey()));
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, near));
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -6.0), 1.0, grey()));
        assert_eq!(world.len(), 3);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, query()).unwrap();

        assert!((rec.t - 2.0).abs() < 1e-5);
        assert_eq!(rec.material, near);
    }

    #[test]
    fn test_list_respects_interval() {
        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, grey()));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Both roots (t=2, t=4) lie beyond the upper bound
        assert!(world.hit(&ray, Interval::new(0.001, 1.5)).is_none());

        // The near root is excluded, so the far one is reported
        let rec = world.hit(&ray, Interval::new(2.5, 10.0)).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!(!rec.front_face);
    }

    #[test]
    fn test_nested_lists() {
        let mut inner = HittableList::new();
        inner.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, grey()));

        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -8.0), 1.0, grey()));
        world.add(inner);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = world.hit(&ray, query()).unwrap();
        assert!((rec.t - 4.0).abs() < 1e-5);

        world.clear();
        assert!(world.hit(&ray, query()).is_none());
    }

    #[test]
    fn test_list_matches_brute_force_minimum() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use lumen_math::{random_f32_range, random_unit_vector, random_vec3_range};

        let mut rng = StdRng::seed_from_u64(42);
        let mut spheres = Vec::new();
        let mut world = HittableList::new();
        for _ in 0..20 {
            let center = random_vec3_range(&mut rng, -10.0, 10.0);
            let radius = random_f32_range(&mut rng, 0.5, 2.0);
            spheres.push(Sphere::new(center, radius, grey()));
            world.add(Sphere::new(center, radius, grey()));
        }

        for _ in 0..200 {
            let ray = Ray::new(Vec3::ZERO, random_unit_vector(&mut rng));
            let expected = spheres
                .iter()
                .filter_map(|s| s.hit(&ray, query()))
                .map(|rec| rec.t)
                .fold(None, |best: Option<f32>, t| Some(best.map_or(t, |b| b.min(t))));

            match (world.hit(&ray, query()), expected) {
                (Some(rec), Some(t)) => assert!((rec.t - t).abs() < 1e-5),
                (None, None) => {}
                (got, want) => panic!("got {:?}, want {:?}", got.map(|r| r.t), want),
            }
        }
    }
}
