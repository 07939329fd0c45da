//! Vector kernel helpers on top of [`glam::Vec3`].
//!
//! glam provides the arithmetic, indexing, dot/cross products and exact
//! normalization. This module adds what a path tracer needs on top:
//! degenerate-direction detection, a fast approximate normalization,
//! random sampling and reflection/refraction.
//!
//! All sampling functions draw from a caller-supplied generator so every
//! render thread can own independent random state.

use glam::Vec3;
use rand::{Rng, RngCore};

/// Magnitude below which every component counts as zero for [`Vec3Ext::near_zero`].
pub const NEAR_ZERO_EPSILON: f32 = 1e-8;

/// Initial-guess constant for the bit-level inverse square root.
const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Extra vector operations used by the renderer.
pub trait Vec3Ext {
    /// True when every component has magnitude below [`NEAR_ZERO_EPSILON`].
    fn near_zero(&self) -> bool;

    /// Normalize using [`fast_inv_sqrt`] instead of a division by the length.
    fn normalize_fast(self) -> Self;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.x.abs() < NEAR_ZERO_EPSILON
            && self.y.abs() < NEAR_ZERO_EPSILON
            && self.z.abs() < NEAR_ZERO_EPSILON
    }

    #[inline]
    fn normalize_fast(self) -> Self {
        unit_vector_fast(self)
    }
}

/// Approximate `1 / sqrt(t)`.
///
/// Reinterprets the float bits to get an initial guess, then refines it
/// with two Newton-Raphson steps on `f(y) = 1/y² - t`. The result is
/// within 1% of the exact value for positive normal inputs.
#[inline]
pub fn fast_inv_sqrt(t: f32) -> f32 {
    let half = 0.5 * t;
    let mut y = f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(t.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// Exact unit vector (division by the length).
///
/// A zero-length input yields NaN components; callers guarantee non-zero input.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Approximate unit vector using [`fast_inv_sqrt`].
#[inline]
pub fn unit_vector_fast(v: Vec3) -> Vec3 {
    v * fast_inv_sqrt(v.length_squared())
}

/// Generate a random f32 in [0.0, 1.0).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Generate a random f32 in [min, max).
#[inline]
pub fn random_f32_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Random vector with each component in [0.0, 1.0).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Random vector with each component in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
    )
}

/// Uniform random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniformly distributed over the sphere.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // Points this close to the origin lose too much precision to normalize.
        if p.length_squared() > 1e-12 {
            return unit_vector_fast(p);
        }
    }
}

/// Random unit vector in the hemisphere around `normal`.
pub fn random_on_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let on_unit_sphere = random_unit_vector(rng);
    if on_unit_sphere.dot(normal) > 0.0 {
        on_unit_sphere
    } else {
        -on_unit_sphere
    }
}

/// Uniform random point inside the unit disk in the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with relative index `etai_over_etat`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::splat(1e-9).near_zero());

        // Any single component above the threshold disqualifies it
        assert!(!Vec3::new(1e-9, 1e-3, 1e-9).near_zero());
        assert!(!Vec3::new(0.0, 0.0, -1e-7).near_zero());
    }

    #[test]
    fn test_fast_inv_sqrt_accuracy() {
        for &t in &[1e-4_f32, 0.01, 0.25, 1.0, 2.0, 3.0, 100.0, 12345.0] {
            let exact = 1.0 / t.sqrt();
            let approx = fast_inv_sqrt(t);
            let rel_err = ((approx - exact) / exact).abs();
            assert!(rel_err < 0.01, "t={} exact={} approx={}", t, exact, approx);
        }
    }

    #[test]
    fn test_unit_vector_exact_and_fast_agree() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let exact = unit_vector(v);
        let fast = unit_vector_fast(v);

        assert!((exact.length() - 1.0).abs() < 1e-6);
        assert!((fast.length() - 1.0).abs() < 0.01);
        assert!((exact - fast).length() < 0.01);
        assert!((v.normalize_fast() - fast).length() < 1e-7);
    }

    #[test]
    fn test_random_vec3_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_vec3_range(&mut rng, -2.0, 3.0);
            for i in 0..3 {
                assert!(v[i] >= -2.0 && v[i] < 3.0);
            }
            let u = random_vec3(&mut rng);
            for i in 0..3 {
                assert!(u[i] >= 0.0 && u[i] < 1.0);
            }
        }
    }

    #[test]
    fn test_random_in_unit_sphere() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 0.01, "length {}", v.length());
        }
    }

    #[test]
    fn test_random_on_hemisphere() {
        let mut rng = StdRng::seed_from_u64(3);
        let normal = Vec3::new(0.0, 0.0, 1.0);
        for _ in 0..500 {
            assert!(random_on_hemisphere(&mut rng, normal).dot(normal) >= 0.0);
        }
    }

    #[test]
    fn test_random_in_unit_disk() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert_eq!(p.z, 0.0);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        assert_eq!(reflect(v, n), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through() {
        // Normal incidence does not bend regardless of the index ratio
        let uv = Vec3::new(0.0, -1.0, 0.0);
        let refracted = refract(uv, Vec3::Y, 1.0 / 1.5);
        assert!((refracted - uv).length() < 1e-6);
    }

    #[test]
    fn test_refract_bends_toward_normal() {
        // Entering a denser medium bends the ray toward the normal (Snell's law)
        let uv = unit_vector(Vec3::new(1.0, -1.0, 0.0));
        let eta = 1.0 / 1.5;
        let refracted = refract(uv, Vec3::Y, eta);

        let sin_in = uv.x.abs();
        let sin_out = refracted.x.abs() / refracted.length();
        assert!((sin_out - eta * sin_in).abs() < 1e-5);
        assert!(refracted.y < 0.0);
    }
}
