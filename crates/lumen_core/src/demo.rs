//! Built-in demo scene.

use lumen_math::{gen_f32, random_f32_range, random_vec3, random_vec3_range, Color, Point3, Vec3};
use rand::RngCore;

use crate::camera::CameraSettings;
use crate::scene::{MaterialDescription, SceneDescription, SphereDescription};

/// The "random spheres" cover scene.
///
/// A large grey ground sphere, a grid of small randomly placed spheres with
/// mixed materials, and three large feature spheres (glass, diffuse, metal),
/// viewed through a narrow lens with slight depth of field.
pub fn random_spheres(rng: &mut dyn RngCore) -> SceneDescription {
    let camera = CameraSettings::new()
        .with_image(16.0 / 9.0, 1200)
        .with_quality(100, 50)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    let mut scene = SceneDescription::new(camera);

    // Ground
    scene.add(SphereDescription::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        MaterialDescription::Lambertian {
            albedo: Color::new(0.5, 0.5, 0.5),
        },
    ));

    let clearing = Point3::new(4.0, 0.2, 0.0);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Point3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - clearing).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                MaterialDescription::Lambertian {
                    albedo: random_vec3(rng) * random_vec3(rng),
                }
            } else if choose_mat < 0.95 {
                MaterialDescription::Metal {
                    albedo: random_vec3_range(rng, 0.5, 1.0),
                    fuzz: random_f32_range(rng, 0.0, 0.5),
                }
            } else {
                MaterialDescription::Dielectric { ior: 1.5 }
            };

            scene.add(SphereDescription::new(center, 0.2, material));
        }
    }

    scene.add(SphereDescription::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        MaterialDescription::Dielectric { ior: 1.5 },
    ));
    scene.add(SphereDescription::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        MaterialDescription::Lambertian {
            albedo: Color::new(0.4, 0.2, 0.1),
        },
    ));
    scene.add(SphereDescription::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        MaterialDescription::Metal {
            albedo: Color::new(0.7, 0.6, 0.5),
            fuzz: 0.0,
        },
    ));

    log::debug!("Built random spheres scene with {} spheres", scene.spheres.len());
    scene
}
