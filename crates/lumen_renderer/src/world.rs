//! Turning a scene description into intersectable geometry.

use lumen_core::SceneDescription;

use crate::{HittableList, Sphere};

/// Build the world for a scene.
pub fn build_world(scene: &SceneDescription) -> HittableList {
    let mut world = HittableList::new();
    for desc in &scene.spheres {
        world.add(Sphere::from(desc));
    }
    log::debug!("Built world with {} objects", world.len());
    world
}
