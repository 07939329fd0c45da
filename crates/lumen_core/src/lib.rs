//! Lumen Core - scene and camera description.
//!
//! This crate provides:
//!
//! - **Camera settings**: `CameraSettings`, the flat set of view and lens
//!   parameters a render is configured with
//! - **Scene description**: `SceneDescription`, `SphereDescription` and
//!   `MaterialDescription`, loadable from JSON
//! - **Demo scene**: `random_spheres`, the classic "many spheres" cover scene
//!
//! Nothing here knows how to trace a ray; `lumen_renderer` turns these
//! descriptions into intersectable geometry.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} spheres", scene.spheres.len());
//! ```

pub mod camera;
pub mod demo;
pub mod scene;

pub use camera::CameraSettings;
pub use demo::random_spheres;
pub use scene::{
    load_scene, load_scene_from_str, MaterialDescription, SceneDescription, SceneError,
    SceneResult, SphereDescription,
};
