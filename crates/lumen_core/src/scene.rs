//! Scene description and loading.
//!
//! A scene is a camera plus a flat list of spheres, each carrying its own
//! material. Scene files are JSON:
//!
//! ```json
//! {
//!   "camera": { "image_width": 400, "aspect_ratio": 1.7778 },
//!   "spheres": [
//!     { "center": [0, -1000, 0], "radius": 1000,
//!       "material": { "type": "lambertian", "albedo": [0.5, 0.5, 0.5] } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use lumen_math::{Color, Point3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::CameraSettings;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {message}")]
    InvalidSphere { index: usize, message: String },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Surface material of a sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    /// Diffuse surface
    Lambertian { albedo: Color },
    /// Reflective surface, `fuzz` in [0, 1] roughens the reflection
    Metal { albedo: Color, fuzz: f32 },
    /// Refractive surface such as glass or water
    Dielectric { ior: f32 },
}

/// A sphere and its material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: Point3,
    pub radius: f32,
    pub material: MaterialDescription,
}

impl SphereDescription {
    /// Create a new sphere description.
    pub fn new(center: Point3, radius: f32, material: MaterialDescription) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Everything needed to render an image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

impl SceneDescription {
    /// Create an empty scene with the given camera.
    pub fn new(camera: CameraSettings) -> Self {
        Self {
            camera,
            spheres: Vec::new(),
        }
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: SphereDescription) {
        self.spheres.push(sphere);
    }

    /// Check the preconditions the renderer relies on.
    ///
    /// The renderer never guards against degenerate input, so anything
    /// loaded from outside the program is checked here once.
    pub fn validate(&self) -> SceneResult<()> {
        let camera = &self.camera;

        if camera.image_width == 0 {
            return Err(SceneError::InvalidCamera("image_width must be positive".into()));
        }
        if !(camera.aspect_ratio > 0.0) {
            return Err(SceneError::InvalidCamera("aspect_ratio must be positive".into()));
        }
        if camera.samples_per_pixel == 0 {
            return Err(SceneError::InvalidCamera(
                "samples_per_pixel must be positive".into(),
            ));
        }
        if (camera.look_from - camera.look_at).length_squared() == 0.0 {
            return Err(SceneError::InvalidCamera(
                "look_from and look_at must differ".into(),
            ));
        }
        if camera.vup.cross(camera.look_from - camera.look_at).length_squared() == 0.0 {
            return Err(SceneError::InvalidCamera(
                "vup must not be parallel to the view direction".into(),
            ));
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !(sphere.radius > 0.0) {
                return Err(SceneError::InvalidSphere {
                    index,
                    message: format!("radius must be positive, got {}", sphere.radius),
                });
            }
            if let MaterialDescription::Dielectric { ior } = sphere.material {
                if !(ior > 0.0) {
                    return Err(SceneError::InvalidSphere {
                        index,
                        message: format!("ior must be positive, got {}", ior),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Load and validate a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;
    log::info!(
        "Loaded {} spheres from {}",
        scene.spheres.len(),
        path.display()
    );
    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(contents: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(contents)?;
    scene.validate()?;
    Ok(scene)
}
