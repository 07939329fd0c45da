use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_core::SceneDescription;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a scene of spheres with a Monte Carlo path tracer")]
pub struct Args {
    /// Scene file (JSON). Renders the built-in random spheres scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image path (.ppm for plain-text PPM, anything else via the image crate)
    #[arg(short, long, default_value = "image.ppm")]
    pub output: PathBuf,

    /// Override the image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the number of samples per pixel
    #[arg(long, short = 'n')]
    pub samples: Option<u32>,

    /// Override the maximum number of ray bounces
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for a reproducible render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the scene that is about to be rendered as JSON
    #[arg(long)]
    pub export_scene: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides to a scene's camera.
    pub fn apply_overrides(&self, scene: &mut SceneDescription) {
        if let Some(width) = self.width {
            scene.camera.image_width = width;
        }
        if let Some(samples) = self.samples {
            scene.camera.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            scene.camera.max_depth = max_depth;
        }
    }
}
