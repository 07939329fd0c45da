use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{load_scene, random_spheres};
use lumen_renderer::{build_world, render, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the random spheres scene");
            random_spheres(&mut rng)
        }
    };

    args.apply_overrides(&mut scene);
    scene.validate().context("Invalid render settings")?;

    if let Some(path) = &args.export_scene {
        let json = serde_json::to_string_pretty(&scene)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        log::info!("Exported scene to {}", path.display());
    }

    let world = build_world(&scene);
    let camera = Camera::new(&scene.camera);

    let image = render(&camera, &world, &mut rng);
    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image {}", args.output.display()))?;

    Ok(())
}
