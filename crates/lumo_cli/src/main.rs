use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lumo_core::{load_scene, Scene};
use lumo_renderer::{render, render_parallel, save_image, RenderSettings, SeedPolicy, DEFAULT_BUCKET_SIZE};

/// Render a JSON scene of spheres and planes to an image.
#[derive(Debug, Parser)]
#[command(name = "lumo", version)]
struct Opt {
    /// Scene description (JSON)
    scene: PathBuf,
    /// Output image; the format follows the extension
    output: PathBuf,
    /// Fixed seed for reproducible antialiasing jitter
    #[arg(long)]
    seed: Option<u64>,
    /// Worker threads (defaults to one per core)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    threads: Option<u64>,
    /// Render on the main thread only
    #[arg(long)]
    sequential: bool,
    /// Bucket edge length for the parallel renderer
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    bucket_size: u32,
    /// Override the scene's output width
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,
    /// Override the scene's output height
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
    /// Override the scene's samples per pixel
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    antialias: Option<u32>,
}

impl Opt {
    fn apply_overrides(&self, scene: &mut Scene) {
        if let Some(width) = self.width {
            scene.width = width;
        }
        if let Some(height) = self.height {
            scene.height = height;
        }
        if let Some(antialias) = self.antialias {
            scene.antialias = antialias;
        }
    }

    fn settings(&self) -> RenderSettings {
        RenderSettings {
            seed: self.seed.map_or(SeedPolicy::Entropy, SeedPolicy::Fixed),
            bucket_size: self.bucket_size,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opt::parse();

    if let Some(threads) = opts.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let mut scene = load_scene(&opts.scene)
        .with_context(|| format!("Failed to load scene {}", opts.scene.display()))?;
    opts.apply_overrides(&mut scene);

    let settings = opts.settings();
    let output = if opts.sequential {
        render(&scene, &settings)
    } else {
        render_parallel(&scene, &settings)
    };

    save_image(&output.image, &opts.output)
        .with_context(|| format!("Failed to write {}", opts.output.display()))?;

    Ok(())
}
