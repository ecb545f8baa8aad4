//! Pixel sampling and the sequential render driver.
//!
//! Pixel `(i, j)` covers the square `[i/w, (i+1)/w) x (1-(j+1)/w, 1-j/w]` of
//! the `y = 0` plane, where `w` is the image width. Both axes are scaled by
//! the width, so non-square images sample a square domain.

use std::time::{Duration, Instant};

use lumo_core::Scene;
use lumo_math::{Color, Point};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::shading::point_color;
use crate::stats::TraceStats;

/// Where antialiasing jitter gets its randomness.
///
/// Either way every pixel gets its own generator derived from one base
/// seed, so the image does not depend on the order pixels are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Reproducible: the same seed always yields the same image.
    Fixed(u64),
    /// A fresh base seed per render, drawn from the OS entropy source.
    #[default]
    Entropy,
}

impl SeedPolicy {
    /// The base seed for one render.
    pub fn resolve(&self) -> u64 {
        match *self {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => rand::random(),
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Seeding of the antialiasing jitter
    pub seed: SeedPolicy,
    /// Edge length of the square buckets used by the parallel driver
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            seed: SeedPolicy::Entropy,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Random source for one pixel.
pub fn pixel_rng(seed: u64, x: u32, y: u32, width: u32) -> StdRng {
    let index = u64::from(y) * u64::from(width) + u64::from(x);
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Point on the image plane for pixel `(x, y)` offset by `jitter` in
/// `[0, 1)` pixel units on each axis.
pub fn sample_point(scene: &Scene, x: u32, y: u32, jitter: (f64, f64)) -> Point {
    let scale = f64::from(scene.width);
    Point::new(
        (f64::from(x) + jitter.0) / scale,
        0.0,
        1.0 - (f64::from(y) + jitter.1) / scale,
    )
}

/// Render a single pixel with multi-sampling.
///
/// Draws `scene.antialias` jittered samples from `rng` and averages them.
pub fn render_pixel(
    scene: &Scene,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
    stats: &mut TraceStats,
) -> Color {
    let samples = scene.antialias.max(1);
    let mut pixel_color = Color::BLACK;

    for _ in 0..samples {
        let jitter = (rng.gen::<f64>(), rng.gen::<f64>());
        pixel_color += point_color(scene, sample_point(scene, x, y, jitter), stats);
    }

    // Average the samples
    pixel_color / f64::from(samples)
}

/// Unclamped render output addressed by `(column, row)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major pixel colors
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: ImageBuffer,
    pub stats: TraceStats,
    /// Base seed the jitter was drawn from
    pub seed: u64,
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, settings: &RenderSettings) -> RenderOutput {
    let seed = settings.seed.resolve();
    log_start(scene, seed);

    let start = Instant::now();
    let mut image = ImageBuffer::new(scene.width, scene.height);
    let mut stats = TraceStats::default();

    for y in 0..scene.height {
        for x in 0..scene.width {
            let mut rng = pixel_rng(seed, x, y, scene.width);
            let color = render_pixel(scene, x, y, &mut rng, &mut stats);
            image.set(x, y, color);
        }
    }

    log_summary(&stats, start.elapsed());
    RenderOutput { image, stats, seed }
}

pub(crate) fn log_start(scene: &Scene, seed: u64) {
    log::info!(
        "Rendering {}x{} @ {} spp, {} primitives (seed {})",
        scene.width,
        scene.height,
        scene.antialias,
        scene.len(),
        seed
    );
}

pub(crate) fn log_summary(stats: &TraceStats, elapsed: Duration) {
    log::info!(
        "Rendered in {:.2?}: {} primary, {} shadow, {} reflection rays (max depth {})",
        elapsed,
        stats.primary_rays,
        stats.shadow_rays,
        stats.reflection_rays,
        stats.max_depth
    );
}
