//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! on the rayon pool and then copied into their own cells of the image.

use std::time::Instant;

use lumo_core::Scene;
use lumo_math::Color;
use rayon::prelude::*;

use crate::renderer::{log_start, log_summary, pixel_rng, render_pixel, ImageBuffer, RenderOutput, RenderSettings};
use crate::stats::TraceStats;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Split a `width` x `height` image into buckets in row-major order.
///
/// Edge buckets are clipped to the image. A `bucket_size` of zero is
/// treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            let bw = size.min(width - x);
            let bh = size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
        }
    }

    buckets
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
    /// Rays cast for this bucket
    pub stats: TraceStats,
}

/// Render a single bucket.
///
/// Each pixel draws from its own generator, so a bucket renders the same
/// no matter which thread picks it up.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, seed: u64) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut stats = TraceStats::default();

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let x = bucket.x + local_x;
            let y = bucket.y + local_y;
            let mut rng = pixel_rng(seed, x, y, scene.width);
            pixels.push(render_pixel(scene, x, y, &mut rng, &mut stats));
        }
    }

    BucketResult { bucket: *bucket, pixels, stats }
}

/// Render the entire scene, one bucket per rayon task.
///
/// Produces exactly the image [`crate::render`] produces for the same seed.
pub fn render_parallel(scene: &Scene, settings: &RenderSettings) -> RenderOutput {
    let seed = settings.seed.resolve();
    log_start(scene, seed);

    let start = Instant::now();
    let buckets = generate_buckets(scene.width, scene.height, settings.bucket_size);
    log::debug!(
        "{} buckets of up to {}px on {} threads",
        buckets.len(),
        settings.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, seed))
        .collect();

    let mut image = ImageBuffer::new(scene.width, scene.height);
    let mut stats = TraceStats::default();
    for result in results {
        let bucket = result.bucket;
        for (i, color) in result.pixels.into_iter().enumerate() {
            let i = i as u32;
            image.set(bucket.x + i % bucket.width, bucket.y + i / bucket.width, color);
        }
        stats += result.stats;
    }

    log_summary(&stats, start.elapsed());
    RenderOutput { image, stats, seed }
}
