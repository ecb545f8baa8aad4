//! Lumo Renderer - CPU ray tracing
//!
//! A recursive ray tracer with Phong-style local shading, hard shadows from
//! a single point light, mirror reflection and jittered antialiasing.
//!
//! Rendering reads the `Scene` and nothing else, so pixels are independent
//! and the bucketed driver spreads them over the rayon pool.

mod bucket;
mod output;
mod renderer;
mod shading;
mod stats;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use output::{color_to_rgb, save_image, OutputError};
pub use renderer::{
    pixel_rng, render, render_pixel, sample_point, ImageBuffer, RenderOutput, RenderSettings,
    SeedPolicy,
};
pub use shading::{point_color, ray_color, trace, REFLECTIVITY_THRESHOLD};
pub use stats::TraceStats;

/// Re-export the scene and math types the renderer works with
pub use lumo_core::{Primitive, Scene};
pub use lumo_math::{Color, Point, Ray, Vector};
