//! Lumo Core - primitives and the scene they live in.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane` (solid or checkerboard) and the
//!   `Primitive` sum type the renderer dispatches on
//! - **Scene**: lighting parameters, output settings and the
//!   nearest-intersection query
//! - **Loading**: JSON scene descriptions
//!
//! # Example
//!
//! ```ignore
//! use lumo_core::load_scene;
//!
//! let scene = load_scene("scenes/demo.json")?;
//! println!("Loaded {} primitives at {}x{}",
//!     scene.len(),
//!     scene.width,
//!     scene.height);
//! ```

pub mod loader;
pub mod plane;
pub mod primitive;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use plane::{Plane, Surface};
pub use primitive::{HitRecord, Primitive};
pub use scene::{Scene, RAY_EPSILON};
pub use sphere::Sphere;
