// Re-export glam for convenience
pub use glam::*;

// Lumo math types
mod color;
mod point;
mod ray;
pub use color::Color;
pub use point::Point;
pub use ray::Ray;

/// A direction or displacement in 3D space.
///
/// Directions are never implicitly normalized; callers normalize where a
/// unit vector is required.
pub type Vector = DVec3;

/// Project `a` onto `b`: `(a·b / b·b) * b`.
///
/// `b` must be non-degenerate. A zero-length `b` yields NaN components.
#[inline]
pub fn project(a: Vector, b: Vector) -> Vector {
    b * (a.dot(b) / b.dot(b))
}
