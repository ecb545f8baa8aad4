use crate::{Point, Vector};

/// A ray in 3D space with an origin and a direction.
///
/// Rays are built fresh for every intersection query and every bounce.
/// The direction is not required to be normalized, so the parameter `t`
/// is measured in multiples of the direction's length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `from` and passing through `to` at `t = 1`.
    #[inline]
    pub fn through(from: Point, to: Point) -> Self {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// The same ray with its origin nudged `epsilon` along the direction.
    ///
    /// Secondary rays leave a surface this way so they do not immediately
    /// re-hit it.
    #[inline]
    pub fn offset(&self, epsilon: f64) -> Self {
        Self::new(self.at(epsilon), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::ORIGIN, Vector::X);

        assert_eq!(ray.at(0.0), Point::ORIGIN);
        assert_eq!(ray.at(1.0), Point::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Point::new(2.5, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_through() {
        let ray = Ray::through(Point::new(0.0, 0.0, -1.0), Point::new(0.5, 0.0, 1.0));
        assert_eq!(ray.direction(), Vector::new(0.5, 0.0, 2.0));
        assert_eq!(ray.at(1.0), Point::new(0.5, 0.0, 1.0));
    }

    #[test]
    fn test_ray_offset_keeps_direction() {
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.0, 2.0, 0.0));
        let nudged = ray.offset(1e-6);

        assert_eq!(nudged.direction(), ray.direction());
        assert!((nudged.origin().y - 2e-6).abs() < 1e-15);
    }
}
