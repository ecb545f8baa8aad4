//! Infinite plane primitive with an optional checkerboard pattern.

use lumo_math::{project, Color, Point, Ray, Vector};

/// Rays whose direction is this close to perpendicular with the normal are
/// treated as parallel to the plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// How a plane is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// A single color everywhere.
    Solid(Color),
    /// Unit square tiles alternating between two colors.
    ///
    /// `orientation` is one in-plane tiling axis; the other axis is whatever
    /// part of the offset from the plane's reference point is left after
    /// projecting onto it.
    Checker {
        primary: Color,
        secondary: Color,
        orientation: Vector,
    },
}

impl Surface {
    /// The color used when no pattern is evaluated.
    pub fn primary(&self) -> Color {
        match *self {
            Surface::Solid(color) => color,
            Surface::Checker { primary, .. } => primary,
        }
    }
}

/// An infinite plane through `point` with normal `normal`.
///
/// The normal is stored as given and may have any non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Vector,
    surface: Surface,
    reflectivity: f64,
}

impl Plane {
    /// Create a solid-colored plane.
    pub fn new(point: Point, normal: Vector, color: Color, reflectivity: f64) -> Self {
        Self {
            point,
            normal,
            surface: Surface::Solid(color),
            reflectivity,
        }
    }

    /// Create a checkerboard plane tiled along `orientation`.
    pub fn checkerboard(
        point: Point,
        normal: Vector,
        primary: Color,
        secondary: Color,
        orientation: Vector,
        reflectivity: f64,
    ) -> Self {
        Self {
            point,
            normal,
            surface: Surface::Checker {
                primary,
                secondary,
                orientation,
            },
            reflectivity,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    /// Intersection time of `ray` with the plane, if any.
    pub fn collision(&self, ray: &Ray) -> Option<f64> {
        let angle = ray.direction().dot(self.normal);
        if angle.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / angle;
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    /// The stored normal, whatever its length.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Color of the plane at `point`.
    pub fn color_at(&self, point: Point) -> Color {
        match self.surface {
            Surface::Solid(color) => color,
            Surface::Checker {
                primary,
                secondary,
                orientation,
            } => {
                let offset = point - self.point;
                let x = project(offset, orientation);
                let y = offset - x;

                // Magnitudes are non-negative, so truncating after +0.5 rounds
                let ix = (x.length() + 0.5) as u64;
                let iy = (y.length() + 0.5) as u64;
                if (ix + iy) % 2 == 0 {
                    primary
                } else {
                    secondary
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::new(255.0, 255.0, 255.0);
    const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    fn floor() -> Plane {
        Plane::checkerboard(Point::ORIGIN, Vector::Y, WHITE, BLACK, Vector::X, 0.0)
    }

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(Point::new(0.0, -1.0, 0.0), Vector::Y, WHITE, 0.0);
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.0, -1.0, 1.0));

        let t = plane.collision(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-12);
        assert!((ray.at(t).y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_plane_unnormalized_normal() {
        let unit = Plane::new(Point::new(0.0, 0.0, 4.0), Vector::Z, WHITE, 0.0);
        let scaled = Plane::new(Point::new(0.0, 0.0, 4.0), Vector::new(0.0, 0.0, -9.0), WHITE, 0.0);
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.1, 0.0, 1.0));

        assert_eq!(unit.collision(&ray), scaled.collision(&ray));
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Plane::new(Point::ORIGIN, Vector::Y, WHITE, 0.0);
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), Vector::new(1.0, 1e-9, 0.0));
        assert_eq!(plane.collision(&ray), None);
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = Plane::new(Point::new(0.0, -1.0, 0.0), Vector::Y, WHITE, 0.0);
        let ray = Ray::new(Point::ORIGIN, Vector::Y);
        assert_eq!(plane.collision(&ray), None);
    }

    #[test]
    fn test_plane_normal_is_stored_value() {
        let normal = Vector::new(0.0, 3.0, 4.0);
        let plane = Plane::new(Point::ORIGIN, normal, WHITE, 0.25);
        assert_eq!(plane.normal(), normal);
        assert_eq!(plane.reflectivity(), 0.25);
    }

    #[test]
    fn test_solid_plane_color() {
        let plane = Plane::new(Point::ORIGIN, Vector::Y, WHITE, 0.0);
        assert_eq!(plane.color_at(Point::new(3.7, 0.0, -12.2)), WHITE);
        assert_eq!(plane.surface().primary(), WHITE);
    }

    #[test]
    fn test_checkerboard_flips_on_unit_step() {
        let plane = floor();

        for start in [Point::new(0.2, 0.0, 0.2), Point::new(0.7, 0.0, 0.3)] {
            let c0 = plane.color_at(start);
            let c1 = plane.color_at(start + Vector::X);
            let c2 = plane.color_at(start + 2.0 * Vector::X);

            assert_ne!(c0, c1);
            assert_eq!(c0, c2);
        }
    }

    #[test]
    fn test_checkerboard_tile_parity() {
        let plane = floor();

        // Tiles are centered on integer coordinates
        assert_eq!(plane.color_at(Point::new(0.2, 0.0, 0.2)), WHITE);
        assert_eq!(plane.color_at(Point::new(0.7, 0.0, 0.3)), BLACK);
        assert_eq!(plane.color_at(Point::new(0.7, 0.0, 0.8)), WHITE);
        assert_eq!(plane.color_at(Point::new(0.2, 0.0, 1.3)), BLACK);
    }

    #[test]
    fn test_checkerboard_follows_orientation() {
        // Tiles aligned with the diagonal of the XZ plane
        let axis = Vector::new(1.0, 0.0, 1.0);
        let plane = Plane::checkerboard(Point::ORIGIN, Vector::Y, WHITE, BLACK, axis, 0.0);
        let step = axis.normalize();

        let start = Point::new(0.1, 0.0, 0.0);
        assert_ne!(plane.color_at(start), plane.color_at(start + step));
        assert_eq!(plane.color_at(start), plane.color_at(start + 2.0 * step));
    }
}
