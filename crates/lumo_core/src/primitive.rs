//! The `Primitive` sum type and the record of a ray hitting one.

use lumo_math::{Color, Point, Ray, Vector};

use crate::plane::Plane;
use crate::sphere::Sphere;

/// A renderable shape.
///
/// Every query is a pure read; nothing here mutates the primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Intersection time along `ray`, if the ray hits in its forward direction.
    #[inline]
    pub fn collision(&self, ray: &Ray) -> Option<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.collision(ray),
            Primitive::Plane(plane) => plane.collision(ray),
        }
    }

    /// Surface normal at `point`. Callers normalize.
    #[inline]
    pub fn normal(&self, point: Point) -> Vector {
        match self {
            Primitive::Sphere(sphere) => sphere.normal(point),
            Primitive::Plane(plane) => plane.normal(),
        }
    }

    /// Fraction of outgoing light treated as mirror reflection.
    #[inline]
    pub fn reflectivity(&self) -> f64 {
        match self {
            Primitive::Sphere(sphere) => sphere.reflectivity(),
            Primitive::Plane(plane) => plane.reflectivity(),
        }
    }

    /// Local color at `point`.
    #[inline]
    pub fn color_at(&self, point: Point) -> Color {
        match self {
            Primitive::Sphere(sphere) => sphere.color(),
            Primitive::Plane(plane) => plane.color_at(point),
        }
    }

    /// Short name for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

/// The nearest primitive struck by a ray.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// The primitive that was hit
    pub primitive: &'a Primitive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_sphere() {
        let sphere = Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, Color::new(1.0, 2.0, 3.0), 0.4);
        let primitive = Primitive::from(sphere.clone());
        let ray = Ray::new(Point::ORIGIN, Vector::Z);

        assert_eq!(primitive.collision(&ray), sphere.collision(&ray));
        assert_eq!(primitive.normal(Point::new(0.0, 0.0, 4.0)), Vector::new(0.0, 0.0, -1.0));
        assert_eq!(primitive.reflectivity(), 0.4);
        assert_eq!(primitive.color_at(Point::ORIGIN), Color::new(1.0, 2.0, 3.0));
        assert_eq!(primitive.kind(), "sphere");
    }

    #[test]
    fn test_dispatch_plane() {
        let normal = Vector::new(0.0, 2.0, 0.0);
        let plane = Plane::new(Point::ORIGIN, normal, Color::WHITE, 0.1);
        let primitive = Primitive::from(plane);
        let ray = Ray::new(Point::new(0.0, 3.0, 0.0), -Vector::Y);

        assert_eq!(primitive.collision(&ray), Some(3.0));
        assert_eq!(primitive.normal(Point::new(8.0, 0.0, 1.0)), normal);
        assert_eq!(primitive.reflectivity(), 0.1);
        assert_eq!(primitive.color_at(Point::new(8.0, 0.0, 1.0)), Color::WHITE);
        assert_eq!(primitive.kind(), "plane");
    }
}
