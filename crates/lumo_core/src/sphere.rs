//! Sphere primitive.

use lumo_math::{Color, Point, Ray, Vector};

/// A solid-colored sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
    color: Color,
    reflectivity: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point, radius: f64, color: Color, reflectivity: f64) -> Self {
        Self {
            center,
            radius,
            color,
            reflectivity,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }

    /// Intersection time of `ray` with the sphere, if any.
    ///
    /// Solves `t²(v·v) + 2t((p−c)·v) + ((p−c)·(p−c) − r²) = 0`. Only
    /// non-negative roots count; when the origin is inside the sphere the
    /// exit point is the one reported.
    pub fn collision(&self, ray: &Ray) -> Option<f64> {
        let direction = ray.direction();
        let oc = ray.origin() - self.center;

        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        // NaN roots (zero-length direction) fail both comparisons
        match (t1 >= 0.0, t2 >= 0.0) {
            (true, true) => Some(t1.min(t2)),
            (true, false) => Some(t1),
            (false, true) => Some(t2),
            (false, false) => None,
        }
    }

    /// Outward normal at `point`. Not normalized: its length is the radius.
    pub fn normal(&self, point: Point) -> Vector {
        point - self.center
    }
}
