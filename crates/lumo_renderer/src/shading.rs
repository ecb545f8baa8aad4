//! Recursive ray shading.
//!
//! Each hit is lit with an ambient term, a diffuse and a Blinn specular term
//! when the light is visible, and a mirror bounce weighted by the surface's
//! reflectivity. Colors stay on the 0-255 scale and are never clamped here.

use lumo_core::{Scene, RAY_EPSILON};
use lumo_math::{project, Color, Point, Ray};

use crate::stats::TraceStats;

/// Surfaces at or below this reflectivity are not worth a bounce.
pub const REFLECTIVITY_THRESHOLD: f64 = 0.003;

/// Compute the color seen along `ray`, `depth` bounces deep.
pub fn ray_color(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    trace(scene, ray, depth, &mut TraceStats::default())
}

/// Color of a primary ray leaving the image plane at `point`.
///
/// The ray points away from the camera through `point`.
pub fn point_color(scene: &Scene, point: Point, stats: &mut TraceStats) -> Color {
    stats.primary_rays += 1;
    let ray = Ray::new(point, point - scene.camera);
    trace(scene, &ray, 0, stats)
}

/// [`ray_color`] that also counts the rays it casts.
///
/// Recursion only happens through the mirror bounce, and only while
/// `depth < scene.max_reflections`, so a call chain is at most
/// `max_reflections + 1` deep.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
    let Some(hit) = scene.nearest_intersection(ray) else {
        return scene.background;
    };

    let point = ray.at(hit.t);
    let primitive = hit.primitive;
    let reflectivity = primitive.reflectivity();
    let base_color = primitive.color_at(point);

    let ambient = scene.ambient * (1.0 - reflectivity);
    let mut color = ambient * base_color;

    let normal = primitive.normal(point).normalize();
    let view = (-ray.direction()).normalize();

    stats.shadow_rays += 1;
    if !scene.in_shadow(point) {
        let light_dir = (scene.light - point).normalize();

        let diffuse = (1.0 - ambient) * (1.0 - reflectivity) * normal.dot(light_dir).max(0.0);
        color += diffuse * base_color;

        let half = (view + light_dir).normalize();
        let highlight = half.dot(normal).max(0.0).powf(scene.specular_power);
        color += scene.specular * highlight * Color::WHITE;
    }

    if depth < scene.max_reflections && reflectivity > REFLECTIVITY_THRESHOLD {
        let mirrored = view + 2.0 * (project(view, normal) - view);
        let bounce = Ray::new(point, mirrored).offset(RAY_EPSILON);

        stats.reflection_rays += 1;
        stats.max_depth = stats.max_depth.max(depth + 1);

        let reflected = trace(scene, &bounce, depth + 1, stats);
        color += (1.0 - ambient) * reflectivity * reflected;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumo_core::{Plane, Sphere};
    use lumo_math::Vector;

    const RED: Color = Color::new(255.0, 0.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 255.0);

    fn assert_color_eq(actual: Color, expected: Color) {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn forward() -> Ray {
        Ray::new(Point::ORIGIN, Vector::Z)
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 5.0, 0.0))
            .with_primitive(Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0, RED, 0.5));

        assert_eq!(ray_color(&scene, &forward(), 0), scene.background);
    }

    #[test]
    fn test_single_sphere_lighting() {
        // Light straight behind the viewer: full diffuse and full highlight
        let scene = Scene::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, -10.0))
            .with_primitive(Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, RED, 0.0));

        let mut stats = TraceStats::default();
        let color = trace(&scene, &forward(), 0, &mut stats);

        let ambient = 0.2 * 255.0;
        let diffuse = 0.8 * 255.0;
        let specular = 0.5 * 255.0;
        assert_color_eq(color, Color::new(ambient + diffuse + specular, specular, specular));
        assert!(color.r > color.g && color.r > color.b);
        assert_eq!(stats.reflection_rays, 0);
        assert_eq!(stats.shadow_rays, 1);
    }

    #[test]
    fn test_shadowed_point_is_ambient_only() {
        let target = Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, RED, 0.0);
        let occluder = Sphere::new(Point::new(0.0, 5.0, -1.0), 1.0, BLUE, 0.0);
        let light = Point::new(0.0, 10.0, -6.0);

        let lit = Scene::new(Point::new(0.0, 0.0, -1.0), light).with_primitive(target.clone());
        let shadowed = lit.clone().with_primitive(occluder);

        let lit_color = ray_color(&lit, &forward(), 0);
        let shadowed_color = ray_color(&shadowed, &forward(), 0);

        assert_color_eq(shadowed_color, 0.2 * RED);
        assert!(lit_color.r > shadowed_color.r);
    }

    #[test]
    fn test_below_threshold_reflectivity_does_not_bounce() {
        let scene = Scene::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, -10.0))
            .with_primitive(Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, RED, 0.002));

        let mut stats = TraceStats::default();
        trace(&scene, &forward(), 0, &mut stats);
        assert_eq!(stats.reflection_rays, 0);
    }

    /// Two half-mirrors facing each other across the origin.
    fn hall_of_mirrors(max_reflections: u32) -> Scene {
        Scene::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 4.0, 0.0))
            .with_max_reflections(max_reflections)
            .with_primitive(Plane::new(Point::new(0.0, 0.0, 5.0), -Vector::Z, Color::WHITE, 0.5))
            .with_primitive(Plane::new(Point::new(0.0, 0.0, -5.0), Vector::Z, Color::WHITE, 0.5))
    }

    #[test]
    fn test_zero_max_reflections_never_recurses() {
        let scene = hall_of_mirrors(0);

        let mut stats = TraceStats::default();
        let color = trace(&scene, &forward(), 0, &mut stats);

        assert_eq!(stats.reflection_rays, 0);
        assert_eq!(stats.max_depth, 0);

        // The far mirror blocks the light, leaving only the ambient share
        assert_color_eq(color, 0.1 * Color::WHITE);
    }

    #[test]
    fn test_reflection_depth_is_bounded() {
        for max_reflections in [1, 3, 6] {
            let scene = hall_of_mirrors(max_reflections);

            let mut stats = TraceStats::default();
            trace(&scene, &forward(), 0, &mut stats);

            assert_eq!(stats.max_depth, max_reflections);
            assert_eq!(stats.reflection_rays, max_reflections as u64);
            assert_eq!(stats.shadow_rays, max_reflections as u64 + 1);
        }
    }

    #[test]
    fn test_reflection_adds_light() {
        let flat = ray_color(&hall_of_mirrors(0), &forward(), 0);
        let mirrored = ray_color(&hall_of_mirrors(4), &forward(), 0);
        assert!(mirrored.r > flat.r);
    }

    #[test]
    fn test_point_color_counts_primary_ray() {
        let scene = Scene::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, -10.0))
            .with_primitive(Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0, RED, 0.0));

        let mut stats = TraceStats::default();
        let color = point_color(&scene, Point::ORIGIN, &mut stats);

        assert_eq!(stats.primary_rays, 1);
        assert_color_eq(color, ray_color(&scene, &forward(), 0));
    }
}
