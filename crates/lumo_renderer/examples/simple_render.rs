//! Simple ray tracer example.
//!
//! Builds a scene in code (mirrored spheres over a checkerboard floor) and
//! saves it as `output.png`.

use lumo_core::{Plane, Scene, Sphere};
use lumo_renderer::{render_parallel, save_image, Color, Point, RenderSettings, SeedPolicy, Vector};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Build the scene
    let scene = build_scene();

    let settings = RenderSettings {
        seed: SeedPolicy::Fixed(7),
        ..Default::default()
    };

    let output = render_parallel(&scene, &settings);

    let filename = "output.png";
    if let Err(err) = save_image(&output.image, filename) {
        log::error!("Failed to save {}: {}", filename, err);
        std::process::exit(1);
    }
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Point::new(0.5, -1.0, 0.5), Point::new(0.0, -0.5, 1.0))
        .with_resolution(512, 512)
        .with_antialias(4);

    // Floor
    scene.add(Plane::checkerboard(
        Point::new(0.0, 0.0, -0.25),
        Vector::Z,
        Color::new(255.0, 255.0, 255.0),
        Color::new(30.0, 30.0, 30.0),
        Vector::new(1.0, 1.0, 0.0),
        0.2,
    ));

    // Three spheres, increasingly mirror-like
    for (i, (color, reflectivity)) in [
        (Color::new(220.0, 40.0, 40.0), 0.0),
        (Color::new(40.0, 200.0, 60.0), 0.3),
        (Color::new(40.0, 80.0, 220.0), 0.7),
    ]
    .into_iter()
    .enumerate()
    {
        let x = 0.2 + 0.3 * i as f64;
        scene.add(Sphere::new(Point::new(x, 1.5, 0.0), 0.15, color, reflectivity));
    }

    log::info!("Created {} objects", scene.len());
    scene
}
