//! JSON scene loading.
//!
//! A scene file names the camera, the light, the sample count and a list of
//! objects. Lighting and output settings are optional and fall back to the
//! `Scene` defaults:
//!
//! ```json
//! {
//!   "camera": [0.5, -1, 0.5],
//!   "light": [0, -0.5, 1],
//!   "antialias": 4,
//!   "objects": [
//!     {"type": "sphere", "center": [0.5, 1, 0.5], "radius": 0.5,
//!      "color": [255, 0, 0], "reflectivity": 0.2},
//!     {"type": "plane", "point": [0, 0, 0], "normal": [0, 0, 1],
//!      "color": [255, 255, 255], "reflectivity": 0,
//!      "checkerboard": true, "color2": [0, 0, 0], "orientation": [1, 1, 0]}
//!   ]
//! }
//! ```
//!
//! Anything the renderer cannot sensibly use is rejected here, before a
//! render starts.

use std::fs;
use std::path::Path;

use lumo_math::{Color, Point, Vector};
use serde::Deserialize;
use thiserror::Error;

use crate::plane::Plane;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Errors that can occur while loading a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {kind} at objects[{index}]: {message}")]
    InvalidObject {
        index: usize,
        kind: &'static str,
        message: String,
    },

    #[error("Invalid setting `{field}`: {message}")]
    InvalidSetting {
        field: &'static str,
        message: String,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Deserialize)]
struct SceneFile {
    camera: [f64; 3],
    light: [f64; 3],
    antialias: u32,
    width: Option<u32>,
    height: Option<u32>,
    ambient: Option<f64>,
    specular: Option<f64>,
    specular_power: Option<f64>,
    max_reflections: Option<u32>,
    background: Option<[f64; 3]>,
    #[serde(default)]
    objects: Vec<ObjectDesc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDesc {
    Sphere {
        color: [f64; 3],
        reflectivity: f64,
        center: [f64; 3],
        radius: f64,
    },
    Plane {
        color: [f64; 3],
        reflectivity: f64,
        point: [f64; 3],
        normal: [f64; 3],
        #[serde(default)]
        checkerboard: bool,
        color2: Option<[f64; 3]>,
        orientation: Option<[f64; 3]>,
    },
}

impl ObjectDesc {
    fn kind(&self) -> &'static str {
        match self {
            ObjectDesc::Sphere { .. } => "sphere",
            ObjectDesc::Plane { .. } => "plane",
        }
    }

    fn into_primitive(self, index: usize) -> LoadResult<Primitive> {
        let kind = self.kind();
        let invalid = |message: String| LoadError::InvalidObject {
            index,
            kind,
            message,
        };

        let primitive = match self {
            ObjectDesc::Sphere {
                color,
                reflectivity,
                center,
                radius,
            } => {
                check_reflectivity(reflectivity).map_err(invalid)?;
                if radius.is_nan() || radius <= 0.0 {
                    return Err(invalid(format!("radius must be positive, got {radius}")));
                }
                Sphere::new(center.into(), radius, color.into(), reflectivity).into()
            }
            ObjectDesc::Plane {
                color,
                reflectivity,
                point,
                normal,
                checkerboard,
                color2,
                orientation,
            } => {
                check_reflectivity(reflectivity).map_err(invalid)?;
                let normal = Vector::from_array(normal);
                if normal.length_squared() == 0.0 {
                    return Err(invalid("normal must not be zero".to_string()));
                }

                if checkerboard {
                    let secondary = color2
                        .ok_or_else(|| invalid("checkerboard plane is missing `color2`".to_string()))?;
                    let orientation = orientation.map(Vector::from_array).ok_or_else(|| {
                        invalid("checkerboard plane is missing `orientation`".to_string())
                    })?;
                    if orientation.length_squared() == 0.0 {
                        return Err(invalid("orientation must not be zero".to_string()));
                    }
                    if orientation.dot(normal).abs() > 1e-6 * orientation.length() * normal.length() {
                        log::warn!(
                            "objects[{}]: checker orientation {:?} is not perpendicular to normal {:?}",
                            index,
                            orientation,
                            normal
                        );
                    }

                    Plane::checkerboard(
                        point.into(),
                        normal,
                        color.into(),
                        Color::from(secondary),
                        orientation,
                        reflectivity,
                    )
                    .into()
                } else {
                    Plane::new(point.into(), normal, color.into(), reflectivity).into()
                }
            }
        };

        Ok(primitive)
    }
}

fn check_reflectivity(reflectivity: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&reflectivity) {
        Ok(())
    } else {
        Err(format!("reflectivity must be within [0, 1], got {reflectivity}"))
    }
}

fn positive(field: &'static str, value: u32) -> LoadResult<u32> {
    if value == 0 {
        return Err(LoadError::InvalidSetting {
            field,
            message: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

/// Load a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded {} primitives from {} ({}x{}, {} spp)",
        scene.len(),
        path.display(),
        scene.width,
        scene.height,
        scene.antialias
    );

    Ok(scene)
}

/// Load a scene from JSON text.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let file: SceneFile = serde_json::from_str(text)?;

    let mut scene = Scene::new(Point::from(file.camera), Point::from(file.light))
        .with_antialias(positive("antialias", file.antialias)?);

    if let Some(width) = file.width {
        scene.width = positive("width", width)?;
    }
    if let Some(height) = file.height {
        scene.height = positive("height", height)?;
    }
    if let Some(ambient) = file.ambient {
        scene.ambient = ambient;
    }
    if let Some(specular) = file.specular {
        scene.specular = specular;
    }
    if let Some(specular_power) = file.specular_power {
        scene.specular_power = specular_power;
    }
    if let Some(max_reflections) = file.max_reflections {
        scene.max_reflections = max_reflections;
    }
    if let Some(background) = file.background {
        scene.background = background.into();
    }

    for (index, object) in file.objects.into_iter().enumerate() {
        let primitive = object.into_primitive(index)?;
        log::debug!("objects[{}]: {:?}", index, primitive);
        scene.add(primitive);
    }

    if scene.is_empty() {
        log::warn!("Scene has no objects; every pixel will be background");
    }

    Ok(scene)
}
