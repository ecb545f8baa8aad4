//! Scene description consumed by the renderer.
//!
//! A `Scene` is built once, by hand or by the loader, and then only read
//! while rendering.

use lumo_math::{Color, Point, Ray};

use crate::primitive::{HitRecord, Primitive};

/// Distance secondary rays are pushed off a surface, in multiples of their
/// direction vector.
pub const RAY_EPSILON: f64 = 1e-6;

pub const DEFAULT_AMBIENT: f64 = 0.2;
pub const DEFAULT_SPECULAR: f64 = 0.5;
pub const DEFAULT_SPECULAR_POWER: f64 = 8.0;
pub const DEFAULT_MAX_REFLECTIONS: u32 = 6;
pub const DEFAULT_BACKGROUND: Color = Color::new(135.0, 206.0, 235.0);
pub const DEFAULT_RESOLUTION: u32 = 512;

/// Primitives plus global lighting and output settings.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Eye position; primary rays start on the image plane and point away from it
    pub camera: Point,
    /// The single point light
    pub light: Point,
    /// Ambient coefficient
    pub ambient: f64,
    /// Specular coefficient
    pub specular: f64,
    /// Specular exponent
    pub specular_power: f64,
    /// Maximum mirror bounce depth
    pub max_reflections: u32,
    /// Color of rays that hit nothing
    pub background: Color,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Jittered samples per pixel
    pub antialias: u32,

    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene with default lighting at 512x512, one sample
    /// per pixel.
    pub fn new(camera: Point, light: Point) -> Self {
        Self {
            camera,
            light,
            ambient: DEFAULT_AMBIENT,
            specular: DEFAULT_SPECULAR,
            specular_power: DEFAULT_SPECULAR_POWER,
            max_reflections: DEFAULT_MAX_REFLECTIONS,
            background: DEFAULT_BACKGROUND,
            width: DEFAULT_RESOLUTION,
            height: DEFAULT_RESOLUTION,
            antialias: 1,
            primitives: Vec::new(),
        }
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_antialias(mut self, samples: u32) -> Self {
        self.antialias = samples;
        self
    }

    /// Set ambient coefficient, specular coefficient and specular exponent.
    pub fn with_lighting(mut self, ambient: f64, specular: f64, specular_power: f64) -> Self {
        self.ambient = ambient;
        self.specular = specular;
        self.specular_power = specular_power;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_reflections(mut self, max_reflections: u32) -> Self {
        self.max_reflections = max_reflections;
        self
    }

    /// Builder form of [`Scene::add`].
    pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.add(primitive);
        self
    }

    /// Append a primitive. Order only matters for exact ties in hit time.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest primitive hit along `ray` at a strictly positive time.
    ///
    /// Linear scan; on an exact tie the earlier primitive wins.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut nearest: Option<HitRecord<'_>> = None;

        for primitive in &self.primitives {
            let Some(t) = primitive.collision(ray) else {
                continue;
            };
            if t > 0.0 && nearest.map_or(true, |hit| t < hit.t) {
                nearest = Some(HitRecord { t, primitive });
            }
        }

        nearest
    }

    /// Whether anything blocks the path from `point` toward the light.
    ///
    /// Any hit counts, including one beyond the light itself.
    pub fn in_shadow(&self, point: Point) -> bool {
        let ray = Ray::through(point, self.light).offset(RAY_EPSILON);
        self.nearest_intersection(&ray).is_some()
    }
}
