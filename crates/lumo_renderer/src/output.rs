//! Clamping and encoding of finished renders.

use std::path::Path;

use lumo_math::Color;
use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Round a channel to the nearest integer and clamp it to `[0, 255]`.
#[inline]
fn channel_to_u8(channel: f64) -> u8 {
    // NaN survives clamp and casts to 0
    (channel + 0.5).clamp(0.0, 255.0) as u8
}

/// Convert an unclamped color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    color.to_array().map(channel_to_u8)
}

impl ImageBuffer {
    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let pixels: Vec<[u8; 3]> = self.pixels.iter().map(|&c| color_to_rgb(c)).collect();
        bytemuck::cast_slice(&pixels).to_vec()
    }
}

/// Encode `image` to `path`. The format follows the file extension.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let bytes = image.to_rgb8();
    let actual = bytes.len();

    let rgb = image::RgbImage::from_raw(image.width, image.height, bytes).ok_or(OutputError::BufferSize {
        expected: image.width as usize * image.height as usize * 3,
        actual,
    })?;
    rgb.save(path)?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
