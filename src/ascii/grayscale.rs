//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::RgbImage;

/// Luminance of a single RGB triplet.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, with coefficients scaled by 1000 so the
/// whole computation stays in integer math.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Convert an RGB image to grayscale.
///
/// # Returns
/// A vector of grayscale values (0-255), one per pixel, row-major.
pub fn to_grayscale(image: &RgbImage) -> Vec<u8> {
    let pixel_count = (image.width() * image.height()) as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgb in image.as_raw().chunks_exact(3) {
        gray.push(luminance(rgb[0], rgb[1], rgb[2]));
    }

    gray
}
