//! Downsampling algorithms for converting pixel data to character grids.

use image::RgbImage;

/// RGB color for downsampled cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pixel bounds `[start, end)` of one grid cell along an axis.
///
/// Always covers at least one pixel so that upscaling (more cells than
/// pixels) samples the nearest pixel instead of producing empty cells.
#[inline]
fn cell_span(index: u32, cell_size: f32, limit: u32) -> (u32, u32) {
    let start = ((index as f32 * cell_size) as u32).min(limit - 1);
    let end = (((index + 1) as f32 * cell_size) as u32).clamp(start + 1, limit);
    (start, end)
}

/// Downsample a grayscale image to a grid.
///
/// Maps image pixels to grid cells by averaging the brightness of all pixels
/// within each cell.
///
/// # Arguments
/// * `gray` - Grayscale pixel data (one byte per pixel, row-major order)
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `grid_width` - Desired output width in cells
/// * `grid_height` - Desired output height in cells
///
/// # Returns
/// A vector of brightness values (0-255), one per cell, in row-major order.
/// The length is `grid_width * grid_height`.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    grid_width: u32,
    grid_height: u32,
) -> Vec<u8> {
    if grid_width == 0 || grid_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    let cell_w = img_width as f32 / grid_width as f32;
    let cell_h = img_height as f32 / grid_height as f32;

    let mut result = Vec::with_capacity((grid_width as usize) * (grid_height as usize));

    for cy in 0..grid_height {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..grid_width {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = (py * img_width + px) as usize;
                    if idx < gray.len() {
                        sum += gray[idx] as u32;
                        count += 1;
                    }
                }
            }

            result.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }

    result
}

/// Downsample an RGB image to get average colors per grid cell.
///
/// # Returns
/// One color per cell, row-major, `grid_width * grid_height` long.
pub fn downsample_colors(image: &RgbImage, grid_width: u32, grid_height: u32) -> Vec<CellColor> {
    let img_width = image.width();
    let img_height = image.height();
    let data = image.as_raw();

    if grid_width == 0 || grid_height == 0 || img_width == 0 || img_height == 0 || data.is_empty() {
        return Vec::new();
    }

    let cell_w = img_width as f32 / grid_width as f32;
    let cell_h = img_height as f32 / grid_height as f32;

    let mut result = Vec::with_capacity((grid_width as usize) * (grid_height as usize));

    for cy in 0..grid_height {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..grid_width {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;
            let mut count = 0u32;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = ((py * img_width + px) * 3) as usize;
                    if idx + 2 < data.len() {
                        sum_r += data[idx] as u32;
                        sum_g += data[idx + 1] as u32;
                        sum_b += data[idx + 2] as u32;
                        count += 1;
                    }
                }
            }

            result.push(if count > 0 {
                CellColor {
                    r: (sum_r / count) as u8,
                    g: (sum_g / count) as u8,
                    b: (sum_b / count) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }

    result
}
