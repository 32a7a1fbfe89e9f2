//! Image to text conversion.

use image::{DynamicImage, RgbImage};

use super::ansi::paint;
use super::braille;
use super::dimensions::{check_grid, fit_dimensions, GridTooLarge};
use super::downsample::{downsample, downsample_colors};
use super::grayscale::to_grayscale;
use super::mapping::{map_to_chars, map_to_chars_dithered};
use super::options::{ColorMode, RenderOptions};

/// Convert a decoded image to ASCII art.
///
/// Returns the rows joined by `\n` with no trailing newline. An image with
/// no pixels, or options that leave no room for a single cell, yield an
/// empty string. A grid of more than `options.max_cells` cells is rejected
/// before anything is allocated.
pub fn convert(image: &DynamicImage, options: &RenderOptions) -> Result<String, GridTooLarge> {
    convert_rgb(&image.to_rgb8(), options)
}

/// Convert an RGB image to ASCII art. See [`convert`].
pub fn convert_rgb(image: &RgbImage, options: &RenderOptions) -> Result<String, GridTooLarge> {
    let (img_width, img_height) = image.dimensions();
    let (cols, rows) = fit_dimensions(
        img_width,
        img_height,
        options.width,
        options.height,
        options.char_aspect,
    );
    if cols == 0 || rows == 0 {
        return Ok(String::new());
    }
    check_grid(cols, rows, options.max_cells)?;

    let gray = to_grayscale(image);

    let chars = if options.uses_braille() {
        let (Some(dot_width), Some(dot_height)) = (cols.checked_mul(2), rows.checked_mul(4))
        else {
            return Err(GridTooLarge {
                width: cols,
                height: rows,
                limit: options.max_cells,
            });
        };
        let samples = downsample(&gray, img_width, img_height, dot_width, dot_height);
        let dots = if options.dither {
            braille::dither_dots(
                &samples,
                dot_width,
                dot_height,
                options.braille_threshold,
                options.invert,
            )
        } else {
            braille::threshold_dots(&samples, options.braille_threshold, options.invert)
        };
        braille::pack(&dots, cols, rows)
    } else {
        let palette = options.charset().chars();
        let brightness = downsample(&gray, img_width, img_height, cols, rows);
        if options.dither {
            map_to_chars_dithered(&brightness, cols, rows, &palette, options.invert)
        } else {
            map_to_chars(&brightness, &palette, options.invert)
        }
    };

    let mode = options.color_mode();
    let colors = match mode {
        ColorMode::Plain => Vec::new(),
        _ => downsample_colors(image, cols, rows),
    };

    log::debug!(
        "Rendered {}x{} image as {}x{} cells ({})",
        img_width,
        img_height,
        cols,
        rows,
        if options.uses_braille() { "braille" } else { options.charset().name() }
    );

    Ok(paint(&chars, &colors, cols, mode))
}
