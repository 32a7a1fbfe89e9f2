//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide.
/// This is used to correct the aspect ratio when rendering.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Default upper bound on output cells (e.g. 1000 columns by 1000 rows).
pub const MAX_CELLS: u64 = 1_000_000;

/// A character grid too large to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{width}x{height} cells exceeds the limit of {limit} cells")]
pub struct GridTooLarge {
    pub width: u32,
    pub height: u32,
    pub limit: u64,
}

/// Reject a grid of more than `limit` cells.
pub fn check_grid(width: u32, height: u32, limit: u64) -> Result<(), GridTooLarge> {
    let cells = u64::from(width) * u64::from(height);
    if cells > limit {
        return Err(GridTooLarge {
            width,
            height,
            limit,
        });
    }
    Ok(())
}

/// Calculate the character grid for an image.
///
/// A requested dimension of 0 means "derive it from the image". When both
/// are given they are used as-is and the image is stretched to fit. When
/// only one is given the other is computed so the picture keeps its shape
/// once drawn with cells `char_aspect` times taller than wide.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `width` - Requested width in characters (0 = derive)
/// * `height` - Requested height in characters (0 = derive)
/// * `char_aspect` - Terminal character aspect ratio (height/width)
///
/// # Returns
/// `(char_width, char_height)`, or `(0, 0)` when nothing can be drawn.
///
/// # Example
/// ```ignore
/// // 200x100 image, 40 columns wide: 40 / (2.0 * 2.0) = 10 rows
/// assert_eq!(fit_dimensions(200, 100, 40, 0, 2.0), (40, 10));
/// ```
pub fn fit_dimensions(
    img_width: u32,
    img_height: u32,
    width: u32,
    height: u32,
    char_aspect: f32,
) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || char_aspect <= 0.0 {
        return (0, 0);
    }

    // Columns per row that keep the picture's shape on screen.
    let target_char_aspect = img_width as f32 / img_height as f32 * char_aspect;

    match (width, height) {
        (0, 0) => (0, 0),
        (w, 0) => {
            let h = (w as f32 / target_char_aspect).round() as u32;
            (w, h.max(1))
        }
        (0, h) => {
            let w = (h as f32 * target_char_aspect).round() as u32;
            (w.max(1), h)
        }
        (w, h) => (w, h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_dimensions_pass_through() {
        assert_eq!(fit_dimensions(640, 480, 30, 7, 2.0), (30, 7));
    }

    #[test]
    fn test_width_only_derives_height() {
        assert_eq!(fit_dimensions(200, 100, 40, 0, 2.0), (40, 10));
    }

    #[test]
    fn test_height_only_derives_width() {
        assert_eq!(fit_dimensions(200, 100, 0, 10, 2.0), (40, 10));
    }

    #[test]
    fn test_tall_image_never_collapses_to_zero() {
        assert_eq!(fit_dimensions(10, 1000, 0, 1, 2.0), (1, 1));
        assert_eq!(fit_dimensions(1000, 10, 1, 0, 2.0), (1, 1));
    }

    #[test]
    fn test_check_grid_limit() {
        assert!(check_grid(1000, 1000, MAX_CELLS).is_ok());
        assert_eq!(
            check_grid(1001, 1000, MAX_CELLS),
            Err(GridTooLarge {
                width: 1001,
                height: 1000,
                limit: MAX_CELLS
            })
        );
        assert!(check_grid(u32::MAX, u32::MAX, MAX_CELLS).is_err());
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(fit_dimensions(0, 100, 40, 0, 2.0), (0, 0));
        assert_eq!(fit_dimensions(100, 100, 0, 0, 2.0), (0, 0));
        assert_eq!(fit_dimensions(100, 100, 10, 0, 0.0), (0, 0));
    }
}
