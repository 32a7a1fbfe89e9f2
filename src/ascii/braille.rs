//! Braille character rendering for high-resolution ASCII art.
//!
//! Each braille character represents a 2x4 dot matrix, providing 8 subpixels
//! per terminal character cell. Callers sample the image onto a dot grid
//! that is twice as wide and four times as tall as the character grid, turn
//! each sample into a dot (plain threshold or dithered), then pack.

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Default brightness threshold for dot activation.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Convert a 2x4 boolean grid to a braille character.
///
/// The bit positions are:
/// ```text
/// [0,0]=1   [1,0]=8
/// [0,1]=2   [1,1]=16
/// [0,2]=4   [1,2]=32
/// [0,3]=64  [1,3]=128
/// ```
///
/// # Arguments
/// * `grid` - A 2x4 boolean array where grid[x][y] indicates if dot at (x,y) is on
pub fn grid_to_braille(grid: [[bool; 4]; 2]) -> char {
    const BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

    let mut code = 0u8;
    for (x, column) in grid.iter().enumerate() {
        for (y, &on) in column.iter().enumerate() {
            if on {
                code |= BITS[x][y];
            }
        }
    }
    char::from_u32(BRAILLE_BASE as u32 + code as u32).unwrap_or(BRAILLE_BASE)
}

/// Turn brightness samples into dots with a fixed threshold.
pub fn threshold_dots(gray: &[u8], threshold: u8, invert: bool) -> Vec<bool> {
    gray.iter()
        .map(|&g| {
            let brightness = if invert { 255 - g } else { g };
            brightness >= threshold
        })
        .collect()
}

/// Turn brightness samples into dots with Floyd-Steinberg error diffusion.
///
/// Mid-tones become a scatter of dots whose density follows the brightness,
/// instead of collapsing to all-on or all-off at the threshold.
pub fn dither_dots(gray: &[u8], width: u32, height: u32, threshold: u8, invert: bool) -> Vec<bool> {
    let w = width as usize;
    let h = height as usize;
    if w == 0 || h == 0 || gray.len() < w * h {
        return threshold_dots(gray, threshold, invert);
    }

    let mut buffer: Vec<i16> = gray
        .iter()
        .take(w * h)
        .map(|&g| if invert { 255 - g as i16 } else { g as i16 })
        .collect();
    let mut dots = vec![false; w * h];

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let on = buffer[idx] >= threshold as i16;
            dots[idx] = on;

            let error = buffer[idx] - if on { 255 } else { 0 };

            if x + 1 < w {
                buffer[idx + 1] += error * 7 / 16;
            }
            if y + 1 < h && x > 0 {
                buffer[idx + w - 1] += error * 3 / 16;
            }
            if y + 1 < h {
                buffer[idx + w] += error * 5 / 16;
            }
            if y + 1 < h && x + 1 < w {
                buffer[idx + w + 1] += error / 16;
            }
        }
    }

    dots
}

/// Pack a dot grid into braille characters.
///
/// # Arguments
/// * `dots` - Row-major dots, `char_width * 2` wide and `char_height * 4` tall
/// * `char_width` - Output width in characters
/// * `char_height` - Output height in characters
///
/// # Returns
/// `char_width * char_height` braille characters, row-major.
pub fn pack(dots: &[bool], char_width: u32, char_height: u32) -> Vec<char> {
    if char_width == 0 || char_height == 0 || dots.is_empty() {
        return Vec::new();
    }

    let dot_width = char_width as usize * 2;
    let mut result = Vec::with_capacity((char_width as usize) * (char_height as usize));

    for cy in 0..char_height as usize {
        for cx in 0..char_width as usize {
            let mut grid = [[false; 4]; 2];

            for (dy, row) in (cy * 4..cy * 4 + 4).enumerate() {
                for (dx, col) in (cx * 2..cx * 2 + 2).enumerate() {
                    grid[dx][dy] = dots.get(row * dot_width + col).copied().unwrap_or(false);
                }
            }

            result.push(grid_to_braille(grid));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_base() {
        assert_eq!(BRAILLE_BASE, '\u{2800}');
    }

    #[test]
    fn test_grid_to_braille_empty() {
        let grid = [[false; 4]; 2];
        assert_eq!(grid_to_braille(grid), BRAILLE_BASE);
    }

    #[test]
    fn test_grid_to_braille_full() {
        let grid = [[true; 4]; 2];
        assert_eq!(grid_to_braille(grid), '\u{28FF}');
    }

    #[test]
    fn test_grid_to_braille_single_dots() {
        // Top-left dot only
        let mut grid = [[false; 4]; 2];
        grid[0][0] = true;
        assert_eq!(grid_to_braille(grid), '\u{2801}');

        // Top-right dot only
        let mut grid = [[false; 4]; 2];
        grid[1][0] = true;
        assert_eq!(grid_to_braille(grid), '\u{2808}');

        // Bottom-left dot only
        let mut grid = [[false; 4]; 2];
        grid[0][3] = true;
        assert_eq!(grid_to_braille(grid), '\u{2840}');
    }

    #[test]
    fn test_threshold_dots_invert() {
        assert_eq!(threshold_dots(&[0, 255], 128, false), vec![false, true]);
        assert_eq!(threshold_dots(&[0, 255], 128, true), vec![true, false]);
    }

    #[test]
    fn test_pack_full_cell() {
        let dots = vec![true; 8];
        assert_eq!(pack(&dots, 1, 1), vec!['\u{28FF}']);
    }

    #[test]
    fn test_pack_two_cells_left_lit() {
        // 4x4 dots, left half on
        let dots: Vec<bool> = (0..16).map(|i| i % 4 < 2).collect();
        assert_eq!(pack(&dots, 2, 1), vec!['\u{28FF}', BRAILLE_BASE]);
    }

    #[test]
    fn test_pack_empty_input() {
        assert!(pack(&[], 10, 10).is_empty());
        assert!(pack(&[true; 8], 0, 0).is_empty());
    }

    #[test]
    fn test_dither_dots_mid_gray_is_mixed() {
        let dots = dither_dots(&[128; 64], 8, 8, DEFAULT_THRESHOLD, false);
        let on = dots.iter().filter(|&&d| d).count();
        assert!(on > 16 && on < 48, "expected roughly half the dots lit, got {on}");
    }

    #[test]
    fn test_dither_dots_extremes() {
        assert!(dither_dots(&[255; 16], 4, 4, 128, false).iter().all(|&d| d));
        assert!(dither_dots(&[0; 16], 4, 4, 128, false).iter().all(|&d| !d));
    }
}
