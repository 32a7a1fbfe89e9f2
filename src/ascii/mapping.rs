//! Brightness to character mapping.

/// Palette index for a brightness value.
#[inline]
fn level_index(brightness: u8, levels: usize) -> usize {
    (brightness as usize * (levels - 1)) / 255
}

/// Map brightness values to characters.
///
/// Converts a grid of brightness values (0-255) to characters from the
/// provided charset. Lower brightness maps to earlier characters (typically
/// darker/less dense), higher brightness to later characters (brighter/denser).
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
/// * `charset` - Character set to use, ordered from darkest to brightest
/// * `invert` - If true, invert brightness before mapping (for light terminals)
///
/// # Example
/// ```ignore
/// let brightness = vec![0, 127, 255];
/// let chars = map_to_chars(&brightness, STANDARD_CHARSET, false);
/// // chars == [' ', '=', '@']
/// ```
pub fn map_to_chars(brightness: &[u8], charset: &[char], invert: bool) -> Vec<char> {
    if charset.is_empty() {
        return vec![' '; brightness.len()];
    }

    let levels = charset.len();
    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            charset[level_index(b, levels)]
        })
        .collect()
}

/// Map brightness values to characters using Floyd-Steinberg dithering.
///
/// Dithering distributes quantization error to neighboring cells, creating
/// smoother gradients with fewer visible bands.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
/// * `width` - Width of the character grid
/// * `height` - Height of the character grid
/// * `charset` - Character set to use, ordered from darkest to brightest
/// * `invert` - If true, invert brightness before mapping
pub fn map_to_chars_dithered(
    brightness: &[u8],
    width: u32,
    height: u32,
    charset: &[char],
    invert: bool,
) -> Vec<char> {
    let w = width as usize;
    let h = height as usize;

    if charset.is_empty() || w == 0 || h == 0 || brightness.len() < w * h {
        return vec![' '; brightness.len()];
    }

    // A single-glyph palette has nothing to diffuse.
    if charset.len() == 1 {
        return vec![charset[0]; w * h];
    }

    let levels = charset.len();

    // Signed work buffer for error diffusion
    let mut buffer: Vec<i16> = brightness
        .iter()
        .take(w * h)
        .map(|&b| if invert { 255 - b as i16 } else { b as i16 })
        .collect();

    let mut result = vec![' '; w * h];

    // Floyd-Steinberg error diffusion pattern:
    //       [*] 7/16
    // 3/16 5/16 1/16
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_val = buffer[idx].clamp(0, 255) as u8;

            let char_idx = level_index(old_val, levels);
            result[idx] = charset[char_idx];

            // Brightness this character actually represents
            let new_val = (char_idx * 255 / (levels - 1)) as i16;
            let error = buffer[idx] - new_val;

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

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::STANDARD_CHARSET;

    #[test]
    fn test_map_extremes() {
        let chars = map_to_chars(&[0, 255], STANDARD_CHARSET, false);
        assert_eq!(chars, vec![' ', '@']);
    }

    #[test]
    fn test_map_invert() {
        let chars = map_to_chars(&[0, 255], STANDARD_CHARSET, true);
        assert_eq!(chars, vec!['@', ' ']);
    }

    #[test]
    fn test_map_empty_charset_gives_spaces() {
        assert_eq!(map_to_chars(&[10, 20], &[], false), vec![' ', ' ']);
    }

    #[test]
    fn test_dithered_solid_extremes_unchanged() {
        let black = map_to_chars_dithered(&[0; 6], 3, 2, STANDARD_CHARSET, false);
        assert!(black.iter().all(|&c| c == ' '));
        let white = map_to_chars_dithered(&[255; 6], 3, 2, STANDARD_CHARSET, false);
        assert!(white.iter().all(|&c| c == '@'));
    }

    #[test]
    fn test_dithered_two_level_mid_gray_mixes() {
        let chars = map_to_chars_dithered(&[128; 16], 4, 4, &['.', '#'], false);
        assert!(chars.contains(&'.'));
        assert!(chars.contains(&'#'));
    }

    #[test]
    fn test_dithered_single_glyph() {
        assert_eq!(map_to_chars_dithered(&[7; 4], 2, 2, &['x'], false), vec!['x'; 4]);
    }
}
