//! ANSI escape emission for colored output.

use super::downsample::CellColor;
use super::grayscale::luminance;
use super::options::ColorMode;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// ANSI true color (24-bit) foreground: ESC[38;2;R;G;Bm
fn foreground(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn escape_for(color: CellColor, mode: ColorMode) -> Option<String> {
    match mode {
        ColorMode::Plain => None,
        ColorMode::TrueColor => Some(foreground(color.r, color.g, color.b)),
        ColorMode::Grayscale => {
            let l = luminance(color.r, color.g, color.b);
            Some(foreground(l, l, l))
        }
    }
}

/// Lay out a character grid as text, one line per row.
///
/// With colors, an escape is emitted only when the color changes within a
/// row and every row ends with a reset so nothing bleeds past the art.
///
/// # Arguments
/// * `chars` - Row-major glyphs
/// * `colors` - Row-major cell colors, same length as `chars` (ignored in `Plain`)
/// * `width` - Characters per row
/// * `mode` - Coloring mode
pub fn paint(chars: &[char], colors: &[CellColor], width: u32, mode: ColorMode) -> String {
    if width == 0 || chars.is_empty() {
        return String::new();
    }

    let colored = mode != ColorMode::Plain && colors.len() >= chars.len();
    let mut output = String::with_capacity(chars.len() * if colored { 20 } else { 1 });

    for (row, line) in chars.chunks(width as usize).enumerate() {
        if row > 0 {
            output.push('\n');
        }

        let mut current: Option<String> = None;
        for (col, &c) in line.iter().enumerate() {
            if colored {
                let escape = escape_for(colors[row * width as usize + col], mode);
                if escape != current {
                    if let Some(ref seq) = escape {
                        output.push_str(seq);
                    }
                    current = escape;
                }
            }
            output.push(c);
        }

        if colored {
            output.push_str(RESET);
        }
    }

    output
}
