//! Options understood by the ASCII engine.

use super::{CharSet, DEFAULT_CHAR_ASPECT_RATIO, DEFAULT_THRESHOLD, MAX_CELLS};

/// How glyphs are colored in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// No escape sequences at all
    Plain,
    /// 24-bit foreground color per cell
    TrueColor,
    /// 24-bit gray matching each cell's luminance
    Grayscale,
}

/// Rendering options for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters (0 = derive from height and aspect ratio)
    pub width: u32,
    /// Output height in characters (0 = derive from width and aspect ratio)
    pub height: u32,
    /// Emit 24-bit color escapes
    pub colored: bool,
    /// Emit gray escapes (used when `colored` is off)
    pub grayscale: bool,
    /// Custom glyph palette, darkest first; wins over braille
    pub custom_map: Option<String>,
    /// Use braille dot patterns instead of a glyph palette
    pub braille: bool,
    /// Use the 70-level ramp instead of the 10-level one
    pub complex: bool,
    /// Floyd-Steinberg dithering
    pub dither: bool,
    /// Invert brightness (for light terminals)
    pub invert: bool,
    /// Dot activation level in braille mode
    pub braille_threshold: u8,
    /// Terminal cell height/width ratio
    pub char_aspect: f32,
    /// Largest grid, in cells, a conversion may produce
    pub max_cells: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            colored: false,
            grayscale: false,
            custom_map: None,
            braille: false,
            complex: false,
            dither: false,
            invert: false,
            braille_threshold: DEFAULT_THRESHOLD,
            char_aspect: DEFAULT_CHAR_ASPECT_RATIO,
            max_cells: MAX_CELLS,
        }
    }
}

impl RenderOptions {
    /// Palette used when not rendering braille.
    pub fn charset(&self) -> CharSet {
        if let Some(set) = self.custom_map.as_deref().and_then(CharSet::custom) {
            return set;
        }
        if self.complex {
            CharSet::Complex
        } else {
            CharSet::Standard
        }
    }

    /// Whether braille packing is used. A custom palette takes precedence.
    pub fn uses_braille(&self) -> bool {
        self.braille && !matches!(self.charset(), CharSet::Custom(_))
    }

    pub fn color_mode(&self) -> ColorMode {
        if self.colored {
            ColorMode::TrueColor
        } else if self.grayscale {
            ColorMode::Grayscale
        } else {
            ColorMode::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_map_wins_over_braille() {
        let options = RenderOptions {
            braille: true,
            custom_map: Some("01".to_string()),
            ..Default::default()
        };
        assert!(!options.uses_braille());
        assert_eq!(options.charset(), CharSet::Custom(vec!['0', '1']));
    }

    #[test]
    fn test_empty_custom_map_falls_back() {
        let options = RenderOptions {
            custom_map: Some(String::new()),
            complex: true,
            braille: true,
            ..Default::default()
        };
        assert_eq!(options.charset(), CharSet::Complex);
        assert!(options.uses_braille());
    }

    #[test]
    fn test_color_mode() {
        let mut options = RenderOptions::default();
        assert_eq!(options.color_mode(), ColorMode::Plain);
        options.grayscale = true;
        assert_eq!(options.color_mode(), ColorMode::Grayscale);
        options.colored = true;
        assert_eq!(options.color_mode(), ColorMode::TrueColor);
    }
}
