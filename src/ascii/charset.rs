//! Character set definitions for ASCII rendering.

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Complex ASCII density ramp (70 levels), darkest first.
pub const COMPLEX_CHARSET: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Glyph palette used to map cell brightness to characters.
///
/// Braille rendering is not a palette; it packs a 2x4 dot matrix per cell
/// and is selected separately on the render options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Long ASCII ramp (70 levels) for finer gradients
    #[default]
    Complex,
    /// User supplied characters, ordered darkest to brightest
    Custom(Vec<char>),
}

impl CharSet {
    /// Build a custom palette from a symbol string.
    ///
    /// Returns `None` for an empty string so callers fall back to a built-in set.
    pub fn custom(symbols: &str) -> Option<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.is_empty() {
            None
        } else {
            Some(CharSet::Custom(chars))
        }
    }

    /// Get the characters of this palette, darkest first.
    pub fn chars(&self) -> Vec<char> {
        match self {
            CharSet::Standard => STANDARD_CHARSET.to_vec(),
            CharSet::Complex => COMPLEX_CHARSET.chars().collect(),
            CharSet::Custom(chars) => chars.clone(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Complex => "complex",
            CharSet::Custom(_) => "custom",
        }
    }
}
