//! ASCII engine for converting decoded images to terminal art.
//!
//! This is the default backend behind [`crate::render::Renderer`]; any other
//! image-to-text implementation can be swapped in at that trait.
//!
//! The pipeline:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Dimension fitting** - character grid from requested size and aspect ratio
//! 3. **Downsampling** - average brightness (and color) per cell or braille dot
//! 4. **Character mapping** - brightness to glyph, optionally dithered
//! 5. **Painting** - rows of text with optional 24-bit color escapes
//!
//! # Character Sets
//!
//! - `Standard` - 10-level ASCII density ramp
//! - `Complex` - 70-level ASCII density ramp
//! - `Custom` - user supplied symbols
//!
//! Braille output is selected with [`RenderOptions::braille`] and packs a
//! 2x4 dot matrix into each cell.

mod ansi;
pub mod braille;
mod charset;
mod convert;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;
mod options;

pub use ansi::{paint, RESET};
pub use braille::{BRAILLE_BASE, DEFAULT_THRESHOLD};
pub use charset::{CharSet, COMPLEX_CHARSET, STANDARD_CHARSET};
pub use convert::{convert, convert_rgb};
pub use dimensions::{
    check_grid, fit_dimensions, GridTooLarge, DEFAULT_CHAR_ASPECT_RATIO, MAX_CELLS,
};
pub use downsample::{downsample, downsample_colors, CellColor};
pub use grayscale::{luminance, to_grayscale};
pub use mapping::{map_to_chars, map_to_chars_dithered};
pub use options::{ColorMode, RenderOptions};
