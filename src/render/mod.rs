//! Rendering: option building and the image-to-text seam.

mod builder;
mod renderer;

pub use crate::ascii::{ColorMode, RenderOptions};
pub use builder::build_options;
pub use renderer::{AsciiRenderer, ConvertError, Renderer};
