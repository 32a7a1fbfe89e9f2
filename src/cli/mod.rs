//! Command-line interface definitions and helpers.

mod args;
mod usage;

pub use args::Args;
pub use usage::usage;
