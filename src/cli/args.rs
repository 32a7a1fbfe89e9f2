//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Display XKCD comics or your own images as ASCII art in the terminal.
///
/// clap's generated help is disabled because `-h` is the height flag;
/// `--help` is a plain switch and the usage text lives in [`super::usage`].
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "howdy")]
#[command(version, disable_help_flag = true)]
pub struct Args {
    /// Serve a random image from the specified directory
    #[arg(short, long, default_value_t)]
    pub directory: String,

    /// Convert a given file
    #[arg(short, long, default_value_t)]
    pub file: String,

    /// Fetch and convert XKCD comic with the given ID
    ///
    /// Any integer is accepted; 0 means unset and the API rejects the rest.
    #[arg(short, long, default_value_t, allow_negative_numbers = true)]
    pub id: i64,

    /// Use braille characters for higher resolution
    #[arg(short, long)]
    pub braille: bool,

    /// String with allowed symbols
    #[arg(short, long, default_value_t)]
    pub symbols: String,

    /// Disable color output
    #[arg(short, long)]
    pub grayscale: bool,

    /// Set the image width
    #[arg(short, long, default_value_t)]
    pub width: u32,

    /// Set the image height
    #[arg(short = 'h', long, default_value_t)]
    pub height: u32,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print this help text
    #[arg(long)]
    pub help: bool,
}
