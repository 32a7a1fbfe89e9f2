//! Fixed usage text printed for `--help`.

const USAGE: &str = "\
howdy - Display XKCD comics or your own images as ASCII art in the terminal
Usage: howdy [OPTIONS]

Options:
  -d, --directory DIR    Serve a random image from the specified directory
  -f, --file FILE        Convert a given file
  -i, --id ID            Fetch and convert XKCD comic with the given ID
  -b, --braille          Use braille characters for higher resolution
  -s, --symbols STRING   String with allowed symbols
  -g, --grayscale        Disable color output
  -w, --width WIDTH      Set the image width
  -h, --height HEIGHT    Set the image height
  -c, --config FILE      Read settings from FILE instead of the default config
  -V, --version          Print version
      --help             Print this help text

If no options are provided, howdy fetches the latest XKCD comic by default.
";

/// The usage block, ending with a newline.
pub fn usage() -> &'static str {
    USAGE
}
