//! Translation of command-line options into renderer options.

use crate::ascii::RenderOptions;
use crate::cli::Args;
use crate::config::RenderConfig;

/// Build the renderer options for an invocation.
///
/// - Non-zero `--width`/`--height` pass through; the missing one is derived
///   from the image's aspect ratio. With neither, `default_width` columns
///   are used and the height follows the aspect ratio.
/// - `--grayscale` turns true color off and gray escapes on.
/// - A non-empty `--symbols` string is the palette; otherwise `--braille`
///   decides between braille dots and the complex ASCII ramp.
pub fn build_options(args: &Args, config: &RenderConfig) -> RenderOptions {
    let (width, height) = match (args.width, args.height) {
        (0, 0) => (config.default_width, 0),
        dims => dims,
    };

    let custom_map = (!args.symbols.is_empty()).then(|| args.symbols.clone());
    let braille = custom_map.is_none() && args.braille;

    RenderOptions {
        width,
        height,
        colored: !args.grayscale,
        grayscale: args.grayscale,
        custom_map,
        braille,
        complex: true,
        dither: config.dither,
        invert: config.invert,
        braille_threshold: config.braille_threshold,
        char_aspect: config.char_aspect,
        max_cells: config.max_cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WIDTH;
    use clap::Parser;

    fn options_for(argv: &[&str]) -> RenderOptions {
        let mut full = vec!["howdy"];
        full.extend_from_slice(argv);
        let args = Args::try_parse_from(full).unwrap();
        build_options(&args, &RenderConfig::default())
    }

    #[test]
    fn test_defaults() {
        let options = options_for(&[]);
        assert_eq!(options.width, DEFAULT_WIDTH);
        assert_eq!(options.height, 0);
        assert!(options.colored);
        assert!(!options.grayscale);
        assert!(options.custom_map.is_none());
        assert!(!options.braille);
        assert!(options.complex);
        assert!(options.dither);
        assert_eq!(options.max_cells, crate::ascii::MAX_CELLS);
    }

    #[test]
    fn test_width_and_height_pass_through() {
        let options = options_for(&["-w", "80", "-h", "20"]);
        assert_eq!((options.width, options.height), (80, 20));
    }

    #[test]
    fn test_height_only_leaves_width_free() {
        let options = options_for(&["--height", "30"]);
        assert_eq!((options.width, options.height), (0, 30));
    }

    #[test]
    fn test_grayscale_disables_color() {
        let options = options_for(&["-g"]);
        assert!(!options.colored);
        assert!(options.grayscale);
    }

    #[test]
    fn test_braille_toggle() {
        assert!(options_for(&["-b"]).braille);
    }

    #[test]
    fn test_symbols_win_over_braille() {
        let options = options_for(&["-b", "-s", " .oO@"]);
        assert_eq!(options.custom_map.as_deref(), Some(" .oO@"));
        assert!(!options.braille);
    }

    #[test]
    fn test_config_feeds_dither_and_default_width() {
        let args = Args::try_parse_from(["howdy"]).unwrap();
        let config = RenderConfig {
            default_width: 42,
            dither: false,
            invert: true,
            max_cells: 500,
            ..RenderConfig::default()
        };
        let options = build_options(&args, &config);
        assert_eq!(options.width, 42);
        assert_eq!(options.max_cells, 500);
        assert!(!options.dither);
        assert!(options.invert);
    }
}
