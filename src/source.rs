//! Image source resolution.
//!
//! Decides which single image to render. The command line is consulted in a
//! fixed order and the first populated field wins:
//!
//! 1. `--file`: used verbatim, existence is checked later by the renderer
//! 2. `--directory`: a random image from that directory
//! 3. `--id`: the numbered xkcd comic
//! 4. otherwise the latest xkcd comic

use std::fmt;
use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rand::Rng;

use crate::cli::Args;
use crate::error::{HowdyError, Result};
use crate::xkcd::ComicApi;

/// File extensions picked up from a directory. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// The image chosen for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Path (or URL) given with `--file`
    File(PathBuf),
    /// Image picked at random from `--directory`
    Random(PathBuf),
    /// Image URL of an xkcd comic; `id` is `None` for the latest
    Comic { id: Option<i64>, url: String },
}

impl ImageSource {
    /// URL to download, for remote sources.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Comic { url, .. } => Some(url.as_str()),
            ImageSource::File(path) => path.to_str().filter(|s| is_url(s)),
            ImageSource::Random(_) => None,
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) | ImageSource::Random(path) => {
                write!(f, "{}", path.display())
            }
            ImageSource::Comic { url, .. } => write!(f, "{}", url),
        }
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Resolve the image to render from the parsed arguments.
pub async fn resolve<A: ComicApi>(args: &Args, api: &A) -> Result<ImageSource> {
    if !args.file.is_empty() {
        log::debug!("Using file {}", args.file);
        return Ok(ImageSource::File(PathBuf::from(&args.file)));
    }

    if !args.directory.is_empty() {
        let path = pick_random_image(Path::new(&args.directory))?;
        log::debug!("Picked {} from {}", path.display(), args.directory);
        return Ok(ImageSource::Random(path));
    }

    if args.id != 0 {
        let comic = api
            .fetch_by_id(args.id)
            .await
            .map_err(|source| HowdyError::Fetch {
                id: Some(args.id),
                source,
            })?;
        return Ok(ImageSource::Comic {
            id: Some(args.id),
            url: comic.img,
        });
    }

    let comic = api
        .fetch_latest()
        .await
        .map_err(|source| HowdyError::Fetch { id: None, source })?;
    Ok(ImageSource::Comic {
        id: None,
        url: comic.img,
    })
}

/// List the images directly inside `dir`, sorted by path.
///
/// Only regular files whose extension is exactly one of [`IMAGE_EXTENSIONS`]
/// are returned; subdirectories are not searched.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| HowdyError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext));
        if matches {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

/// Pick one image from `dir` uniformly at random.
///
/// Uses the operating system's cryptographically secure generator.
pub fn pick_random_image(dir: &Path) -> Result<PathBuf> {
    let mut images = list_images(dir)?;
    if images.is_empty() {
        return Err(HowdyError::DirectoryEmpty {
            path: dir.to_path_buf(),
        });
    }

    let index = OsRng.gen_range(0..images.len());
    Ok(images.swap_remove(index))
}
