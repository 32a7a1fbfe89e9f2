//! Renderer seam: load an image and turn it into text.

use image::DynamicImage;

use crate::ascii::{self, RenderOptions};
use crate::source::ImageSource;

/// Converts a resolved image into ASCII art.
#[allow(async_fn_in_trait)]
pub trait Renderer {
    async fn convert(
        &self,
        source: &ImageSource,
        options: &RenderOptions,
    ) -> Result<String, ConvertError>;
}

/// Renderer backed by the in-crate ASCII engine.
///
/// Local files are decoded with `image::open`; remote images are downloaded
/// first and decoded from memory.
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer {
    http_client: reqwest::Client,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer that shares an existing HTTP connection pool.
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Load and decode the image behind `source`.
    pub async fn load(&self, source: &ImageSource) -> Result<DynamicImage, ConvertError> {
        match source {
            ImageSource::Comic { url, .. } => self.download(url).await,
            ImageSource::File(path) | ImageSource::Random(path) => match source.url() {
                Some(url) => self.download(url).await,
                None => {
                    log::debug!("Opening {}", path.display());
                    Ok(image::open(path)?)
                }
            },
        }
    }

    async fn download(&self, url: &str) -> Result<DynamicImage, ConvertError> {
        log::info!("Downloading image from: {}", url);
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        log::debug!("Downloaded {} bytes", bytes.len());
        Ok(image::load_from_memory(&bytes)?)
    }
}

impl Renderer for AsciiRenderer {
    async fn convert(
        &self,
        source: &ImageSource,
        options: &RenderOptions,
    ) -> Result<String, ConvertError> {
        let image = self.load(source).await?;
        Ok(ascii::convert(&image, options)?)
    }
}

/// Errors that can occur while loading or converting an image.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Missing, unreadable, corrupt or unsupported image
    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("download of {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Requested width/height exceed the configured cell limit
    #[error("{0}")]
    TooLarge(#[from] ascii::GridTooLarge),
}
