//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;

use howdy::cli::Args;
use howdy::xkcd::{Comic, ComicApi, XkcdError};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

/// In-memory comic API that records every call.
#[derive(Default)]
pub struct FakeApi {
    pub latest_calls: RefCell<usize>,
    pub id_calls: RefCell<Vec<i64>>,
    pub fail: bool,
}

impl FakeApi {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        *self.latest_calls.borrow() + self.id_calls.borrow().len()
    }
}

pub fn comic(num: u32, img: &str) -> Comic {
    Comic {
        num,
        title: format!("Comic {}", num),
        safe_title: format!("Comic {}", num),
        img: img.to_string(),
        alt: String::new(),
        year: "2009".to_string(),
        month: "7".to_string(),
        day: "24".to_string(),
    }
}

impl ComicApi for FakeApi {
    async fn fetch_latest(&self) -> Result<Comic, XkcdError> {
        *self.latest_calls.borrow_mut() += 1;
        if self.fail {
            return Err(XkcdError::Status { status: 500 });
        }
        Ok(comic(3000, "https://imgs.xkcd.com/comics/latest.png"))
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Comic, XkcdError> {
        self.id_calls.borrow_mut().push(id);
        if self.fail {
            return Err(XkcdError::NotFound { id: Some(id) });
        }
        Ok(comic(
            u32::try_from(id).unwrap_or_default(),
            &format!("https://imgs.xkcd.com/comics/{}.png", id),
        ))
    }
}

/// Parse arguments the way the binary does, with the program name prepended.
pub fn args(argv: &[&str]) -> Args {
    use clap::Parser;
    let mut full = vec!["howdy"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).expect("valid test arguments")
}

/// Encode a solid-color image as PNG bytes.
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("encode png");
    bytes
}

/// Write a solid-color PNG to `path`.
pub fn write_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    std::fs::write(path, png_bytes(width, height, color)).expect("write png");
}
