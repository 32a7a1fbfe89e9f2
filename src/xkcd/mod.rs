//! xkcd comic API integration.
//!
//! Fetches comic metadata (most importantly the image URL) for the latest
//! comic or a numbered one. Requests are made once; failures are returned
//! to the caller without retrying.

mod client;

pub use client::{Comic, ComicApi, XkcdClient, XkcdError};
