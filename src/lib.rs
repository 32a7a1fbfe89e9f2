//! howdy library crate.
//!
//! Fetches an xkcd comic (or picks a local image) and renders it as ASCII
//! art. The binary is a thin wrapper around [`app::run`]; the modules are
//! exposed for integration testing.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod source;
pub mod xkcd;
