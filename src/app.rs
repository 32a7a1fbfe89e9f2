//! Orchestration: resolve, render, print.

use std::io::Write;

use crate::cli::{usage, Args};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::{build_options, Renderer};
use crate::source::resolve;
use crate::xkcd::ComicApi;

/// Run one invocation and write its output to `out`.
///
/// With `--help` only the usage text is written and neither collaborator is
/// touched. Otherwise the art, a blank line and the image path or URL are
/// written once everything succeeded; on error nothing is written.
pub async fn run<A, R, W>(
    args: &Args,
    config: &RenderConfig,
    api: &A,
    renderer: &R,
    out: &mut W,
) -> Result<()>
where
    A: ComicApi,
    R: Renderer,
    W: Write,
{
    if args.help {
        out.write_all(usage().as_bytes())?;
        return Ok(());
    }

    let source = resolve(args, api).await?;
    log::info!("Rendering {}", source);

    let options = build_options(args, config);
    let art = renderer.convert(&source, &options).await?;

    write!(out, "{}\n\n{}\n", art, source)?;
    out.flush()?;
    Ok(())
}
