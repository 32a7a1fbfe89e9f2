use std::process::ExitCode;

use clap::Parser;
use howdy::app;
use howdy::cli::{usage, Args};
use howdy::config::Config;
use howdy::error::HowdyError;
use howdy::render::AsciiRenderer;
use howdy::xkcd::XkcdClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    // Answered before the config file is even looked at.
    if args.help {
        print!("{}", usage());
        return ExitCode::SUCCESS;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), HowdyError> {
    let config = Config::load(args.config.as_deref())?;

    let client = XkcdClient::from_config(&config.xkcd).map_err(HowdyError::Client)?;
    let renderer = AsciiRenderer::with_http_client(client.http_client().clone());

    let mut stdout = std::io::stdout().lock();
    app::run(args, &config.render, &client, &renderer, &mut stdout).await
}
