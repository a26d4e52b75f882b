//! Hello Flags entry-point: bind flags to a greeting config, parse the
//! command line, and print the greeting.

mod config;
mod error;
mod greeting;

use std::io::{self, Write};

use tagflags::{FlagError, FlagsetBuilder, is_display_request};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::GreetConfig;
use crate::error::Result;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn init_logging() -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .try_init()?;
    Ok(())
}

fn run() -> Result<()> {
    let mut args = std::env::args_os();
    let program = args.next().map_or_else(
        || "hello-flags".to_owned(),
        |name| name.to_string_lossy().into_owned(),
    );

    let mut config = GreetConfig::default();
    let builder = FlagsetBuilder::new().program_name(program);
    let extra = match builder.parse(&mut config, args) {
        Ok(extra) => extra,
        Err(FlagError::CliParsing(err)) if is_display_request(&err) => err.exit(),
        Err(err) => return Err(err.into()),
    };
    tracing::debug!(?config, extra = extra.len(), "parsed command line");

    let message = greeting::render(&config, &extra)?;
    let mut stdout = io::stdout().lock();
    for _ in 0..config.repeat.max(1) {
        writeln!(stdout, "{message}")?;
    }
    Ok(())
}
