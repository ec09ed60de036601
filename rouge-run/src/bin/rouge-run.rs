use anyhow::{Context, Result};
use clap::Parser;
use rouge_run::{default_library, Args, Launch};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    // ROUGE_LOG, then RUST_LOG, then -v.
    let filter = EnvFilter::try_from_env("ROUGE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(unix)]
fn run(launch: &Launch) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // Only returns on failure.
    let err = launch.command().exec();
    Err(err).context("failed to execute the command")
}

fn main() -> Result<()> {
    let cli = Args::parse();
    init_tracing(cli.log_level());

    let library = match &cli.library {
        Some(path)  => path.clone(),
        None        => default_library()?,
    };
    let launch = Launch::new(&library, cli.config(), &cli.command)?;
    info!(
        library = %launch.library().display(),
        mode = %launch.config().mode,
        command = ?cli.command,
        "launching"
    );

    run(&launch)
}
