use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use matchmint::config::Config;
use matchmint::logging::init_tracing;
use matchmint::ui::runtime;

#[derive(Parser)]
#[command(name = "matchmint", version, about = "Concentration card game with token rewards")]
struct Cli {
    /// Path to an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse capture (keyboard-only play).
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    info!(backend = %config.backend.base_url, "starting matchmint");

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime::run(&config, tokio_runtime.handle().clone(), !cli.no_mouse)?;
    Ok(())
}
