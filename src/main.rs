use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use startup_atlas::cli::{Cli, Commands};
use startup_atlas::commands::{categories, render, serve};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Serve(args) => serve::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
        Commands::Categories(args) => categories::run(&cli, args),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("startup_atlas={level},tower_http={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
