//! Emblem CLI - rank and fact-check cultural symbols.

use clap::Parser;
use emblem_cli::commands;
use emblem_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format, !cli.no_color);

    match cli.command {
        Command::Rank(args) => commands::execute_rank(args, &formatter)?,
        Command::Stats(args) => commands::execute_stats(args, &formatter)?,
        Command::Verify(args) => commands::execute_verify(args, &cli.db, &formatter).await?,
        Command::History(args) => commands::execute_history(args, &cli.db, &formatter)?,
        Command::Watch(args) => commands::execute_watch(args, &cli.db, &formatter).await?,
    }

    Ok(())
}
