//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Emblem CLI - rank and fact-check cultural symbols.
#[derive(Debug, Parser)]
#[command(name = "emblem")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verification record database path
    #[arg(long, global = true, default_value = "emblem.db")]
    pub db: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank symbols from an input file
    Rank(RankArgs),

    /// Completeness statistics over an input file
    Stats(StatsArgs),

    /// Run verification providers against one symbol
    Verify(VerifyArgs),

    /// Show the merged verification history for a symbol
    History(HistoryArgs),

    /// Follow a symbol's consensus view until interrupted
    Watch(WatchArgs),
}

/// Arguments for the rank command.
#[derive(Debug, Parser)]
pub struct RankArgs {
    /// Symbol input file (JSON array, recency-ordered)
    #[arg(short, long)]
    pub input: String,

    /// Maximum symbols to rank
    #[arg(short, long, default_value_t = emblem_catalog::DEFAULT_LIMIT)]
    pub limit: usize,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Symbol input file (JSON array, recency-ordered)
    #[arg(short, long)]
    pub input: String,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Symbol input file (JSON array, recency-ordered)
    #[arg(short, long)]
    pub input: String,

    /// Name of the symbol to verify
    #[arg(short, long)]
    pub name: String,

    /// Provider endpoint as name=url; repeatable. Without any, a scripted
    /// mock provider set is used
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Name of the symbol
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Name of the symbol
    #[arg(short, long)]
    pub name: String,

    /// Refresh interval in seconds (default from configuration)
    #[arg(long)]
    pub interval: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_args() {
        let cli = Cli::parse_from(["emblem", "rank", "--input", "symbols.json"]);
        match cli.command {
            Command::Rank(args) => {
                assert_eq!(args.input, "symbols.json");
                assert_eq!(args.limit, emblem_catalog::DEFAULT_LIMIT);
            }
            _ => panic!("Expected rank command"),
        }
    }

    #[test]
    fn test_verify_args_with_endpoints() {
        let cli = Cli::parse_from([
            "emblem",
            "verify",
            "--input",
            "symbols.json",
            "--name",
            "Ankh",
            "--endpoint",
            "alpha=http://localhost:8091/check",
            "--endpoint",
            "beta=http://localhost:8092/check",
        ]);
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.name, "Ankh");
                assert_eq!(args.endpoints.len(), 2);
            }
            _ => panic!("Expected verify command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "emblem",
            "--db",
            "custom.db",
            "--no-color",
            "history",
            "--name",
            "Ankh",
        ]);
        assert_eq!(cli.db, "custom.db");
        assert!(cli.no_color);
    }
}
