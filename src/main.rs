//! talkhuman CLI entry point.

use clap::Parser;
use talkhuman::cli::{self, Cli, Commands, EXIT_ERROR};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "talkhuman=info,tower_http=info";

fn main() {
    // Logs go to stderr; stdout is reserved for reports and MCP frames
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Check(args) => cli::run_check(args),
        Commands::Serve(args) => cli::run_serve(args),
        Commands::Mcp(args) => cli::run_mcp(args),
        Commands::Rules(args) => cli::run_rules(args),
        Commands::Examples(args) => cli::run_examples(args),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
