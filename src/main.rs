use anyhow::Result;
use clap::Parser;
use figx::cli::{Cli, Commands};
use figx::commands;
use figx::output::{self, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    output::set_quiet(cli.quiet);
    output::set_verbose(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format.unwrap_or_default()
    };

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Fetch(args) => commands::fetch::run(args).await,
        Commands::Tree(args) => commands::tree::run(args),
        Commands::Stats(args) => commands::stats::run(args, format),
        Commands::Auth { command } => commands::auth::run(command).await,
        Commands::Config { command } => commands::config::run(command),
    }
}
