use anyhow::Result;
use clap::Parser;

use bandmap::cli::{Cli, Commands};
use bandmap::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            path,
            model,
            config,
            format,
            output,
            policy,
            taxonomy,
        } => commands::evaluate::evaluate_attempt(commands::evaluate::EvaluateOptions {
            path,
            model,
            config,
            format,
            output,
            policy,
            taxonomy,
        }),
        Commands::Serve {
            model,
            config,
            host,
            port,
        } => commands::serve::run_server(commands::serve::ServeOptions {
            model,
            config,
            host,
            port,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
