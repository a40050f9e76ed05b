mod cli;
mod commands;
mod util;

use clap::Parser;
use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Stat(args)) => commands::stat::run_stat(args)?,
        Some(Commands::ToSeconds(args)) => commands::convert::run_to_seconds(args)?,
        Some(Commands::ToHms(args)) => commands::convert::run_to_hms(args)?,
        None => commands::stat::run_stat(cli.stat)?,
    }

    Ok(())
}
