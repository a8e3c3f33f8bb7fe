use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("prophage_bounds=debug,info")
    } else {
        EnvFilter::new("prophage_bounds=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Compose(args) => {
            cli::compose::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Select(args) => {
            cli::select::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Split(args) => {
            cli::split::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Run(args) => {
            cli::run::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
