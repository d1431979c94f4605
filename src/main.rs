use clap::Parser;
use tracing_subscriber::EnvFilter;

mod algebra;
mod catalog;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pericope=debug,info")
    } else {
        EnvFilter::new("pericope=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let canon = catalog::canon::Canon::load(cli.catalog.as_deref(), cli.versification.as_deref())?;

    match cli.command {
        cli::Commands::Parse(args) => {
            cli::parse::run(args, &canon, cli.format, cli.verbose)?;
        }
        cli::Commands::Scan(args) => {
            cli::scan::run(args, &canon, cli.format, cli.verbose)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, &canon, cli.format, cli.verbose)?;
        }
        cli::Commands::Suggest(args) => {
            cli::suggest::run(args, &canon, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, &canon, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
