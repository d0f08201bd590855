use clap::Parser;
use tracing_subscriber::EnvFilter;

use read_mapper::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("read_mapper=debug,info")
    } else {
        EnvFilter::new("read_mapper=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Map(args) => {
            cli::map::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Convert(args) => {
            cli::convert::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Composition(args) => {
            cli::composition::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
