use clap::Parser;
use tracing_subscriber::EnvFilter;

use taxon_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("taxon_solver=debug,info")
    } else {
        EnvFilter::new("taxon_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config_dir = cli.config_dir.as_deref();

    match cli.command {
        cli::Commands::Id(args) => {
            cli::id::run(args, cli.format, cli.verbose, config_dir)?;
        }
        cli::Commands::Info(args) => {
            cli::info::run(args, cli.format, cli.verbose, config_dir)?;
        }
        cli::Commands::Hierarchy(args) => {
            cli::info::run_hierarchy(args, cli.format, cli.verbose, config_dir)?;
        }
        cli::Commands::Check(args) => {
            cli::check::run(args, cli.format, cli.verbose, config_dir)?;
        }
        cli::Commands::Whitelist(args) => {
            cli::lookup::run_whitelist(args, cli.format, config_dir)?;
        }
        cli::Commands::RedList(args) => {
            cli::lookup::run_red_list(args, cli.format, config_dir)?;
        }
        cli::Commands::Translate(args) => {
            cli::lookup::run_translate(args, cli.format, config_dir)?;
        }
    }

    Ok(())
}
