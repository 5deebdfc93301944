//! invhue - invert + hue-rotate colors from the command line.

use anyhow::Result;
use invhue_cli::{parse_args, run, Command, USAGE};
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let config = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Transform(config) => config,
    };

    init_logging(config.verbose)?;
    info!(colors = config.colors.len(), "invhue starting");

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
