extern crate clap;
extern crate tokio;

mod cli;
mod command;
mod dataset;
mod error;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// `RUST_LOG` decides when no `-v` is given; `-v` raises the global level.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(env.unwrap_or_default());

    if verbose > 0 {
        filter.add_directive(level.into())
    } else {
        filter
    }
}


#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr, results to stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(cli.verbose, env.as_deref()))
        .init();

    let result = match cli.command {
        Command::Lemmatize(args) => command::lemmatize(args).await,
        Command::Train(args) => command::train(args).await,
        Command::Evaluate(args) => command::evaluate(args).await,
    };

    if let Err(error) = result {
        error!("{error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::log_filter;

    #[test]
    fn test_log_filter_default() {
        assert_eq!(log_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_env_without_verbose() {
        assert_eq!(
            log_filter(0, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_log_filter_verbose_raises_level() {
        assert_eq!(
            log_filter(2, Some("info")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(log_filter(3, None).max_level_hint(), Some(LevelFilter::TRACE));
    }
}
