//! my-repos CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use my_repos::cli::{Cli, CommandDispatcher};
use my_repos::ui::{Output, OutputMode, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with scan output. Level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("my_repos=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("my_repos=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Dispatch the parsed command line and turn the result into an exit code.
fn run(cli: &Cli, output: &Output) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let result = CommandDispatcher::new(cwd).dispatch(cli, output)?;
    Ok(ExitCode::from(result.exit_code as u8))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("my-repos starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(output_mode, Theme::for_terminal(cli.no_color));

    match run(&cli, &output) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", output.theme().error.apply_to(format!("Error: {:#}", e)));
            ExitCode::from(1)
        }
    }
}
