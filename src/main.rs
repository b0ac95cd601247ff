//! helpdesk - Interactive help desk ticket tracker
//!
//! Parses the global flags, loads configuration and runs the menu session
//! on the terminal, or on plain stdin when input is piped.

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use helpdesk::cli::{Cli, LinePrompter, OutputFormatter, Session, TermPrompter};
use helpdesk::config::Config;
use helpdesk::error::{HelpdeskError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(&cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the session with the parsed arguments
///
/// # Errors
///
/// Returns configuration errors and any fatal I/O or prompt error raised
/// during the session. Validation errors are handled inside the menu loop.
fn run(cli: &Cli, formatter: OutputFormatter) -> Result<()> {
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    if cli.plain || !stdin.is_terminal() {
        let prompter = LinePrompter::new(stdin.lock(), io::stdout());
        Session::new(prompter, formatter, config).run()
    } else {
        Session::new(TermPrompter::new(), formatter, config).run()
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_error(error: &HelpdeskError, formatter: &OutputFormatter) {
    eprintln!("{}", formatter.error(&error.user_message()));
    for suggestion in error.suggestions() {
        eprintln!("   • {suggestion}");
    }
}
