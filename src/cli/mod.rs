//! Command-line interface for the help desk
//!
//! The binary takes a handful of global flags and then runs an interactive
//! menu session. Command handlers live in [`handlers`].

use std::path::PathBuf;

use clap::Parser;

pub mod handlers;
mod menu;
mod output;
mod prompt;
mod session;

pub use menu::MenuChoice;
pub use output::OutputFormatter;
pub use prompt::{LinePrompter, Prompter, TermPrompter};
pub use session::Session;

/// Interactive help desk ticket tracker
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print dashboard, history and queue views as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read plain lines from stdin instead of terminal widgets
    #[arg(long)]
    pub plain: bool,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
