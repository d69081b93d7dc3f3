//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;
use todolist::build_info;

/// A terminal todo list that persists to a flat text file.
#[derive(Debug, Parser)]
#[command(
    name = "todolist",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Todo file to load and save (default: ./todos.txt).
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to config file (default: ./todolist.toml or ~/.config/todolist/todolist.toml).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log debug detail to stderr (overridden by TODOLIST_LOG).
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
