use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "katalog", version)]
#[command(about = "In-memory book catalog with a tiny command language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Echo each command line before executing it
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured display style (plain or special)
    #[arg(long, global = true, value_name = "STYLE")]
    pub display: Option<String>,

    /// Directory holding config.json (also settable via KATALOG_CONFIG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (the default when no subcommand is given)
    #[command(alias = "sh")]
    Shell,

    /// Execute catalog commands from a script file
    Run {
        /// Path to the script, one command per line ('#' starts a comment)
        script: PathBuf,
    },

    /// Execute the given command lines in order
    #[command(alias = "x")]
    Exec {
        /// Command lines (e.g. "add Dune Herbert 0441172717")
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., display)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
