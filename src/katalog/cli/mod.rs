//! # CLI Behavior
//!
//! This is **one possible UI client** for katalog, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`katalog`].
//!
//! ## Invocation Modes
//!
//! ### Naked Execution (`katalog`)
//!
//! Running `katalog` with no subcommand starts the shell. On a terminal it
//! prompts with `katalog> `; with piped stdin it silently consumes one
//! command per line, which makes `katalog < script` work without flags.
//!
//! ### One-Shot Execution
//!
//! - `katalog exec "add Title Author 42" "list"` runs lines from argv.
//! - `katalog run session.ktl` runs lines from a file. Blank lines and
//!   lines starting with `#` are skipped in every mode.
//!
//! Both exist so the catalog is scriptable without here-docs.
//!
//! ### Errors Are Line-Scoped
//!
//! A line that fails to parse or names an unknown verb is reported and the
//! session continues; the store is untouched by the failed line. The process
//! still exits 0. Only environment failures (unreadable script file, invalid
//! config) abort with exit 1.
//!
//! ## Module Structure
//!
//! - `shell`: Context setup, dispatch, and the line loop
//! - `setup`: Argument parsing via clap
//! - `print`: Output formatting (record lines, leveled messages)

mod print;
pub mod setup;
mod shell;

pub use shell::run;
