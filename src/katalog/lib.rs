//! # Katalog Architecture
//!
//! Katalog is a **UI-agnostic catalog library**. This is not a CLI application that happens
//! to have some library code; it's a library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (cli/, wired by main.rs)                       │
//! │  - Parses arguments, reads command lines, renders output    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (interpreter.rs, commands.rs)                │
//! │  - interpret() turns a text line into a command and runs it │
//! │  - Command values are the only mutation path                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs, model.rs)                           │
//! │  - CatalogStore: identifier → Record, in insertion order    │
//! │  - Queries (get, search, listing) read it directly          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Store, Passed Explicitly
//!
//! There is no global catalog. The binary builds a [`store::CatalogStore`] at
//! startup and hands `&mut` references down; interpretation and commands take
//! the store they operate on as an argument. Tests get isolation for free,
//! and two catalogs in one process are unremarkable.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `interpreter.rs` inward (interpreter, commands, store), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Outcome>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any other UI.
//! Every error the core returns is recoverable: a failed line leaves the store
//! exactly as it was, so a front end reports it and moves on.
//!
//! ## Example
//!
//! ```
//! use katalog::interpreter::interpret;
//! use katalog::store::CatalogStore;
//!
//! let mut store = CatalogStore::new();
//! interpret(&mut store, "add Dubliners James_Joyce 0987654321").unwrap();
//! assert_eq!(store.get("0987654321").unwrap().title(), "Dubliners");
//! ```
//!
//! ## Module Overview
//!
//! - [`interpreter`]: The text command language, entry point for mutations
//! - [`commands`]: Command values (`AddRecord`, `RemoveRecord`) behind the `Command` trait
//! - [`store`]: The in-memory catalog, keyed by identifier
//! - [`model`]: Core data types (`Record`, `RecordBuilder`)
//! - [`format`]: Display styles and record rendering
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive shell, and printing for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod interpreter;
pub mod model;
pub mod store;
