use super::print::{print_messages, print_records, CmdMessage};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use katalog::config::CatalogConfig;
use katalog::error::{CatalogError, Result};
use katalog::format::{format_record, DisplayStyle};
use katalog::interpreter::{interpret, Outcome};
use katalog::model::Record;
use katalog::store::CatalogStore;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

const CONFIG_DIR_ENV: &str = "KATALOG_CONFIG_DIR";

struct AppContext {
    store: CatalogStore,
    style: DisplayStyle,
    verbose: bool,
}

/// Whether the line loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(&cli);

    // Config runs before context init; it needs no store.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.as_deref(), value.as_deref());
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::Run { script }) => handle_run(&mut ctx, &script),
        Some(Commands::Exec { lines }) => {
            run_lines(&mut ctx, lines.iter().map(String::as_str));
            Ok(())
        }
        Some(Commands::Config { key, value }) => {
            handle_config(&config_dir, key.as_deref(), value.as_deref())
        }
        Some(Commands::Shell) | None => run_shell(&mut ctx),
    }
}

fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let proj_dirs =
        ProjectDirs::from("com", "katalog", "katalog").expect("Could not determine config dir");
    proj_dirs.config_dir().to_path_buf()
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let config = CatalogConfig::load(config_dir).unwrap_or_default();
    let style = match cli.display.as_deref() {
        Some(value) => value.parse()?,
        None => config.display,
    };

    Ok(AppContext {
        store: CatalogStore::new(),
        style,
        verbose: cli.verbose,
    })
}

fn run_shell(ctx: &mut AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!(
            "katalog {} (type 'help' for commands)",
            env!("CARGO_PKG_VERSION")
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        if interactive {
            print!("katalog> ");
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        if execute_line(ctx, &line) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn handle_run(ctx: &mut AppContext, script: &Path) -> Result<()> {
    let content = fs::read_to_string(script)?;
    run_lines(ctx, content.lines());
    Ok(())
}

fn run_lines<'a, I>(ctx: &mut AppContext, lines: I)
where
    I: Iterator<Item = &'a str>,
{
    for line in lines {
        if execute_line(ctx, line) == Flow::Quit {
            break;
        }
    }
}

/// Runs one line: shell verbs (list, search, get, clear, help, quit) are
/// handled here, everything else goes to the interpreter. Failures are
/// reported and the loop keeps going.
fn execute_line(ctx: &mut AppContext, line: &str) -> Flow {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Flow::Continue;
    }
    if ctx.verbose {
        println!("{}", format!("> {}", line).dimmed());
    }

    let verb = line.split_whitespace().next().unwrap_or(line);
    match verb.to_lowercase().as_str() {
        "quit" | "exit" => return Flow::Quit,
        "help" => print_help(),
        "list" => {
            let records: Vec<&Record> = ctx.store.records().collect();
            print_records(&records, ctx.style);
        }
        "search" => {
            let query = line[verb.len()..].trim_start();
            let results = ctx.store.search(query);
            print_records(&results, ctx.style);
        }
        "get" => handle_get(ctx, line),
        "clear" => {
            ctx.store.clear_all();
            print_messages(&[CmdMessage::success("Catalog cleared.")]);
        }
        _ => match interpret(&mut ctx.store, line) {
            Ok(outcome) => report_outcome(ctx, &outcome),
            Err(e @ CatalogError::UnknownCommand(_)) => {
                print_messages(&[CmdMessage::warning(e.to_string())]);
            }
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        },
    }
    Flow::Continue
}

fn handle_get(ctx: &AppContext, line: &str) {
    let mut tokens = line.split_whitespace();
    tokens.next(); // the verb
    match tokens.next() {
        Some(identifier) => match ctx.store.get(identifier) {
            Some(record) => println!("{}", format_record(record, ctx.style)),
            None => print_messages(&[CmdMessage::info(format!(
                "No record with identifier '{}'.",
                identifier
            ))]),
        },
        None => print_messages(&[CmdMessage::error(
            "Malformed command: get expects <identifier>",
        )]),
    }
}

fn report_outcome(ctx: &AppContext, outcome: &Outcome) {
    match outcome {
        Outcome::Added(record) => {
            print_messages(&[CmdMessage::success(format!(
                "Added: {}",
                format_record(record, ctx.style)
            ))]);
        }
        Outcome::Removed { identifier, existed } => {
            if *existed {
                print_messages(&[CmdMessage::success(format!(
                    "Removed record '{}'.",
                    identifier
                ))]);
            } else {
                print_messages(&[CmdMessage::info(format!(
                    "No record with identifier '{}'.",
                    identifier
                ))]);
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <title> <author> <identifier>   Add a record (underscores for spaces)");
    println!("  remove <identifier>                 Remove a record");
    println!("  get <identifier>                    Show one record");
    println!("  search <text>                       Case-insensitive substring search");
    println!("  list                                Show every record in insertion order");
    println!("  clear                               Empty the catalog");
    println!("  help                                Show this help");
    println!("  quit                                Leave the shell");
}

fn handle_config(config_dir: &Path, key: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut config = CatalogConfig::load(config_dir).unwrap_or_default();

    match (key, value) {
        (None, _) => {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
        (Some(k), None) => {
            println!("{} = {}", k, config.get(k)?);
        }
        (Some(k), Some(v)) => {
            config.set(k, v)?;
            config.save(config_dir)?;
            print_messages(&[CmdMessage::success(format!("{} = {}", k, v))]);
        }
    }
    Ok(())
}
