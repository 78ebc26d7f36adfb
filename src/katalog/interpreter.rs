use crate::commands::{AddRecord, Command, RemoveRecord};
use crate::error::{CatalogError, Result};
use crate::model::Record;
use crate::store::CatalogStore;

/// What a successfully interpreted line did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record was added (or overwrote an entry with the same identifier).
    Added(Record),
    /// A removal ran; `existed` tells whether anything was actually there.
    Removed { identifier: String, existed: bool },
}

/// Executes one line of the catalog command language against the store.
///
/// Grammar, whitespace-delimited, verb matched case-insensitively:
///
/// ```text
/// add <title> <author> <identifier>
/// remove <identifier>
/// ```
///
/// There is no quoting: a field cannot contain whitespace, so multi-word
/// values must be pre-encoded by the caller (underscores by convention).
/// Tokens past a verb's arguments are ignored. On any error the store is
/// left exactly as it was.
pub fn interpret(store: &mut CatalogStore, line: &str) -> Result<Outcome> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let verb = tokens
        .first()
        .ok_or_else(|| CatalogError::Parse("empty command line".to_string()))?;

    match verb.to_lowercase().as_str() {
        "add" => interpret_add(store, &tokens),
        "remove" => interpret_remove(store, &tokens),
        _ => Err(CatalogError::UnknownCommand((*verb).to_string())),
    }
}

fn interpret_add(store: &mut CatalogStore, tokens: &[&str]) -> Result<Outcome> {
    if tokens.len() < 4 {
        return Err(CatalogError::Parse(
            "add expects <title> <author> <identifier>".to_string(),
        ));
    }

    let record = Record::builder()
        .title(tokens[1])
        .author(tokens[2])
        .identifier(tokens[3])
        .build()?;

    AddRecord::new(record.clone()).execute(store);
    Ok(Outcome::Added(record))
}

fn interpret_remove(store: &mut CatalogStore, tokens: &[&str]) -> Result<Outcome> {
    let identifier = match tokens.get(1) {
        Some(token) => (*token).to_string(),
        None => {
            return Err(CatalogError::Parse(
                "remove expects <identifier>".to_string(),
            ))
        }
    };

    let existed = store.contains(&identifier);
    RemoveRecord::new(identifier.as_str()).execute(store);
    Ok(Outcome::Removed { identifier, existed })
}
