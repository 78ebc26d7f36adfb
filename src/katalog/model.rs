use crate::error::{CatalogError, Result};

/// One catalog entry.
///
/// Fields are set through [`RecordBuilder`] and never change afterwards; to
/// "edit" a record, build a replacement and add it under the same identifier.
/// The identifier is the primary key in [`crate::store::CatalogStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    identifier: String,
    title: String,
    author: String,
}

impl Record {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Stepwise constructor for [`Record`].
///
/// Setters consume and return the builder so calls chain in any order.
/// [`build`](RecordBuilder::build) borrows the builder, so one configured
/// builder can produce any number of independent records.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    title: Option<String>,
    author: Option<String>,
    identifier: Option<String>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Checks title, author and identifier in that order; the first field
    /// that is unset or empty aborts the build. Values are taken verbatim,
    /// whitespace included.
    pub fn build(&self) -> Result<Record> {
        Ok(Record {
            title: required(&self.title, "title")?,
            author: required(&self.author, "author")?,
            identifier: required(&self.identifier, "identifier")?,
        })
    }
}

fn required(field: &Option<String>, name: &'static str) -> Result<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(CatalogError::MissingField(name)),
    }
}
