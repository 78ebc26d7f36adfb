use crate::model::Record;
use indexmap::IndexMap;

/// In-memory catalog keyed by record identifier.
///
/// Entries keep insertion order: listings and search results come back in
/// the order records were first added, and overwriting an identifier keeps
/// its original position. Removal shifts later entries up rather than
/// swapping, so relative order survives.
///
/// The store is single-threaded by design. Callers that share one across
/// threads must put their own lock around it.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: IndexMap<String, Record>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, silently overwriting any entry with the same
    /// identifier (last write wins).
    pub fn add(&mut self, record: Record) {
        self.records.insert(record.identifier().to_string(), record);
    }

    /// Removes the entry and returns it, or `None` if the identifier is
    /// absent. Absent identifiers are not an error.
    pub fn remove(&mut self, identifier: &str) -> Option<Record> {
        // shift_remove, not swap_remove: listing order must survive removals
        self.records.shift_remove(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&Record> {
        self.records.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// The query is trimmed and lowercased before matching; an empty or
    /// whitespace-only query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let needle = query.trim().to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.title().to_lowercase().contains(&needle)
                    || record.author().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Drops every record. No confirmation at this layer; interfaces that
    /// want an "are you sure" step add it themselves.
    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Test fixture builder for creating stores with preloaded records
    pub struct StoreFixture {
        pub store: CatalogStore,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: CatalogStore::new(),
            }
        }

        /// Adds one record with the given fields
        pub fn with_record(mut self, title: &str, author: &str, identifier: &str) -> Self {
            let record = Record::builder()
                .title(title)
                .author(author)
                .identifier(identifier)
                .build()
                .unwrap();
            self.store.add(record);
            self
        }

        /// Adds `count` generated records with identifiers "1", "2", ...
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 1..=count {
                let record = Record::builder()
                    .title(format!("Title {}", i))
                    .author(format!("Author {}", i))
                    .identifier(i.to_string())
                    .build()
                    .unwrap();
                self.store.add(record);
            }
            self
        }

        pub fn build(self) -> CatalogStore {
            self.store
        }
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }
}
