use crate::model::Record;
use crate::store::CatalogStore;

/// A single catalog mutation, packaged as a value.
///
/// Commands carry their arguments and mutate a store they are handed at
/// execution time, so callers can build them anywhere, queue or log them,
/// and run them later against whichever store they choose. Queries do not
/// go through commands; read the store directly.
///
/// Executing the same command twice leaves the store as if it ran once.
pub trait Command {
    fn execute(&self, store: &mut CatalogStore);
}

/// Inserts a record, overwriting any entry with the same identifier.
pub struct AddRecord {
    record: Record,
}

impl AddRecord {
    pub fn new(record: Record) -> Self {
        Self { record }
    }
}

impl Command for AddRecord {
    fn execute(&self, store: &mut CatalogStore) {
        store.add(self.record.clone());
    }
}

/// Removes a record by identifier. Absent identifiers make this a no-op.
pub struct RemoveRecord {
    identifier: String,
}

impl RemoveRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Command for RemoveRecord {
    fn execute(&self, store: &mut CatalogStore) {
        store.remove(&self.identifier);
    }
}
