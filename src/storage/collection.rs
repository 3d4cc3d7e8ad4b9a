//! Generic record collection backed by a JSON file
//!
//! A collection keeps its records in insertion order with an id index, so
//! list reads come back in the order records were created and point lookups
//! stay cheap. All access goes through an `RwLock`: reads see a consistent
//! snapshot, writes are serialised per collection. Every mutation writes the
//! file before returning and is undone in memory when that write fails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::RecordId;

use super::file_io::{read_collection, write_collection};

/// A record type that can live in a [`Collection`]
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned {
    type Id: RecordId;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Key of the record array inside the collection file
    const COLLECTION: &'static str;

    fn id(&self) -> Self::Id;
}

struct Table<T: Record> {
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Record> Table<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn from_records(records: Vec<T>) -> Self {
        let mut table = Self::empty();
        for record in records {
            // Later duplicates of an id replace the earlier entry in place
            match table.index.get(&record.id()) {
                Some(&pos) => table.records[pos] = record,
                None => {
                    table.index.insert(record.id(), table.records.len());
                    table.records.push(record);
                }
            }
        }
        table
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.index.insert(record.id(), pos);
        }
    }
}

/// File-backed, insertion-ordered collection of records
pub struct Collection<T: Record> {
    path: PathBuf,
    pretty: bool,
    table: RwLock<Table<T>>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection stored at `path`
    pub fn new(path: PathBuf, pretty: bool) -> Self {
        Self {
            path,
            pretty,
            table: RwLock::new(Table::empty()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> ExpenseResult<RwLockReadGuard<'_, Table<T>>> {
        self.table
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> ExpenseResult<RwLockWriteGuard<'_, Table<T>>> {
        self.table
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn not_found(id: T::Id) -> ExpenseError {
        ExpenseError::NotFound {
            entity_type: T::ENTITY,
            identifier: id.to_string(),
        }
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> ExpenseResult<()> {
        let records = read_collection(&self.path, T::COLLECTION)?;

        let mut table = self.write()?;
        *table = Table::from_records(records);

        tracing::debug!(
            collection = T::COLLECTION,
            count = table.records.len(),
            path = %self.path.display(),
            "loaded collection"
        );
        Ok(())
    }

    fn persist(&self, records: &[T]) -> ExpenseResult<()> {
        write_collection(&self.path, T::COLLECTION, records, self.pretty).map_err(|e| {
            tracing::warn!(collection = T::COLLECTION, error = %e, "collection write failed");
            e
        })?;

        tracing::debug!(collection = T::COLLECTION, count = records.len(), "saved collection");
        Ok(())
    }

    /// Save records to disk in insertion order
    pub fn save(&self) -> ExpenseResult<()> {
        let table = self.read()?;
        self.persist(&table.records)
    }

    /// Get a record by ID
    pub fn get(&self, id: T::Id) -> ExpenseResult<Option<T>> {
        let table = self.read()?;
        Ok(table.index.get(&id).map(|&pos| table.records[pos].clone()))
    }

    /// Get all records in insertion order
    pub fn get_all(&self) -> ExpenseResult<Vec<T>> {
        Ok(self.read()?.records.clone())
    }

    /// Insert a new record and write the collection; the collection mints its identifier
    ///
    /// If the write fails the record is dropped again and the error returned.
    pub fn insert_new<F>(&self, build: F) -> ExpenseResult<T::Id>
    where
        F: FnOnce(T::Id) -> T,
    {
        let mut table = self.write()?;

        let mut id = T::Id::generate();
        while table.index.contains_key(&id) {
            id = T::Id::generate();
        }

        let record = build(id);
        let pos = table.records.len();
        table.index.insert(id, pos);
        table.records.push(record);

        if let Err(e) = self.persist(&table.records) {
            table.records.pop();
            table.index.remove(&id);
            return Err(e);
        }
        Ok(id)
    }

    /// Modify an existing record in place and write the collection
    ///
    /// Fails with `NotFound` when the id does not resolve. The record keeps
    /// its position in the collection. A failed write restores the previous
    /// record.
    pub fn update<F>(&self, id: T::Id, apply: F) -> ExpenseResult<T>
    where
        F: FnOnce(&mut T),
    {
        let mut table = self.write()?;
        let pos = *table.index.get(&id).ok_or_else(|| Self::not_found(id))?;

        let previous = table.records[pos].clone();
        apply(&mut table.records[pos]);

        if let Err(e) = self.persist(&table.records) {
            table.records[pos] = previous;
            return Err(e);
        }
        Ok(table.records[pos].clone())
    }

    /// Remove a record and write the collection, returning the record
    ///
    /// A failed write puts the record back at its old position.
    pub fn delete(&self, id: T::Id) -> ExpenseResult<T> {
        let mut table = self.write()?;
        let pos = table.index.remove(&id).ok_or_else(|| Self::not_found(id))?;

        let removed = table.records.remove(pos);
        table.reindex_from(pos);

        if let Err(e) = self.persist(&table.records) {
            table.records.insert(pos, removed);
            table.reindex_from(pos);
            return Err(e);
        }
        Ok(removed)
    }

    /// Count records
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.read()?.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, CategoryInput};
    use crate::storage::file_io::temp_path;
    use tempfile::TempDir;

    fn create_test_collection() -> (TempDir, Collection<Category>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        (temp_dir, Collection::new(path, true))
    }

    fn insert(collection: &Collection<Category>, name: &str) -> CategoryId {
        collection
            .insert_new(|id| Category::new(id, CategoryInput::named(name), 0))
            .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, collection) = create_test_collection();
        collection.load().unwrap();
        assert_eq!(collection.count().unwrap(), 0);
    }

    #[test]
    fn test_insertion_order_survives_delete() {
        let (_temp_dir, collection) = create_test_collection();
        let a = insert(&collection, "A");
        let b = insert(&collection, "B");
        let c = insert(&collection, "C");

        collection.delete(b).unwrap();
        let d = insert(&collection, "D");

        let ids: Vec<_> = collection.get_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, c, d]);
        assert_eq!(collection.get(c).unwrap().unwrap().name, "C");
        assert!(collection.get(b).unwrap().is_none());
    }

    #[test]
    fn test_update_and_delete_missing() {
        let (_temp_dir, collection) = create_test_collection();
        let missing = CategoryId::new();

        let err = collection.update(missing, |c| c.name.clear()).unwrap_err();
        assert!(err.is_not_found());

        let err = collection.delete(missing).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_keeps_position() {
        let (_temp_dir, collection) = create_test_collection();
        let a = insert(&collection, "A");
        let b = insert(&collection, "B");

        let updated = collection.update(a, |c| c.name = "Z".into()).unwrap();
        assert_eq!(updated.name, "Z");

        let names: Vec<_> = collection
            .get_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Z", "B"]);
        assert!(collection.get(b).unwrap().is_some());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, collection) = create_test_collection();
        let first = insert(&collection, "First");
        let second = insert(&collection, "Second");
        collection.save().unwrap();

        let reloaded: Collection<Category> =
            Collection::new(temp_dir.path().join("categories.json"), false);
        reloaded.load().unwrap();

        let ids: Vec<_> = reloaded.get_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_mutations_are_written_immediately() {
        let (temp_dir, collection) = create_test_collection();
        let a = insert(&collection, "A");
        insert(&collection, "B");
        collection.delete(a).unwrap();

        let reloaded: Collection<Category> =
            Collection::new(temp_dir.path().join("categories.json"), false);
        reloaded.load().unwrap();

        let names: Vec<_> = reloaded.get_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let (_temp_dir, collection) = create_test_collection();
        let a = insert(&collection, "A");
        let b = insert(&collection, "B");
        let before = collection.get_all().unwrap();

        std::fs::create_dir(temp_path(collection.path())).unwrap();

        let err = collection
            .insert_new(|id| Category::new(id, CategoryInput::named("C"), 0))
            .unwrap_err();
        assert_eq!(err.kind(), "store_unavailable");

        let err = collection.update(a, |c| c.name = "Z".into()).unwrap_err();
        assert_eq!(err.kind(), "store_unavailable");

        let err = collection.delete(a).unwrap_err();
        assert_eq!(err.kind(), "store_unavailable");

        let after = collection.get_all().unwrap();
        let ids = |records: Vec<Category>| records.into_iter().map(|r| (r.id, r.name)).collect::<Vec<_>>();
        assert_eq!(ids(after), ids(before));
        assert_eq!(collection.get(a).unwrap().unwrap().name, "A");
        assert_eq!(collection.get(b).unwrap().unwrap().name, "B");

        std::fs::remove_dir(temp_path(collection.path())).unwrap();
        collection.delete(b).unwrap();
        assert_eq!(collection.count().unwrap(), 1);
        assert_eq!(collection.get(a).unwrap().unwrap().name, "A");
    }

    #[test]
    fn test_file_shape() {
        let (temp_dir, collection) = create_test_collection();
        insert(&collection, "Food");
        collection.save().unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("categories.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["categories"][0]["name"], "Food");
    }
}
