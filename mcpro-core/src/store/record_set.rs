//! In-memory record lists that rewrite themselves on every mutation.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::PersistedStore;
use crate::error::{McProError, McProResult};

/// A user record persisted as part of a named list.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the list this record lives in.
    const KEY: &'static str;

    fn id(&self) -> i64;
}

/// A named list of records bound to a store.
///
/// Every mutation is applied in memory first and then the whole list is
/// saved. If the save fails the in-memory change stays and the error is
/// returned so the caller can tell the user it did not persist.
pub struct RecordSet<T: Record> {
    store: PersistedStore,
    records: Vec<T>,
}

impl<T: Record> RecordSet<T> {
    pub fn load(store: &PersistedStore) -> Self {
        let records: Vec<T> = store.load(T::KEY, Vec::new());
        if let Some(max) = records.iter().map(Record::id).max() {
            super::ids::observe(max);
        }
        RecordSet {
            store: store.clone(),
            records,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn append(&mut self, record: T) -> McProResult<()> {
        self.records.push(record);
        self.persist()
    }

    /// Replace the record with the same id, keeping its position.
    pub fn replace(&mut self, record: T) -> McProResult<()> {
        let index = self.index_of(record.id())?;
        self.records[index] = record;
        self.persist()
    }

    /// Remove and return the record with `id`.
    pub fn remove(&mut self, id: i64) -> McProResult<T> {
        let index = self.index_of(id)?;
        let removed = self.records.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Apply `f` to the record with `id` and save.
    pub fn modify(&mut self, id: i64, f: impl FnOnce(&mut T)) -> McProResult<()> {
        let index = self.index_of(id)?;
        f(&mut self.records[index]);
        self.persist()
    }

    /// Apply `f` to every record; saves only when `f` reports a change for at
    /// least one of them. Returns whether anything changed.
    pub fn modify_all(&mut self, mut f: impl FnMut(&mut T) -> bool) -> McProResult<bool> {
        let mut changed = false;
        for record in &mut self.records {
            changed |= f(record);
        }

        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    fn index_of(&self, id: i64) -> McProResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| McProError::RecordNotFound {
                key: T::KEY.to_string(),
                id,
            })
    }

    fn persist(&self) -> McProResult<()> {
        self.store.save(T::KEY, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: i64,
        text: String,
    }

    impl Record for Note {
        const KEY: &'static str = "test_notes";

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn note(id: i64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_append_saves_whole_list() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);

        set.append(note(1, "a")).unwrap();
        set.append(note(2, "b")).unwrap();

        let reloaded = RecordSet::<Note>::load(&store);
        assert_eq!(reloaded.as_slice(), &[note(1, "a"), note(2, "b")]);
    }

    #[test]
    fn test_append_then_remove_restores_contents() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);
        set.append(note(1, "a")).unwrap();
        set.append(note(2, "b")).unwrap();
        let before = set.as_slice().to_vec();

        set.append(note(3, "c")).unwrap();
        let removed = set.remove(3).unwrap();

        assert_eq!(removed, note(3, "c"));
        assert_eq!(set.as_slice(), before.as_slice());
        let reloaded = RecordSet::<Note>::load(&store);
        assert_eq!(reloaded.as_slice(), before.as_slice());
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);
        for (id, text) in [(1, "a"), (2, "b"), (3, "c")] {
            set.append(note(id, text)).unwrap();
        }

        set.remove(2).unwrap();

        let ids: Vec<i64> = set.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);
        set.append(note(1, "a")).unwrap();
        set.append(note(2, "b")).unwrap();

        set.replace(note(1, "z")).unwrap();

        assert_eq!(set.as_slice(), &[note(1, "z"), note(2, "b")]);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);

        let err = set.remove(42).unwrap_err();

        assert!(matches!(err, McProError::RecordNotFound { id: 42, .. }));
        assert!(set.replace(note(42, "x")).is_err());
    }

    #[test]
    fn test_modify_all_skips_save_when_unchanged() {
        let store = PersistedStore::in_memory();
        let mut set = RecordSet::<Note>::load(&store);
        set.append(note(1, "a")).unwrap();
        store.storage().set(Note::KEY, "sentinel").unwrap();

        let changed = set.modify_all(|_| false).unwrap();

        assert!(!changed);
        assert_eq!(store.storage().get(Note::KEY).as_deref(), Some("sentinel"));
    }

    #[test]
    fn test_corrupt_list_loads_empty() {
        let store = PersistedStore::in_memory();
        store.storage().set(Note::KEY, "not json").unwrap();

        let set = RecordSet::<Note>::load(&store);

        assert!(set.is_empty());
    }
}
