//! Generic in-memory collection backing every record type.
//!
//! # Responsibility
//! - Own one keyed set of records behind a single lock.
//! - Provide create/read/update/delete and predicate scans.
//!
//! # Invariants
//! - `list` returns records in insertion order; `put` over an existing id
//!   keeps the original position.
//! - Every write replaces a whole record while holding the write lock, so
//!   readers never observe a partially merged record.
//! - Absence is reported through `Option`/`bool`, never as an error.

use crate::model::{Record, RecordId, Timestamp};
use chrono::Utc;
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

struct CollectionState<R> {
    rows: BTreeMap<u64, R>,
    index: HashMap<RecordId, u64>,
    next_seq: u64,
}

impl<R> Default for CollectionState<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<R> CollectionState<R> {
    fn insert(&mut self, id: RecordId, record: R) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(id, seq);
        self.rows.insert(seq, record);
    }
}

/// Result of a guarded update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome<R> {
    Updated(R),
    NotFound,
    /// The patched record collided with another record; nothing was written.
    Conflict,
}

/// Lock-guarded, insertion-ordered map of records keyed by id.
pub struct Collection<R: Record> {
    state: RwLock<CollectionState<R>>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CollectionState::default()),
        }
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> Vec<R> {
        self.read().rows.values().cloned().collect()
    }

    /// Returns records matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.read()
            .rows
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Returns the first record matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<R> {
        self.read()
            .rows
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    pub fn get(&self, id: &str) -> Option<R> {
        let state = self.read();
        state
            .index
            .get(id)
            .and_then(|seq| state.rows.get(seq))
            .cloned()
    }

    /// Materializes and stores a new record under a fresh UUID.
    pub fn create(&self, new: R::New) -> R {
        self.create_at(new, Utc::now())
    }

    /// Same as [`Collection::create`] with a caller-supplied clock reading.
    pub fn create_at(&self, new: R::New, now: Timestamp) -> R {
        let mut state = self.write();
        insert_new(&mut state, new, now)
    }

    /// Merges `patch` into an existing record.
    ///
    /// Returns `None` without side effects when `id` is unknown.
    pub fn update(&self, id: &str, patch: R::Patch) -> Option<R> {
        self.update_at(id, patch, Utc::now())
    }

    /// Same as [`Collection::update`] with a caller-supplied clock reading.
    pub fn update_at(&self, id: &str, patch: R::Patch, now: Timestamp) -> Option<R> {
        let mut state = self.write();
        let seq = *state.index.get(id)?;
        let record = state.rows.get_mut(&seq)?;
        let mut updated = record.clone();
        updated.apply_patch(patch, now);
        *record = updated.clone();
        debug!("event=record_update module=repo kind={} id={}", R::KIND, id);
        Some(updated)
    }

    /// Creates a record unless an existing record satisfies `conflicts`.
    ///
    /// The check and the insert happen under one write lock, so two racing
    /// callers cannot both claim the same secondary key. Returns `None` on
    /// conflict.
    pub fn create_unless(&self, new: R::New, conflicts: impl Fn(&R) -> bool) -> Option<R> {
        let now = Utc::now();
        let mut state = self.write();
        if state.rows.values().any(|record| conflicts(record)) {
            return None;
        }
        Some(insert_new(&mut state, new, now))
    }

    /// Applies `patch` unless the patched record would satisfy `conflicts`
    /// against any *other* record, checked under one write lock.
    pub fn update_unless(
        &self,
        id: &str,
        patch: R::Patch,
        conflicts: impl Fn(&R, &R) -> bool,
    ) -> UpdateOutcome<R> {
        let now = Utc::now();
        let mut state = self.write();
        let Some(seq) = state.index.get(id).copied() else {
            return UpdateOutcome::NotFound;
        };
        let Some(current) = state.rows.get(&seq) else {
            return UpdateOutcome::NotFound;
        };
        let mut updated = current.clone();
        updated.apply_patch(patch, now);
        let clash = state
            .rows
            .iter()
            .any(|(other_seq, other)| *other_seq != seq && conflicts(&updated, other));
        if clash {
            return UpdateOutcome::Conflict;
        }
        state.rows.insert(seq, updated.clone());
        debug!("event=record_update module=repo kind={} id={}", R::KIND, id);
        UpdateOutcome::Updated(updated)
    }

    /// Removes a record. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut state = self.write();
        let Some(seq) = state.index.remove(id) else {
            return false;
        };
        state.rows.remove(&seq);
        debug!("event=record_delete module=repo kind={} id={}", R::KIND, id);
        true
    }

    /// Stores a fully materialized record under its own id.
    ///
    /// Replaces (and returns) any record already stored under that id.
    pub fn put(&self, record: R) -> Option<R> {
        let mut state = self.write();
        let id = record.id().to_string();
        if let Some(seq) = state.index.get(&id).copied() {
            return state.rows.insert(seq, record);
        }
        state.insert(id, record);
        None
    }

    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Writers replace whole values, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, CollectionState<R>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CollectionState<R>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_new<R: Record>(state: &mut CollectionState<R>, new: R::New, now: Timestamp) -> R {
    let id = loop {
        let candidate = Uuid::new_v4().to_string();
        if !state.index.contains_key(&candidate) {
            break candidate;
        }
    };
    let record = R::materialize(id.clone(), new, now);
    state.insert(id.clone(), record.clone());
    debug!("event=record_create module=repo kind={} id={}", R::KIND, id);
    record
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::program::{NewProgram, Program};
    use crate::model::Record;
    use chrono::Utc;

    fn new_program(name: &str) -> NewProgram {
        NewProgram {
            name: name.to_string(),
            ..NewProgram::default()
        }
    }

    #[test]
    fn list_keeps_insertion_order_after_delete_and_put() {
        let programs: Collection<Program> = Collection::new();
        let a = programs.create(new_program("a"));
        let b = programs.create(new_program("b"));
        let c = programs.create(new_program("c"));
        assert!(programs.delete(&b.id));

        let mut replacement = a.clone();
        replacement.name = "a2".to_string();
        assert!(programs.put(replacement).is_some());

        let names: Vec<_> = programs.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a2".to_string(), "c".to_string()]);
        assert_eq!(programs.get(&c.id).map(|p| p.name), Some("c".to_string()));
    }

    #[test]
    fn put_with_fixed_id_is_retrievable() {
        let programs: Collection<Program> = Collection::new();
        let record = Program::materialize("prog1".to_string(), new_program("seed"), Utc::now());
        assert!(programs.put(record.clone()).is_none());
        assert_eq!(programs.get("prog1"), Some(record));
        assert_eq!(programs.len(), 1);
    }
}
