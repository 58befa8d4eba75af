//! In-memory user store.
//!
//! # Responsibilities
//! - Own every user record for the lifetime of the process
//! - Assign strictly increasing identifiers starting at 1
//! - Serve consistent snapshots to concurrent readers
//!
//! # Design Decisions
//! - Map and id counter live behind one `RwLock`, so increment-and-insert is a single unit
//! - Reads hand out clones; no caller holds a reference into the map
//! - Identifiers are never reused, even after deletion

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::metrics;
use crate::users::model::{User, UserId, UserInput};

/// State guarded by the store lock.
#[derive(Debug)]
struct Records {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// A thread-safe store of user records.
///
/// Share it behind an `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct UserStore {
    records: RwLock<Records>,
}

impl UserStore {
    /// Create an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    // No operation can panic while holding the lock, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records, ordered by id.
    pub fn list(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    /// Look up a record.
    pub fn get(&self, id: UserId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// Store a new record under the next identifier.
    ///
    /// Ids are never taken from the payload.
    pub fn add(&self, candidate: UserInput) -> User {
        let mut records = self.write();
        let id = records.next_id;
        records.next_id += 1;

        let user = User {
            id,
            name: candidate.into_name(),
        };
        records.users.insert(id, user.clone());
        metrics::record_store_size(records.users.len());
        user
    }

    /// Replace the name of an existing record.
    ///
    /// Returns the updated record, or `None` (leaving the store untouched)
    /// if `id` is absent. The stored id always stays `id`.
    pub fn update(&self, id: UserId, candidate: UserInput) -> Option<User> {
        let mut records = self.write();
        let user = records.users.get_mut(&id)?;
        user.name = candidate.into_name();
        Some(user.clone())
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&self, id: UserId) -> bool {
        let mut records = self.write();
        let removed = records.users.remove(&id).is_some();
        if removed {
            metrics::record_store_size(records.users.len());
        }
        removed
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn user(id: UserId, name: &str) -> User {
        User { id, name: name.to_string() }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = UserStore::new();

        assert_eq!(store.add(UserInput::named("Alice")), user(1, "Alice"));
        assert_eq!(store.add(UserInput::named("Bob")), user(2, "Bob"));
        assert_eq!(store.list(), vec![user(1, "Alice"), user(2, "Bob")]);
    }

    #[test]
    fn test_add_ignores_candidate_id() {
        let store = UserStore::new();
        let candidate: UserInput =
            serde_json::from_str(r#"{"id": 42, "name": "Alice"}"#).unwrap();
        let created = store.add(candidate);

        assert_eq!(created.id, 1);
        assert!(store.get(42).is_none());
        assert_eq!(store.get(1), Some(created));
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::new();
        assert!(store.get(99).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_keeps_lookup_id() {
        let store = UserStore::new();
        store.add(UserInput::named("Alice"));
        store.add(UserInput::named("Bob"));

        let candidate: UserInput =
            serde_json::from_str(r#"{"id": 999, "name": "Alicia"}"#).unwrap();
        let updated = store.update(1, candidate);

        assert_eq!(updated, Some(user(1, "Alicia")));
        assert_eq!(store.get(1), Some(user(1, "Alicia")));
        assert!(store.get(999).is_none());
        assert_eq!(store.get(2), Some(user(2, "Bob")));
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let store = UserStore::new();
        store.add(UserInput::named("Alice"));
        let before = store.list();

        assert!(store.update(5, UserInput::named("Ghost")).is_none());
        assert_eq!(store.list(), before);

        // A failed update must not consume an identifier.
        assert_eq!(store.add(UserInput::named("Bob")).id, 2);
    }

    #[test]
    fn test_delete_twice() {
        let store = UserStore::new();
        store.add(UserInput::named("Alice"));

        assert!(store.delete(1));
        assert!(store.get(1).is_none());
        assert!(!store.delete(1));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = UserStore::new();
        store.add(UserInput::named("Alice"));
        store.add(UserInput::named("Bob"));
        store.delete(2);

        assert_eq!(store.add(UserInput::named("Carol")).id, 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_adds_get_distinct_ids() {
        let store = Arc::new(UserStore::new());
        let threads = 8;
        let per_thread = 250;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    let mut ids = Vec::with_capacity(per_thread);
                    for i in 0..per_thread {
                        let created = store.add(UserInput::named(format!("user-{t}-{i}")));
                        ids.push(created.id);
                    }
                    ids
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            // Each caller sees its own ids strictly increasing.
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
            all.extend(ids);
        }

        let total = threads * per_thread;
        assert_eq!(all.len(), total);
        assert_eq!(store.len(), total);
        assert_eq!(all.iter().copied().max(), Some(total as UserId));

        // Every record is visible under the id it was assigned.
        for u in store.list() {
            assert_eq!(store.get(u.id).map(|found| found.id), Some(u.id));
        }
    }

    #[test]
    fn test_readers_never_see_partial_updates() {
        let store = Arc::new(UserStore::new());
        store.add(UserInput::named("a0"));

        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 1..500 {
                    store.update(1, UserInput::named(format!("a{i}")));
                    store.add(UserInput::named(format!("b{i}")));
                }
            })
        };

        for _ in 0..500 {
            let snapshot = store.list();
            assert!(snapshot.windows(2).all(|w| w[0].id < w[1].id));
            assert_eq!(snapshot[0].id, 1);
        }
        writer.join().unwrap();
        assert_eq!(store.get(1).map(|u| u.name), Some("a499".to_string()));
    }
}
