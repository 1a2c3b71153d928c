//! Resource synchronizer
//!
//! Makes sure every localization key a class needs is present in the
//! resource store. Works on snapshots: `ensure_key` takes a store and returns
//! the next one together with what happened, so the idempotence and
//! non-clobber rules can be checked without touching a file.
//!
//! Rules for a single key:
//! - Existing entries are copied in their original order, value and comment
//!   untouched.
//! - The key counts as found when any entry with exactly that key has a
//!   non-blank value.
//! - When not found, a new entry is appended at the tail, even if blank
//!   entries with the same key exist.
//! - A blank default is never appended on top of an existing entry.

use crate::domain::entities::{ClassSpec, ResourceEntry, ResourceStore};
use crate::domain::value_objects::{description_key, display_name_key, KeyOwner};

/// Default value written for keys that are missing
pub const DEFAULT_VALUE: &str = "myvalue";

/// A key that must exist in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRequest {
    pub key: String,
    pub default_value: String,
    pub comment: Option<String>,
}

impl KeyRequest {
    pub fn new(key: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_value: default_value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// What `ensure_key` did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// A non-blank value already exists
    Found,
    /// A new entry was appended
    Added,
    /// Entry exists but is blank, and the default is blank as well
    KeptBlank,
}

/// Result of ensuring one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureOutcome {
    pub store: ResourceStore,
    pub status: KeyStatus,
}

impl EnsureOutcome {
    pub fn found(&self) -> bool {
        self.status == KeyStatus::Found
    }
}

/// Ensure `request.key` exists in `store`
pub fn ensure_key(store: &ResourceStore, request: &KeyRequest) -> EnsureOutcome {
    let status = if store.has_value(&request.key) {
        KeyStatus::Found
    } else if request.default_value.trim().is_empty() && store.contains_key(&request.key) {
        KeyStatus::KeptBlank
    } else {
        KeyStatus::Added
    };

    let store = match status {
        KeyStatus::Added => store.appended(
            ResourceEntry::new(&request.key, &request.default_value)
                .with_comment(request.comment.clone()),
        ),
        KeyStatus::Found | KeyStatus::KeptBlank => store.clone(),
    };

    EnsureOutcome { store, status }
}

/// Keys a class needs, in request order
///
/// Class display name and description first, then one pair per argument in
/// argument order. Display-name entries carry the owner's comment;
/// description entries carry none.
pub fn required_keys(spec: &ClassSpec, default_value: &str) -> Vec<KeyRequest> {
    let mut requests = Vec::with_capacity(2 + spec.arguments().len() * 2);
    push_pair(
        &mut requests,
        spec.class_name(),
        KeyOwner::Class,
        default_value,
    );
    for argument in spec.arguments() {
        push_pair(
            &mut requests,
            argument.identifier(),
            KeyOwner::Property,
            default_value,
        );
    }
    requests
}

fn push_pair(requests: &mut Vec<KeyRequest>, name: &str, owner: KeyOwner, default_value: &str) {
    requests.push(
        KeyRequest::new(display_name_key(name), default_value)
            .with_comment(owner.display_name_comment()),
    );
    requests.push(KeyRequest::new(description_key(name), default_value));
}

/// Per-key diagnostic of a synchronization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub key: String,
    pub status: KeyStatus,
}

/// Outcome of synchronizing all keys of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub store: ResourceStore,
    pub records: Vec<KeyRecord>,
}

impl SyncReport {
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.keys_with(KeyStatus::Added)
    }

    pub fn found(&self) -> impl Iterator<Item = &str> {
        self.keys_with(KeyStatus::Found)
    }

    pub fn added_count(&self) -> usize {
        self.added().count()
    }

    pub fn has_changes(&self) -> bool {
        self.added().next().is_some()
    }

    fn keys_with(&self, status: KeyStatus) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(move |r| r.status == status)
            .map(|r| r.key.as_str())
    }
}

/// Apply `ensure_key` for every request, in order
pub fn synchronize(store: &ResourceStore, requests: &[KeyRequest]) -> SyncReport {
    let mut current = store.clone();
    let mut records = Vec::with_capacity(requests.len());

    for request in requests {
        let outcome = ensure_key(&current, request);
        records.push(KeyRecord {
            key: request.key.clone(),
            status: outcome.status,
        });
        current = outcome.store;
    }

    SyncReport {
        store: current,
        records,
    }
}
