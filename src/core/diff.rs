//! Classifies translation keys as inserted, updated or deleted between two snapshots.

use std::fmt;

use indexmap::IndexSet;

use super::TranslationMap;

/// Classification of a changed key, rendered in the journal `UPDATE_TYPE` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChangeKind {
    New,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::New => "NEW",
            ChangeKind::Update => "UPDATE",
            ChangeKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys that changed between a previous and a current snapshot.
///
/// The three sets are disjoint. Inserted and updated keys follow the canonical
/// order of the current snapshot, deleted keys that of the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationDiff {
    pub inserted: IndexSet<String>,
    pub updated: IndexSet<String>,
    pub deleted: IndexSet<String>,
}

impl TranslationDiff {
    /// Whether a journal has anything to report.
    ///
    /// Deleted keys only count when they are shown.
    pub fn is_journal_generated(&self, show_deleted: bool) -> bool {
        !self.inserted.is_empty()
            || !self.updated.is_empty()
            || (show_deleted && !self.deleted.is_empty())
    }

    /// Journal rows in output order: inserted, then updated, then (optionally) deleted.
    pub fn changes(&self, show_deleted: bool) -> impl Iterator<Item = (ChangeKind, &str)> {
        let deleted = show_deleted.then_some(&self.deleted).into_iter().flatten();
        self.inserted
            .iter()
            .map(|key| (ChangeKind::New, key.as_str()))
            .chain(self.updated.iter().map(|key| (ChangeKind::Update, key.as_str())))
            .chain(deleted.map(|key| (ChangeKind::Delete, key.as_str())))
    }

    pub fn classify(&self, key: &str) -> Option<ChangeKind> {
        if self.inserted.contains(key) {
            Some(ChangeKind::New)
        } else if self.updated.contains(key) {
            Some(ChangeKind::Update)
        } else if self.deleted.contains(key) {
            Some(ChangeKind::Delete)
        } else {
            None
        }
    }
}

/// Compare two snapshots.
///
/// - inserted: in the current canonical key set only
/// - deleted: in the previous canonical key set only
/// - updated: in both, and for some locale present in both snapshots the
///   previous value is non-empty and differs from the current one
///
/// The non-empty gate means a key whose previous values were all empty is
/// reported as unchanged even once it gets translated.
pub fn diff(previous: &TranslationMap, current: &TranslationMap) -> TranslationDiff {
    let previous_keys = previous.canonical_keys();
    let current_keys = current.canonical_keys();

    let shared_locales: Vec<&str> = previous
        .locales()
        .filter(|locale| current.contains_locale(locale))
        .collect();

    let mut result = TranslationDiff::default();

    for key in &current_keys {
        if !previous_keys.contains(key) {
            result.inserted.insert(key.to_string());
        } else if is_updated(previous, current, &shared_locales, key) {
            result.updated.insert(key.to_string());
        }
    }

    for key in &previous_keys {
        if !current_keys.contains(key) {
            result.deleted.insert(key.to_string());
        }
    }

    result
}

fn is_updated(
    previous: &TranslationMap,
    current: &TranslationMap,
    shared_locales: &[&str],
    key: &str,
) -> bool {
    shared_locales.iter().any(|locale| {
        match previous.value(locale, key) {
            Some(old) if !old.is_empty() => current.value(locale, key) != Some(old),
            _ => false,
        }
    })
}
