//! Entity table - signal storage keyed by entity

use entitylink_domain::{EntityKey, Signal};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub(crate) fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// An entity's mutable state: its signal list and last mutation time
#[derive(Debug, Clone, Default)]
pub struct EntityRecord {
    /// Signals in insertion order, no duplicate labels
    pub signals: Vec<Signal>,

    /// Timestamp of last signal mutation (seconds since Unix epoch)
    pub last_updated: u64,
}

/// Key/value store mapping entities to their signal sets
///
/// Pure map access, O(1) amortized per operation. Unknown keys are never
/// errors: reads resolve to empty results and writes create the entity.
#[derive(Debug, Default)]
pub struct EntityTable {
    entities: HashMap<EntityKey, EntityRecord>,
}

impl EntityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entity's signal list
    ///
    /// The stored list contains no duplicate labels: when the incoming
    /// sequence repeats a label, or repeats one already stored, the last
    /// write wins (confidence included) and the surviving entry takes
    /// the position of the latest write.
    pub fn set_signals(&mut self, key: EntityKey, signals: Vec<Signal>) {
        let record = self.entities.entry(key).or_default();
        for signal in signals {
            record.signals.retain(|s| s.label != signal.label);
            record.signals.push(signal);
        }
        record.last_updated = current_timestamp();
    }

    /// The entity's signals in insertion order; empty for unknown keys
    pub fn signals(&self, key: &EntityKey) -> &[Signal] {
        self.entities
            .get(key)
            .map(|r| r.signals.as_slice())
            .unwrap_or(&[])
    }

    /// Maximum confidence among the entity's signals, 0.0 if none
    pub fn confidence(&self, key: &EntityKey) -> f64 {
        self.signals(key)
            .iter()
            .map(|s| s.confidence)
            .fold(0.0, f64::max)
    }

    /// Get-or-insert an empty record for `key`
    ///
    /// Used when a relationship names an endpoint the table has not
    /// seen: the entity is created with no signals.
    pub fn touch(&mut self, key: &EntityKey) {
        if !self.entities.contains_key(key) {
            self.entities.insert(key.clone(), EntityRecord::default());
        }
    }

    /// When the entity's signals last changed, if it exists
    pub fn last_updated(&self, key: &EntityKey) -> Option<u64> {
        self.entities.get(key).map(|r| r.last_updated)
    }

    /// Iterate over all known entity keys
    pub fn keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.entities.keys()
    }

    /// Number of known entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if no entities are known
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
