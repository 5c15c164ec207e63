//! Cluster aggregation queries
//!
//! Read-only composition of the entity table and the disjoint-set
//! index: "who is in the cluster containing X" and "what signals does
//! the whole cluster carry". Clusters are never materialized; they are
//! derived on demand from the partition.
//!
//! Queries borrow the disjoint set mutably because `find` compresses
//! paths even on reads.

use crate::disjoint_set::DisjointSet;
use crate::entity_table::EntityTable;
use entitylink_domain::{EntityKey, Signal};
use std::collections::{BTreeMap, BTreeSet};

/// All entities sharing a root with `key`, including `key` itself
///
/// Computed by scanning the known-entity set and grouping by root; this
/// is the one linear-in-total-entities query of the subsystem. The
/// result is sorted, so it behaves as a set with stable ordering. An
/// unknown key yields a singleton cluster of the implicitly-created key.
pub(crate) fn cluster_members(
    table: &EntityTable,
    set: &mut DisjointSet,
    key: &EntityKey,
) -> Vec<EntityKey> {
    let root = set.find(key);

    // Entities may be known to the table only (signals, no edges yet) or
    // to the partition only (touched via find/union); scan both.
    let candidates: BTreeSet<EntityKey> = table
        .keys()
        .chain(set.keys())
        .cloned()
        .collect();

    // `key` is always a candidate: the find above registered it.
    candidates
        .into_iter()
        .filter(|candidate| set.find(candidate) == root)
        .collect()
}

/// Merged signal set for the cluster containing `key`
///
/// One entry per label, with confidence resolved to the maximum seen
/// across all cluster members. This deliberately differs from the
/// entity table's own last-write-wins rule, which applies within a
/// single entity only. Sorted by label.
pub(crate) fn merged_signals(
    table: &EntityTable,
    set: &mut DisjointSet,
    key: &EntityKey,
) -> Vec<Signal> {
    let mut by_label: BTreeMap<String, f64> = BTreeMap::new();

    for member in cluster_members(table, set, key) {
        for signal in table.signals(&member) {
            let entry = by_label.entry(signal.label.clone()).or_insert(0.0);
            if signal.confidence > *entry {
                *entry = signal.confidence;
            }
        }
    }

    by_label
        .into_iter()
        .map(|(label, confidence)| Signal::new(label, confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> EntityKey {
        EntityKey::new(s)
    }

    #[test]
    fn test_unknown_key_is_singleton_cluster() {
        let table = EntityTable::new();
        let mut set = DisjointSet::new();
        let members = cluster_members(&table, &mut set, &key("ghost"));
        assert_eq!(members, vec![key("ghost")]);
    }

    #[test]
    fn test_members_span_the_component() {
        let table = EntityTable::new();
        let mut set = DisjointSet::new();
        set.union(&key("a"), &key("b"));
        set.union(&key("b"), &key("c"));
        set.insert(&key("d"));

        let members = cluster_members(&table, &mut set, &key("a"));
        assert_eq!(members, vec![key("a"), key("b"), key("c")]);
    }

    #[test]
    fn test_signal_only_entity_is_its_own_cluster() {
        let mut table = EntityTable::new();
        let mut set = DisjointSet::new();
        table.set_signals(key("solo"), vec![Signal::new("x", 0.5)]);

        let members = cluster_members(&table, &mut set, &key("solo"));
        assert_eq!(members, vec![key("solo")]);
    }

    #[test]
    fn test_merged_signals_take_max_confidence() {
        let mut table = EntityTable::new();
        let mut set = DisjointSet::new();
        table.set_signals(key("p"), vec![Signal::new("X", 0.3)]);
        table.set_signals(key("q"), vec![Signal::new("X", 0.7)]);
        set.union(&key("p"), &key("q"));

        let merged = merged_signals(&table, &mut set, &key("p"));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].label, "X");
        assert_eq!(merged[0].confidence, 0.7);
    }

    #[test]
    fn test_merged_signals_union_distinct_labels() {
        let mut table = EntityTable::new();
        let mut set = DisjointSet::new();
        table.set_signals(key("p"), vec![Signal::new("a", 0.4)]);
        table.set_signals(key("q"), vec![Signal::new("b", 0.6)]);
        set.union(&key("p"), &key("q"));

        let merged = merged_signals(&table, &mut set, &key("q"));
        let labels: Vec<&str> = merged.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_merged_signals_exclude_other_clusters() {
        let mut table = EntityTable::new();
        let mut set = DisjointSet::new();
        table.set_signals(key("p"), vec![Signal::new("mine", 0.5)]);
        table.set_signals(key("far"), vec![Signal::new("theirs", 0.9)]);
        set.insert(&key("p"));
        set.insert(&key("far"));

        let merged = merged_signals(&table, &mut set, &key("p"));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].label, "mine");
    }
}
