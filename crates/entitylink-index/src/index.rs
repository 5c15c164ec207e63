//! The cluster index context object
//!
//! Owns one entity table, one relationship store, and one disjoint-set
//! partition, linked only by entity-key identity. An explicit instance
//! rather than process-wide state, so independent indices coexist
//! (e.g. one per test).

use crate::cluster;
use crate::config::IndexConfig;
use crate::disjoint_set::DisjointSet;
use crate::entity_table::EntityTable;
use crate::error::IndexError;
use crate::integrity::{self, IntegrityReport};
use crate::relationship_store::RelationshipStore;
use entitylink_domain::{EntityKey, Relationship, Signal};

/// In-memory entity relationship and clustering index
///
/// Attaches mutable, confidence-weighted signal sets to entities,
/// records typed weighted relationships between them, and maintains the
/// partition of entities into connected clusters incrementally, so the
/// merged signal set reachable from any entity is available without a
/// full graph traversal.
///
/// All operations are synchronous and perform no I/O. Queries that
/// route through `find` take `&mut self` because path compression
/// mutates parent pointers even on reads; concurrent callers must wrap
/// the whole index in a single exclusive lock.
///
/// # Examples
///
/// ```
/// use entitylink_index::ClusterIndex;
/// use entitylink_domain::Signal;
///
/// let mut index = ClusterIndex::new();
/// index.set_signals("u1", vec![Signal::new("verified", 0.8)]);
/// index.add_relationship("u1", "u2", "duplicate-of", 1.0).unwrap();
/// index.add_relationship("u2", "u3", "duplicate-of", 1.0).unwrap();
///
/// assert!(index.connected("u1", "u3"));
/// assert_eq!(index.cluster_members("u1").len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ClusterIndex {
    config: IndexConfig,
    entities: EntityTable,
    relationships: RelationshipStore,
    partition: DisjointSet,
}

impl ClusterIndex {
    /// Create an index with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with the given configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // --- Entity table operations ---

    /// Insert or replace the entity's signal list
    ///
    /// Unknown keys are created; within one entity the last write for a
    /// label wins, confidence included.
    pub fn set_signals(&mut self, key: impl Into<EntityKey>, signals: Vec<Signal>) {
        self.entities.set_signals(key.into(), signals);
    }

    /// Tag the entity with plain labels at the configured default
    /// confidence
    pub fn set_labels(&mut self, key: impl Into<EntityKey>, labels: &[&str]) {
        let signals = labels
            .iter()
            .map(|label| Signal::new(*label, self.config.default_confidence))
            .collect();
        self.entities.set_signals(key.into(), signals);
    }

    /// The entity's own signals; empty for unknown keys
    pub fn signals(&self, key: impl Into<EntityKey>) -> &[Signal] {
        self.entities.signals(&key.into())
    }

    /// Maximum confidence among the entity's own signals, 0.0 if none
    pub fn confidence(&self, key: impl Into<EntityKey>) -> f64 {
        self.entities.confidence(&key.into())
    }

    // --- Relationship operations ---

    /// Record a directed, typed, weighted relationship and merge the
    /// endpoints' clusters
    ///
    /// Unknown endpoints are implicitly created as empty entities.
    /// Rejects negative or NaN weight with [`IndexError::InvalidWeight`]
    /// before any mutation.
    pub fn add_relationship(
        &mut self,
        from: impl Into<EntityKey>,
        to: impl Into<EntityKey>,
        kind: impl Into<String>,
        weight: f64,
    ) -> Result<(), IndexError> {
        let from = from.into();
        let to = to.into();

        self.relationships
            .append(from.clone(), to.clone(), kind, weight)?;
        self.entities.touch(&from);
        self.entities.touch(&to);

        if self.partition.union(&from, &to) {
            tracing::debug!(%from, %to, "Merged clusters");
        }
        Ok(())
    }

    /// All relationships touching `key`, in insertion order
    ///
    /// A snapshot at call time, not a live view.
    pub fn relationships(&self, key: impl Into<EntityKey>) -> Vec<Relationship> {
        self.relationships.relationships_of(&key.into())
    }

    // --- Partition operations ---

    /// Root of the cluster containing `key`
    ///
    /// Unknown keys are registered as singleton clusters (first-touch
    /// semantics).
    pub fn find(&mut self, key: impl Into<EntityKey>) -> EntityKey {
        self.partition.find(&key.into())
    }

    /// Merge the clusters containing `a` and `b` directly
    ///
    /// Returns `false` when already connected (including self-union),
    /// `true` on an actual merge. Most callers should prefer
    /// [`add_relationship`](Self::add_relationship), which records the
    /// edge the rebuild path replays; a bare union is not replayable.
    pub fn union(&mut self, a: impl Into<EntityKey>, b: impl Into<EntityKey>) -> bool {
        self.partition.union(&a.into(), &b.into())
    }

    /// True if `a` and `b` are in the same cluster
    pub fn connected(&mut self, a: impl Into<EntityKey>, b: impl Into<EntityKey>) -> bool {
        self.partition.connected(&a.into(), &b.into())
    }

    // --- Cluster aggregation queries ---

    /// All entities in the cluster containing `key`, including `key`
    /// itself, sorted
    pub fn cluster_members(&mut self, key: impl Into<EntityKey>) -> Vec<EntityKey> {
        cluster::cluster_members(&self.entities, &mut self.partition, &key.into())
    }

    /// Deduplicated signal set across the cluster containing `key`
    ///
    /// One entry per label with the maximum confidence seen among
    /// members, sorted by label.
    pub fn merged_signals(&mut self, key: impl Into<EntityKey>) -> Vec<Signal> {
        cluster::merged_signals(&self.entities, &mut self.partition, &key.into())
    }

    // --- Integrity ---

    /// Verify the structural invariants of the partition
    ///
    /// Never repairs anything: callers inspect the report and decide
    /// whether to invoke [`rebuild`](Self::rebuild).
    pub fn check_invariants(&self) -> IntegrityReport {
        let report = integrity::check(&self.partition, &self.relationships);
        if !report.is_ok() {
            tracing::warn!(violations = report.violations.len(), "Integrity check failed");
        }
        report
    }

    /// Discard the partition and replay the relationship log
    ///
    /// Every known entity restarts as a singleton, then each edge is
    /// replayed through `union` in insertion order. This is the
    /// explicit, non-incremental recovery path for corruption; it is
    /// never triggered implicitly.
    pub fn rebuild(&mut self) {
        self.partition.reset();

        for key in self.entities.keys() {
            self.partition.insert(key);
        }
        let edges: Vec<(EntityKey, EntityKey)> = self
            .relationships
            .edges()
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect();
        let replayed = edges.len();
        for (from, to) in edges {
            self.partition.insert(&from);
            self.partition.insert(&to);
            self.partition.union(&from, &to);
        }

        tracing::info!(
            entities = self.partition.len(),
            edges = replayed,
            clusters = self.partition.root_count(),
            "Rebuilt disjoint-set index from relationship log"
        );
    }

    // --- Counters ---

    /// Number of entities in the entity table
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of recorded relationships
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Number of distinct clusters in the partition
    pub fn cluster_count(&self) -> usize {
        self.partition.root_count()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn name(i: u8) -> String {
        format!("e{}", i)
    }

    proptest! {
        /// Property: invariants hold after every operation of any
        /// relationship sequence
        #[test]
        fn test_invariants_preserved(
            edges in proptest::collection::vec((0u8..15, 0u8..15), 0..40)
        ) {
            let mut index = ClusterIndex::new();
            for (a, b) in edges {
                index.add_relationship(name(a), name(b), "linked", 1.0).unwrap();
                prop_assert!(index.check_invariants().is_ok());
            }
        }

        /// Property: incremental partition equals the partition after a
        /// full rebuild replaying the same log
        #[test]
        fn test_rebuild_equivalence(
            edges in proptest::collection::vec((0u8..15, 0u8..15), 0..40),
            probe in 0u8..15,
        ) {
            let mut index = ClusterIndex::new();
            for (a, b) in &edges {
                index.add_relationship(name(*a), name(*b), "linked", 1.0).unwrap();
            }

            let before = index.cluster_members(name(probe));
            index.rebuild();
            prop_assert_eq!(index.cluster_members(name(probe)), before);
        }

        /// Property: cluster membership is monotonic across appends
        #[test]
        fn test_cluster_monotonicity(
            edges in proptest::collection::vec((0u8..12, 0u8..12), 1..30),
            probe in 0u8..12,
        ) {
            let mut index = ClusterIndex::new();
            let mut previous = index.cluster_members(name(probe));
            for (a, b) in edges {
                index.add_relationship(name(a), name(b), "linked", 1.0).unwrap();
                let current = index.cluster_members(name(probe));
                prop_assert!(previous.iter().all(|k| current.contains(k)));
                previous = current;
            }
        }
    }
}
