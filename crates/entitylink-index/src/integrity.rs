//! Structural invariant checking for the disjoint-set index
//!
//! Detection and recovery are deliberately separate: `check` reports
//! violations and never fixes anything inline; the explicit
//! [`ClusterIndex::rebuild`](crate::ClusterIndex::rebuild) call is the
//! only corrective action.

use crate::disjoint_set::DisjointSet;
use crate::relationship_store::RelationshipStore;
use entitylink_domain::EntityKey;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// A single structural invariant violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// Following parent pointers from `key` never reaches a root
    #[error("Parent chain from '{key}' does not terminate at a root")]
    ParentCycle {
        /// Entity whose chain loops or escapes the node set
        key: EntityKey,
    },

    /// A non-root node whose rank is not strictly below its parent's
    #[error("Rank does not increase from '{child}' to its parent '{parent}'")]
    RankInversion {
        /// The offending node
        child: EntityKey,
        /// Its direct parent
        parent: EntityKey,
    },

    /// Root count disagrees with a fresh recount of graph components
    #[error(
        "Index tracks {index_roots} roots but the relationship graph has {graph_components} components"
    )]
    ComponentMismatch {
        /// Distinct roots in the disjoint-set index
        index_roots: usize,
        /// Connected components recomputed from the relationship store
        graph_components: usize,
    },
}

/// Outcome of an invariant check
///
/// A report, not an exception: callers inspect it and decide whether to
/// invoke the rebuild path.
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    /// Every violation found, in detection order
    pub violations: Vec<IntegrityViolation>,
}

impl IntegrityReport {
    /// True if no violations were found
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable report of all violations
    pub fn summary(&self) -> String {
        if self.is_ok() {
            return "All invariants hold".to_string();
        }
        let mut lines = vec![format!("{} invariant violation(s):", self.violations.len())];
        for violation in &self.violations {
            lines.push(format!("  - {}", violation));
        }
        lines.join("\n")
    }
}

/// Verify the disjoint-set invariants without mutating anything
///
/// Checks, for every known node:
/// 1. the parent chain terminates at a root within a bounded walk;
/// 2. rank strictly increases from each non-root node to its parent;
/// 3. the number of distinct roots matches the number of connected
///    components recomputed from the relationship store by a fresh
///    traversal (independent of the index's own bookkeeping).
pub(crate) fn check(set: &DisjointSet, store: &RelationshipStore) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    for key in set.keys() {
        if set.find_readonly(key).is_none() {
            report
                .violations
                .push(IntegrityViolation::ParentCycle { key: key.clone() });
        }

        if let Some(parent) = set.parent_of(key) {
            if parent != key {
                let child_rank = set.rank_of(key).unwrap_or(0);
                let parent_rank = set.rank_of(parent).unwrap_or(0);
                if child_rank >= parent_rank {
                    report.violations.push(IntegrityViolation::RankInversion {
                        child: key.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
    }

    let index_roots = set.root_count();
    let graph_components = count_components(set, store);
    if index_roots != graph_components {
        report.violations.push(IntegrityViolation::ComponentMismatch {
            index_roots,
            graph_components,
        });
    }

    report
}

/// Count connected components over the index's node set using the
/// relationship store's adjacency, treated as undirected
///
/// A breadth-first sweep rather than a second union-find, so the
/// recount shares no bookkeeping with the structure under test.
fn count_components(set: &DisjointSet, store: &RelationshipStore) -> usize {
    let mut visited: HashSet<&EntityKey> = HashSet::new();
    let mut components = 0;

    for start in set.keys() {
        if visited.contains(start) {
            continue;
        }
        components += 1;

        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        while let Some(current) = queue.pop_front() {
            for neighbor in store.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    components
}
