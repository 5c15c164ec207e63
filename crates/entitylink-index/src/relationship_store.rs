//! Append-only relationship store
//!
//! Edges live in a single insertion-ordered log; per-entity adjacency
//! holds indices into that log for both endpoints, so connectivity is
//! undirected while each edge keeps its direction for semantic queries.

use crate::error::IndexError;
use crate::entity_table::current_timestamp;
use entitylink_domain::{EntityKey, Relationship};
use std::collections::HashMap;

/// Append-only, per-entity adjacency of typed, weighted edges
///
/// Edges are immutable once appended. A later edge between the same
/// endpoints supersedes earlier ones for display purposes only; every
/// edge stays in the log for audit, and the log is the source of truth
/// the disjoint-set index can always be rebuilt from.
#[derive(Debug, Default)]
pub struct RelationshipStore {
    edges: Vec<Relationship>,
    adjacency: HashMap<EntityKey, Vec<usize>>,
}

impl RelationshipStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge, indexing it under both endpoints
    ///
    /// Rejects negative or NaN weights with
    /// [`IndexError::InvalidWeight`] before any mutation. O(1)
    /// amortized.
    pub fn append(
        &mut self,
        from: EntityKey,
        to: EntityKey,
        kind: impl Into<String>,
        weight: f64,
    ) -> Result<&Relationship, IndexError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(IndexError::InvalidWeight { weight });
        }

        let seq = self.edges.len() as u64;
        let edge_index = self.edges.len();

        self.adjacency
            .entry(from.clone())
            .or_default()
            .push(edge_index);
        if to != from {
            self.adjacency
                .entry(to.clone())
                .or_default()
                .push(edge_index);
        }

        self.edges.push(Relationship {
            from,
            to,
            kind: kind.into(),
            weight,
            seq,
            created_at: current_timestamp(),
        });
        Ok(&self.edges[edge_index])
    }

    /// All edges touching `key`, in insertion order
    ///
    /// Snapshot at call time, not a live iterator.
    pub fn relationships_of(&self, key: &EntityKey) -> Vec<Relationship> {
        self.adjacency
            .get(key)
            .map(|indices| indices.iter().map(|&i| self.edges[i].clone()).collect())
            .unwrap_or_default()
    }

    /// The full edge log in insertion order
    pub fn edges(&self) -> &[Relationship] {
        &self.edges
    }

    /// Undirected neighbor enumeration for `key`
    ///
    /// May repeat a neighbor when parallel edges exist; callers doing
    /// traversals guard with a visited set.
    pub fn neighbors<'a>(&'a self, key: &'a EntityKey) -> impl Iterator<Item = &'a EntityKey> {
        self.adjacency
            .get(key)
            .into_iter()
            .flatten()
            .filter_map(move |&i| self.edges[i].other_endpoint(key))
    }

    /// Number of edges in the log
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if the log is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
