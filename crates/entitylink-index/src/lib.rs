//! Entitylink Index Layer
//!
//! In-memory entity relationship and clustering index:
//!
//! - **Entity table**: O(1) key/value storage of confidence-weighted
//!   signal sets per entity
//! - **Relationship store**: append-only log of typed, weighted edges
//!   with per-entity adjacency
//! - **Disjoint-set index**: incremental partition of entities into
//!   connected clusters (path compression + union-by-rank, amortized
//!   inverse-Ackermann per operation)
//! - **Cluster aggregation**: "all signals reachable from entity X"
//!   without a full graph traversal
//! - **Integrity checking**: invariant validation with an explicit
//!   rebuild-from-log recovery path
//!
//! The index is a single-threaded, in-process structure with no I/O;
//! persistence, transport, and consensus are out of scope. The ordered
//! relationship log is the single source of truth: the partition and
//! every derived cluster can always be reconstructed from it via
//! [`ClusterIndex::rebuild`].
//!
//! # Examples
//!
//! ```
//! use entitylink_index::ClusterIndex;
//! use entitylink_domain::Signal;
//!
//! let mut index = ClusterIndex::new();
//!
//! // Tag two records that later turn out to be the same person
//! index.set_signals("rec-1", vec![Signal::new("email-verified", 0.8)]);
//! index.set_signals("rec-2", vec![Signal::new("phone-verified", 0.6)]);
//! index.add_relationship("rec-1", "rec-2", "duplicate-of", 1.0)?;
//!
//! // The merged view carries both signals
//! let merged = index.merged_signals("rec-1");
//! assert_eq!(merged.len(), 2);
//! # Ok::<(), entitylink_index::IndexError>(())
//! ```

#![warn(missing_docs)]

mod cluster;
mod config;
mod disjoint_set;
mod entity_table;
mod error;
mod index;
mod integrity;
mod relationship_store;

pub use config::IndexConfig;
pub use disjoint_set::DisjointSet;
pub use entity_table::{EntityRecord, EntityTable};
pub use error::IndexError;
pub use index::ClusterIndex;
pub use integrity::{IntegrityReport, IntegrityViolation};
pub use relationship_store::RelationshipStore;
