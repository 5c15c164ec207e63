//! Entitylink Domain Layer
//!
//! This crate contains the core domain model for the entity relationship
//! and clustering index. It has zero external dependencies and defines the
//! fundamental value objects that the index layer builds on.
//!
//! ## Key Concepts
//!
//! - **Entity**: an addressable item, identified by an opaque string key
//! - **Signal**: a labeled, confidence-weighted tag attached to an entity
//! - **Relationship**: a directed, typed, weighted edge between two entities
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - The stateful index (entity table, relationship store, disjoint-set
//!   partition) lives in `entitylink-index`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod relationship;
pub mod signal;

// Re-exports for convenience
pub use entity::EntityKey;
pub use relationship::Relationship;
pub use signal::{Signal, DEFAULT_CONFIDENCE};
