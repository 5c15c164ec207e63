//! Error types for index operations

use thiserror::Error;

/// Errors that can occur during index operations
///
/// The API is deliberately total: unknown-key lookups are never errors
/// (they resolve to empty or singleton results), and structural
/// corruption is reported through
/// [`IntegrityReport`](crate::IntegrityReport) rather than this enum.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Relationship weight was negative or NaN
    ///
    /// Rejected before any mutation: the edge is not appended and no
    /// union happens.
    #[error("Invalid relationship weight: {weight} (must be >= 0)")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },
}
