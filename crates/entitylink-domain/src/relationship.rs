//! Relationship module - typed, weighted edges between entities

use super::EntityKey;

/// A directed, typed, weighted edge between two entities
///
/// Relationships are append-only and immutable once created. A later
/// edge between the same endpoints supersedes earlier ones for display
/// purposes only; all edges remain in the log for audit. Connectivity
/// treats edges as undirected; direction is preserved for semantic
/// queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Source entity
    pub from: EntityKey,

    /// Target entity
    pub to: EntityKey,

    /// Free-form relationship kind (e.g. "duplicate-of", "parent-of")
    pub kind: String,

    /// Edge weight, >= 0.0
    ///
    /// Validated by the relationship store at append time, not here.
    pub weight: f64,

    /// Append index assigned by the relationship store (audit ordering)
    pub seq: u64,

    /// When this relationship was established (seconds since Unix epoch)
    pub created_at: u64,
}

impl Relationship {
    /// True if `key` is either endpoint of this edge
    pub fn touches(&self, key: &EntityKey) -> bool {
        &self.from == key || &self.to == key
    }

    /// The endpoint opposite `key`, or `None` if `key` is not an endpoint
    ///
    /// For a self-edge the other endpoint is the key itself.
    pub fn other_endpoint(&self, key: &EntityKey) -> Option<&EntityKey> {
        if &self.from == key {
            Some(&self.to)
        } else if &self.to == key {
            Some(&self.from)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str) -> Relationship {
        Relationship {
            from: EntityKey::new(from),
            to: EntityKey::new(to),
            kind: "linked".to_string(),
            weight: 1.0,
            seq: 0,
            created_at: 1000,
        }
    }

    #[test]
    fn test_touches_both_endpoints() {
        let e = edge("a", "b");
        assert!(e.touches(&EntityKey::new("a")));
        assert!(e.touches(&EntityKey::new("b")));
        assert!(!e.touches(&EntityKey::new("c")));
    }

    #[test]
    fn test_other_endpoint() {
        let e = edge("a", "b");
        assert_eq!(e.other_endpoint(&EntityKey::new("a")), Some(&EntityKey::new("b")));
        assert_eq!(e.other_endpoint(&EntityKey::new("b")), Some(&EntityKey::new("a")));
        assert_eq!(e.other_endpoint(&EntityKey::new("c")), None);
    }

    #[test]
    fn test_self_edge_other_endpoint() {
        let e = edge("a", "a");
        assert_eq!(e.other_endpoint(&EntityKey::new("a")), Some(&EntityKey::new("a")));
    }
}
