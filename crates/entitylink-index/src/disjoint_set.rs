//! Disjoint-set index over entity keys
//!
//! Maintains the partition of all known entities into connected
//! components with path compression and union-by-rank, giving
//! `O(m * alpha(n))` total cost for any sequence of `m` operations over
//! `n` entities (`alpha` being the inverse Ackermann function).

use entitylink_domain::EntityKey;
use std::collections::HashMap;

/// Union-find structure keyed by entity
///
/// Holds only parent/rank metadata; signal data stays in the entity
/// table, linked by key identity.
///
/// Invariants maintained after every mutating operation:
/// 1. parent chains terminate at a root (`parent[root] == root`) with
///    no cycles;
/// 2. rank strictly increases from any non-root node to its parent;
/// 3. distinct roots correspond one-to-one with connected components of
///    the relationship graph.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<EntityKey, EntityKey>,
    rank: HashMap<EntityKey, u32>,
}

impl DisjointSet {
    /// Create an empty partition
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` as its own singleton root if unknown
    ///
    /// First-touch semantics: `find` and `union` on never-seen keys call
    /// this implicitly, so querying an unknown key silently registers it
    /// as a singleton rather than failing.
    pub fn insert(&mut self, key: &EntityKey) {
        if !self.parent.contains_key(key) {
            self.parent.insert(key.clone(), key.clone());
            self.rank.insert(key.clone(), 0);
        }
    }

    /// Find the root of `key`'s component, compressing the path
    ///
    /// Every node visited on the walk is re-pointed directly at the
    /// discovered root. Unknown keys are created as singleton roots.
    pub fn find(&mut self, key: &EntityKey) -> EntityKey {
        self.insert(key);

        // Walk to the root, remembering the path
        let mut path = Vec::new();
        let mut current = key.clone();
        loop {
            let parent = self.parent[&current].clone();
            if parent == current {
                break;
            }
            path.push(current);
            current = parent;
        }

        // Path compression: re-point every visited node at the root
        for node in path {
            self.parent.insert(node, current.clone());
        }
        current
    }

    /// Merge the components containing `a` and `b`
    ///
    /// Union-by-rank: the root with smaller rank is re-parented under
    /// the larger; on a tie `a`'s root wins and its rank increments by
    /// exactly 1. Returns `false` when the two keys were already in the
    /// same component (including self-union), `true` on an actual merge.
    pub fn union(&mut self, a: &EntityKey, b: &EntityKey) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            self.rank.insert(root_a, rank_a + 1);
        }
        true
    }

    /// True if `a` and `b` share a root
    pub fn connected(&mut self, a: &EntityKey, b: &EntityKey) -> bool {
        self.find(a) == self.find(b)
    }

    /// Compression-free root lookup; `None` for unknown keys
    ///
    /// Used by the integrity checker, which must observe the structure
    /// without mutating it. The walk is bounded by the node count so a
    /// corrupted (cyclic) parent chain cannot loop forever; a walk that
    /// exhausts the bound also returns `None`.
    pub fn find_readonly(&self, key: &EntityKey) -> Option<EntityKey> {
        let mut current = key;
        for _ in 0..=self.parent.len() {
            let parent = self.parent.get(current)?;
            if parent == current {
                return Some(current.clone());
            }
            current = parent;
        }
        None
    }

    /// The node's direct parent, if the node is known
    pub fn parent_of(&self, key: &EntityKey) -> Option<&EntityKey> {
        self.parent.get(key)
    }

    /// The node's rank, if the node is known
    pub fn rank_of(&self, key: &EntityKey) -> Option<u32> {
        self.rank.get(key).copied()
    }

    /// Iterate over all known keys
    pub fn keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.parent.keys()
    }

    /// Number of known keys
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True if no keys are known
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct roots (= number of components)
    pub fn root_count(&self) -> usize {
        self.parent.iter().filter(|(k, p)| k == p).count()
    }

    /// Discard all parent/rank state
    ///
    /// Only the rebuild path calls this; every entity must be
    /// re-registered and the relationship log replayed afterwards.
    pub fn reset(&mut self) {
        self.parent.clear();
        self.rank.clear();
    }

    /// Corrupt a parent pointer, for integrity-checker tests
    #[cfg(test)]
    pub(crate) fn corrupt_parent(&mut self, key: &EntityKey, parent: EntityKey) {
        self.parent.insert(key.clone(), parent);
    }
}
