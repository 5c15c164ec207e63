//! Entity key module - the addressing unit of the index

use std::fmt;

/// Opaque identifier for an entity
///
/// Keys are caller-provided strings. The index does not validate
/// uniqueness or structure beyond exact string equality; key generation
/// (stable, collision-free) is the responsibility of the embedding
/// application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey(String);

impl EntityKey {
    /// Create an EntityKey from anything string-like
    ///
    /// # Examples
    ///
    /// ```
    /// use entitylink_domain::EntityKey;
    ///
    /// let key = EntityKey::new("user:42");
    /// assert_eq!(key.as_str(), "user:42");
    /// ```
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, yielding the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for EntityKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality_is_exact_string_equality() {
        assert_eq!(EntityKey::new("a"), EntityKey::from("a"));
        assert_ne!(EntityKey::new("a"), EntityKey::new("A"));
    }

    #[test]
    fn test_key_display_round_trip() {
        let key = EntityKey::new("record/7f3a");
        assert_eq!(key.to_string(), "record/7f3a");
        assert_eq!(EntityKey::from(key.to_string()), key);
    }

    #[test]
    fn test_key_ordering_is_string_ordering() {
        let a = EntityKey::new("alpha");
        let b = EntityKey::new("beta");
        assert!(a < b);
    }
}
