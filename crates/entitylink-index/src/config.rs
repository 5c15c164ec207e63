//! Configuration for the cluster index

use entitylink_domain::DEFAULT_CONFIDENCE;
use serde::{Deserialize, Serialize};

/// Configuration for a [`ClusterIndex`](crate::ClusterIndex)
///
/// # Examples
///
/// ```
/// use entitylink_index::IndexConfig;
///
/// let config = IndexConfig::default();
/// assert_eq!(config.default_confidence, 0.9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Confidence assigned to labels set without an explicit confidence
    /// Default: 0.9
    pub default_confidence: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_confidence: DEFAULT_CONFIDENCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndexConfig::default();
        assert_eq!(config.default_confidence, 0.9);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = IndexConfig {
            default_confidence: 0.75,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: IndexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_confidence, 0.75);
    }
}
