//! Signal module - confidence-weighted labels attached to entities

/// Default confidence assigned to a label when the caller does not
/// provide one explicitly.
pub const DEFAULT_CONFIDENCE: f64 = 0.9;

/// A labeled, confidence-weighted tag attached to an entity
///
/// Confidence expresses how strongly the label applies, in [0.0, 1.0].
/// An entity's signal list never holds two signals with the same label;
/// the index layer enforces last-write-wins on conflicts.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// Free-form label text
    pub label: String,

    /// Confidence [0.0, 1.0]
    pub confidence: f64,
}

impl Signal {
    /// Create a new signal
    ///
    /// # Panics
    /// Panics if confidence is NaN or outside [0.0, 1.0]
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&confidence),
            "Confidence must be in [0, 1]"
        );

        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Create a signal with [`DEFAULT_CONFIDENCE`]
    pub fn with_default_confidence(label: impl Into<String>) -> Self {
        Self::new(label, DEFAULT_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_creation() {
        let signal = Signal::new("duplicate-suspect", 0.7);
        assert_eq!(signal.label, "duplicate-suspect");
        assert_eq!(signal.confidence, 0.7);
    }

    #[test]
    fn test_default_confidence() {
        let signal = Signal::with_default_confidence("verified");
        assert_eq!(signal.confidence, DEFAULT_CONFIDENCE);
    }

    #[test]
    #[should_panic]
    fn test_confidence_above_one_rejected() {
        Signal::new("x", 1.1);
    }

    #[test]
    #[should_panic]
    fn test_negative_confidence_rejected() {
        Signal::new("x", -0.1);
    }

    #[test]
    #[should_panic]
    fn test_nan_confidence_rejected() {
        Signal::new("x", f64::NAN);
    }
}
