//! Error types for vintrin.
//!
//! The vector operations themselves never fail: they either return a fully
//! defined result or stop on a violated precondition. The errors below cover the
//! edges of the crate: parsing tier names, cross-tier verification and batch
//! validation.

use std::fmt;

use crate::simd::Tier;

/// Errors that can occur around vintrin operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrinError {
    /// A tier name could not be parsed.
    UnknownTier {
        /// The name that was given.
        name: String,
    },
    /// The requested tier was not compiled into this build.
    TierUnavailable {
        /// The tier that was requested.
        tier: Tier,
    },
    /// A tier disagreed with the scalar reference.
    Mismatch {
        /// Name of the operation, e.g. `hadd_epi16`.
        op: &'static str,
        /// Tier under test.
        tier: Tier,
        /// First lane that differs.
        lane: usize,
        /// Lane value produced by the scalar tier.
        expected: i64,
        /// Lane value produced by the tier under test.
        actual: i64,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for IntrinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrinError::UnknownTier { name } => write!(
                f,
                "Unknown tier: `{}` (expected one of avx2, sse, scalar)",
                name
            ),
            IntrinError::TierUnavailable { tier } => {
                write!(f, "Tier unavailable: {} was not compiled into this build", tier)
            }
            IntrinError::Mismatch {
                op,
                tier,
                lane,
                expected,
                actual,
            } => write!(
                f,
                "Tier mismatch: {} on {} differs at lane {} (scalar: {:#x}, {}: {:#x})",
                op, tier, lane, expected, tier, actual
            ),
            IntrinError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for IntrinError {}

/// Result type alias for vintrin operations.
pub type Result<T> = std::result::Result<T, IntrinError>;

/// Creates an unknown-tier error.
pub fn unknown_tier(name: impl Into<String>) -> IntrinError {
    IntrinError::UnknownTier { name: name.into() }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> IntrinError {
    IntrinError::ValidationError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tier_display() {
        let error = unknown_tier("avx512");
        let display = format!("{}", error);
        assert!(display.contains("Unknown tier"));
        assert!(display.contains("avx512"));
    }

    #[test]
    fn test_tier_unavailable_display() {
        let error = IntrinError::TierUnavailable { tier: Tier::Avx2 };
        let display = format!("{}", error);
        assert!(display.contains("Tier unavailable"));
        assert!(display.contains("avx2"));
    }

    #[test]
    fn test_mismatch_display() {
        let error = IntrinError::Mismatch {
            op: "abs_epi16",
            tier: Tier::Sse,
            lane: 3,
            expected: 0x7fff,
            actual: -1,
        };
        let display = format!("{}", error);
        assert!(display.contains("abs_epi16"));
        assert!(display.contains("lane 3"));
        assert!(display.contains("0x7fff"));
        assert!(display.contains("sse"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = validation_error("input slices must have same length");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("input slices must have same length"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = unknown_tier("neon");
        let error2 = unknown_tier("neon");
        let error3 = unknown_tier("avx512");

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = validation_error("test error");

        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
