//! Configuration errors raised while building a classifier.
//!
//! Validation outcomes are never errors in this crate: an unresolvable or
//! invalid card number is a legitimate `None`/`false` result. Errors exist
//! only for misconfiguration caught at construction time.

use crate::IssuerType;
use std::fmt;

/// Errors that can occur while constructing a [`CardClassifier`].
///
/// [`CardClassifier`]: crate::CardClassifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// A spec's pattern failed to compile.
    InvalidPattern {
        /// The issuer whose spec carries the bad pattern.
        issuer: IssuerType,
        /// The pattern text that failed to compile.
        pattern: String,
        /// The regex engine's description of the failure.
        message: String,
    },

    /// An allowed issuer has no spec registered for it.
    ///
    /// Every entry in the allowed-types list must map to a spec, otherwise
    /// resolution could hit an unconfigured issuer mid-iteration.
    MissingSpec {
        /// The allowed issuer without a spec.
        issuer: IssuerType,
    },

    /// A spec's display grouping is inconsistent with its declared lengths.
    ///
    /// When both fields are non-empty, the grouping sum must be one of the
    /// permitted digit counts.
    GroupingMismatch {
        /// The issuer whose spec is inconsistent.
        issuer: IssuerType,
        /// The sum of the spec's grouping segments.
        grouping_sum: usize,
        /// The spec's permitted digit counts.
        char_lengths: Vec<usize>,
    },
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern {
                issuer,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "pattern for {} failed to compile: {} ({})",
                    issuer, message, pattern
                )
            }

            Self::MissingSpec { issuer } => {
                write!(f, "allowed issuer {} has no card spec registered", issuer)
            }

            Self::GroupingMismatch {
                issuer,
                grouping_sum,
                char_lengths,
            } => {
                let lengths: Vec<String> = char_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} grouping sums to {} digits but permitted lengths are {}",
                    issuer,
                    grouping_sum,
                    lengths.join(" or ")
                )
            }
        }
    }
}

impl std::error::Error for ClassifierError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClassifierError::MissingSpec {
            issuer: IssuerType::Elo,
        };
        assert_eq!(err.to_string(), "allowed issuer Elo has no card spec registered");

        let err = ClassifierError::GroupingMismatch {
            issuer: IssuerType::Amex,
            grouping_sum: 16,
            char_lengths: vec![15],
        };
        assert_eq!(
            err.to_string(),
            "American Express grouping sums to 16 digits but permitted lengths are 15"
        );

        let err = ClassifierError::InvalidPattern {
            issuer: IssuerType::Visa,
            pattern: "^4[".to_owned(),
            message: "unclosed character class".to_owned(),
        };
        assert!(err.to_string().contains("Visa"));
        assert!(err.to_string().contains("^4["));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClassifierError>();
    }
}
