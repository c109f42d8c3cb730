//! Result and error types for Ubicar.

use thiserror::Error;

/// Result type for locator normalization
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Errors raised while normalizing a locator.
///
/// Every failure is synchronous and final: construction either yields a
/// well-formed [`Locator`](crate::Locator) or one of these. Nothing is
/// retried or recovered internally. Delegated lookups never produce this
/// type; the host's own error passes through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    /// Input shape is not interpretable as a locator
    #[error("cannot interpret {found} as a locator")]
    Unsupported {
        /// Description of the rejected shape
        found: String,
    },

    /// Strategy identifier or short name outside the recognized set
    #[error("{strategy:?} is not a recognized lookup strategy")]
    UnknownStrategy {
        /// The rejected strategy string
        strategy: String,
    },

    /// Named entry key outside the recognized set
    #[error("unrecognized locator parameter {key:?}")]
    UnknownParameter {
        /// The rejected key
        key: String,
    },

    /// Entry re-sets a strategy or query that an earlier entry already set
    #[error("locator parameter {key:?} conflicts with an earlier entry")]
    ConflictingParameter {
        /// The second, conflicting key
        key: String,
    },

    /// Named entries never set a strategy
    #[error("no lookup strategy was specified")]
    MissingStrategy,

    /// Named entries never set a query
    #[error("no query was specified")]
    MissingQuery,
}

/// Coarse classification of a [`LocatorError`].
///
/// `Usage` means the input's shape itself was unsupported; `Value` means the
/// shape was fine but a contained value was invalid. Callers treat both as
/// programming errors in locator specification, not transient conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong input shape
    Usage,
    /// Invalid value inside an acceptable shape
    Value,
}

impl LocatorError {
    /// Classify this error as a usage or value error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unsupported { .. } => ErrorKind::Usage,
            Self::UnknownStrategy { .. }
            | Self::UnknownParameter { .. }
            | Self::ConflictingParameter { .. }
            | Self::MissingStrategy
            | Self::MissingQuery => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kind_tests {
        use super::*;

        #[test]
        fn test_unsupported_is_usage() {
            let err = LocatorError::Unsupported {
                found: "a number".to_string(),
            };
            assert_eq!(err.kind(), ErrorKind::Usage);
        }

        #[test]
        fn test_value_errors_are_value() {
            let errors = [
                LocatorError::UnknownStrategy {
                    strategy: "foo".to_string(),
                },
                LocatorError::UnknownParameter {
                    key: "foo".to_string(),
                },
                LocatorError::ConflictingParameter {
                    key: "css".to_string(),
                },
                LocatorError::MissingStrategy,
                LocatorError::MissingQuery,
            ];
            for err in errors {
                assert_eq!(err.kind(), ErrorKind::Value);
            }
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_unknown_strategy_names_the_value() {
            let err = LocatorError::UnknownStrategy {
                strategy: "foo".to_string(),
            };
            assert!(err.to_string().contains("\"foo\""));
        }

        #[test]
        fn test_unknown_parameter_names_the_key() {
            let err = LocatorError::UnknownParameter {
                key: "frobnicate".to_string(),
            };
            assert!(err.to_string().contains("\"frobnicate\""));
        }
    }
}
