//! Common error infrastructure for ranked-core.
//!
//! Every computation in this crate is total over its valid input domain: XP
//! is clamped and missing triggers fall back to defaults. The errors defined
//! here cover the remaining failure surface, which is configuration:
//!
//! - [`RankError`]: a rank id outside the closed set of ranks
//! - [`ConfigError`]: a progression config that cannot describe a ladder
//! - [`CatalogError`]: user-supplied trigger data that cannot form a catalog
//!
//! Trigger-id lookup misses are deliberately *not* errors. Callers routinely
//! pass ids that are not in the catalog and the award engine degrades silently.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: A configuration or programming bug that requires investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: zero XP per grade, duplicate trigger ids
    Validation,

    /// Unexpected inconsistency between closed sets.
    ///
    /// Examples: a persisted rank id that no longer exists
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all ranked-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait RankedError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization in logs and for matching in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised when resolving rank identifiers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The id does not name any configured rank.
    #[error("unknown rank: {0}")]
    UnknownRank(String),
}

impl RankedError for RankError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownRank(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRank(_) => "RANK_UNKNOWN",
        }
    }
}

/// Errors raised when validating a [`crate::ProgressionConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("xp_per_grade must be greater than zero")]
    ZeroXpPerGrade,

    #[error("grades_per_rank must be greater than zero")]
    ZeroGradesPerRank,

    #[error("grades_per_rank must be at most {max}, got {actual}")]
    GradesPerRankOutOfRange { actual: u8, max: u8 },

    #[error("rank_count must be between 1 and {max}, got {actual}")]
    RankCountOutOfRange { actual: u8, max: u8 },
}

impl RankedError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroXpPerGrade => "CONFIG_ZERO_XP_PER_GRADE",
            Self::ZeroGradesPerRank => "CONFIG_ZERO_GRADES_PER_RANK",
            Self::GradesPerRankOutOfRange { .. } => "CONFIG_GRADES_PER_RANK",
            Self::RankCountOutOfRange { .. } => "CONFIG_RANK_COUNT",
        }
    }
}

/// Errors raised when building a [`crate::TriggerCatalog`] from external data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("trigger id must not be empty")]
    EmptyId,

    #[error("duplicate trigger id: {0}")]
    DuplicateId(String),

    #[error("trigger {id} has invalid multiplier {factor}")]
    InvalidMultiplier { id: String, factor: f64 },
}

impl RankedError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyId => "CATALOG_EMPTY_ID",
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            Self::InvalidMultiplier { .. } => "CATALOG_INVALID_MULTIPLIER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rank_is_internal() {
        let err = RankError::UnknownRank("mythic".into());
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "RANK_UNKNOWN");
        assert_eq!(err.to_string(), "unknown rank: mythic");
    }

    #[test]
    fn config_errors_are_validation() {
        let err = ConfigError::RankCountOutOfRange { actual: 9, max: 5 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
        assert_eq!(err.to_string(), "rank_count must be between 1 and 5, got 9");
    }
}
