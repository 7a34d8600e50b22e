//! Common error infrastructure for item-core.
//!
//! The derivation, visibility and scoring functions never fail: missing data is
//! a zero contribution, not an error. Errors only arise when a catalog is
//! assembled from content, where bad rows must be rejected before any query
//! runs against them.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// A single content row is invalid; fixing the row fixes the catalog.
    ///
    /// Examples: duplicate key, neutral item without tier
    Validation,

    /// The catalog cannot be used at all.
    ///
    /// Examples: scaling factor is NaN
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all item-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on what must be fixed, not on impact
pub trait ItemError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while assembling an item catalog from content.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Two records share the same key.
    #[error("duplicate item key '{0}'")]
    DuplicateKey(String),

    /// A lookup referenced a key that is not in the catalog.
    #[error("item '{0}' not found")]
    UnknownItem(String),

    /// A record is flagged neutral but carries no tier metadata.
    #[error("neutral item '{0}' has no tier")]
    MissingNeutralTier(String),

    /// An override row references an item that does not exist.
    #[error("override targets unknown item '{0}'")]
    UnknownOverride(String),

    /// A scaling factor is negative or not finite.
    #[error("scaling factor '{field}' must be a finite non-negative number, got {value}")]
    InvalidScaling { field: &'static str, value: f64 },
}

impl ItemError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            DuplicateKey(_) | UnknownItem(_) | MissingNeutralTier(_) | UnknownOverride(_) => {
                ErrorSeverity::Validation
            }
            InvalidScaling { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateKey(_) => "CATALOG_DUPLICATE_KEY",
            UnknownItem(_) => "CATALOG_UNKNOWN_ITEM",
            MissingNeutralTier(_) => "CATALOG_MISSING_NEUTRAL_TIER",
            UnknownOverride(_) => "CATALOG_UNKNOWN_OVERRIDE",
            InvalidScaling { .. } => "CATALOG_INVALID_SCALING",
        }
    }
}
