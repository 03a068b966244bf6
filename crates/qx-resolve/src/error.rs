//! Error types for resolution
//!
//! Resolution is total, so the only error is the recoverable "no such
//! defect" outcome. It is returned as a value, never raised.

/// Resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No defect-row cell contains the requested name
    #[error("defect \"{defect}\" not found in the matrix")]
    DefectNotFound {
        /// Name as the caller supplied it
        defect: String,
    },
}

impl ResolveError {
    /// Create not-found error for a defect name
    #[inline]
    pub fn defect_not_found(defect: impl Into<String>) -> Self {
        Self::DefectNotFound {
            defect: defect.into(),
        }
    }

    /// Check if this is a not-found outcome
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DefectNotFound { .. })
    }
}

/// Result type alias for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;
