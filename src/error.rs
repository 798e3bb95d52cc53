//! Error types for layout passes.

use thiserror::Error;

/// Errors a layout pass can raise.
///
/// Neither kind is retryable. Both mean the caller handed the layout
/// something it cannot work with.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A structurally invalid argument, e.g. zero rows or `min > max`.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// A child lacks a measurement facet the layout needs (e.g. a baseline).
    #[error("unsupported layout: {0}")]
    UnsupportedLayout(String),

    /// The taffy engine rejected a node operation.
    #[error("taffy: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

impl LayoutError {
    /// Whether this error signals a caller contract violation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }

    /// Whether this error signals a missing measurement facet.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedLayout(_))
    }
}

/// Result alias used throughout the layout code.
pub type Result<T> = std::result::Result<T, LayoutError>;
