//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Opt-in input validation failures               │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  └── ConfigError      - Bad STOREFRONT_* environment values            │
//! │                                                                         │
//! │  NOTE: pricing and VAT functions never return errors. Only the         │
//! │  cart and the validators do.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and checkout rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart line cannot be found.
    #[error("Item not in cart: {0}")]
    ItemNotFound(String),

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds maximum allowed.
    ///
    /// ## When This Occurs
    /// - Adding to a line that already holds close to the maximum
    /// - Setting a quantity directly above the maximum
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The pricing engine accepts any input. These are raised only by the
/// validators in [`crate::validation`] when a caller opts into stricter checks.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Monetary value is below zero.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A tier's bounds are inverted (`max_quantity < min_quantity`).
    #[error("tier {index} has max_quantity {max} below min_quantity {min}")]
    InvertedTier { index: usize, min: u32, max: u32 },

    /// Two tiers are out of order or overlap.
    #[error("tier {index} overlaps or precedes tier {previous}")]
    OverlappingTiers { previous: usize, index: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
