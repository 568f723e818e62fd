//! # Error Types
//!
//! Domain-specific error types for gudang-core.
//!
//! ## Error Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of Failure                               │
//! │                                                                         │
//! │  Business condition (expected)                                          │
//! │  ├── invalid field, duplicate code, insufficient stock, ...             │
//! │  └── signaled as `false` / `None` / empty Vec — never an error type     │
//! │                                                                         │
//! │  Contract violation (caller bug)                                        │
//! │  ├── non-positive price or quantity fed to the pricing engine           │
//! │  └── signaled as PricingError (this module)                             │
//! │                                                                         │
//! │  Business conditions are part of normal control flow. Contract          │
//! │  violations are not: the caller passed values the API forbids.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The fault message is fixed — callers may match on it
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised by the discount pricing engine.
///
/// These represent caller contract violations, not business conditions.
/// A quantity of zero is never a legitimate pricing request, so it faults
/// instead of quietly returning zero discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Unit price or quantity was zero or negative.
    ///
    /// ## When This Occurs
    /// - `compute_discount` / `price_after_discount` with `unit_price <= 0`
    /// - `compute_discount` / `price_after_discount` with `quantity <= 0`
    ///
    /// The message is fixed regardless of which argument was bad.
    #[error("price and quantity must be positive")]
    InvalidArgument,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
