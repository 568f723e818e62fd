//! # gudang-core: Pure Business Logic for Gudang
//!
//! This crate is the **heart** of Gudang. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Gudang Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         Callers                                 │   │
//! │  │        demo binary, embedding applications, tests               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              gudang-inventory (Service + Store)                 │   │
//! │  │     InventoryService orchestration, ProductStore trait,         │   │
//! │  │     InMemoryStore                                               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gudang-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ discounts │  │   rules   │  │   │
//! │  │   │  Category │  │  rupiah   │  │   bands   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Tiered discount engine and rate classifier
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation predicates
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupiah (i64) to avoid float errors
//! 4. **Failures Are Answers**: Rejected input is a bool/Option, not a panic; only
//!    the discount engine's contract violations raise a typed error
//!
//! ## Example Usage
//!
//! ```rust
//! use gudang_core::money::Money;
//! use gudang_core::pricing::compute_discount;
//!
//! // Create money from whole rupiah (never from floats!)
//! let unit_price = Money::from_rupiah(100_000);
//!
//! // 10 units for a REGULER customer: 10% quantity tier + 5% bonus
//! let discount = compute_discount(unit_price, 10, "REGULER").unwrap();
//! assert_eq!(discount, Money::from_rupiah(150_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gudang_core::Money` instead of
// `use gudang_core::money::Money`

pub use error::{PricingError, PricingResult};
pub use money::Money;
pub use pricing::{CustomerTier, DiscountBand, DiscountRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a product or category code.
pub const CODE_MIN_CHARS: usize = 3;

/// Maximum length of a product or category code.
///
/// ## Business Reason
/// Codes are hand-assigned and printed on shelf labels; 20 alphanumeric
/// characters is the longest label the shop uses.
pub const CODE_MAX_CHARS: usize = 20;

/// Minimum length of a product name.
pub const NAME_MIN_CHARS: usize = 3;

/// Maximum length of a product name.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum length of a category description.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Ceiling for the combined discount rate: 30%.
///
/// ## Business Reason
/// Quantity tier and customer bonus stack additively; whatever they sum to,
/// the shop never gives away more than 30% of a line. The cap is applied
/// silently inside the engine, so callers who need to detect clamping
/// compare `quantity_rate(qty).saturating_add(bonus)` against this constant.
pub const MAX_TOTAL_DISCOUNT: DiscountRate = DiscountRate::from_bps(3000);
