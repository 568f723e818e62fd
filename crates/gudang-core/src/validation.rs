//! # Validation Module
//!
//! Field-level validation predicates for Gudang.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation as a Gate                               │
//! │                                                                         │
//! │  Caller                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Inventory Service                                                      │
//! │    ├── THIS MODULE: field predicates (code, name, price, stock)         │
//! │    │       │                                                            │
//! │    │       ├── invalid? → operation reports failure,                    │
//! │    │       │              store is NEVER touched                        │
//! │    │       │                                                            │
//! │    │       └── valid? → proceed to store read/write                     │
//! │    ▼                                                                    │
//! │  Product Store                                                          │
//! │                                                                         │
//! │  A rejected field is an expected business condition, not a fault,       │
//! │  so every predicate answers with a plain bool.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gudang_core::validation::{is_valid_code, is_valid_stock};
//!
//! assert!(is_valid_code("PROD001"));
//! assert!(!is_valid_code("P1"));        // too short
//! assert!(is_valid_stock(0));
//! assert!(!is_valid_stock(-1));
//! ```

use crate::types::{Category, Product};
use crate::Money;
use crate::{
    CODE_MAX_CHARS, CODE_MIN_CHARS, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS,
};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product or category code.
///
/// ## Rules
/// - 3 to 20 characters
/// - ASCII letters and digits only (no spaces, no punctuation)
///
/// ## Example
/// ```rust
/// use gudang_core::validation::is_valid_code;
///
/// assert!(is_valid_code("PROD001"));
/// assert!(!is_valid_code("AB"));
/// assert!(!is_valid_code("PROD-001"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    code.len() >= CODE_MIN_CHARS
        && code.len() <= CODE_MAX_CHARS
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates a product name.
///
/// ## Rules
/// - 3 to 100 characters after trimming surrounding whitespace
pub fn is_valid_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len)
}

/// Validates a category description.
///
/// ## Rules
/// - At most 500 characters (absence is handled by the caller; an absent
///   description is always acceptable)
pub fn is_valid_description(description: &str) -> bool {
    description.chars().count() <= DESCRIPTION_MAX_CHARS
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Strictly positive; zero-price records are not accepted
pub fn is_valid_price(price: Money) -> bool {
    price.is_positive()
}

/// Validates a stock quantity or minimum-stock threshold.
///
/// ## Rules
/// - Non-negative; zero is a legal stock level (the "out of stock" state)
#[inline]
pub const fn is_valid_stock(stock: i64) -> bool {
    stock >= 0
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Between 0 and 10000 (0% to 100%)
#[inline]
pub const fn is_valid_rate_bps(bps: u32) -> bool {
    bps <= 10_000
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a full product record: code format, name length, positive
/// price, non-negative stock and threshold. The category label is free text
/// and deliberately unchecked.
///
/// ## Example
/// ```rust
/// use gudang_core::money::Money;
/// use gudang_core::types::Product;
/// use gudang_core::validation::is_valid_product;
///
/// let ok = Product::new("PROD001", "Laptop Gaming", "Elektronik",
///                       Money::from_rupiah(15_000_000), 10, 5);
/// assert!(is_valid_product(&ok));
///
/// let bad = Product::new("PROD002", "Mouse", "Elektronik",
///                        Money::zero(), 10, 5);
/// assert!(!is_valid_product(&bad)); // price must be positive
/// ```
pub fn is_valid_product(product: &Product) -> bool {
    is_valid_code(&product.code)
        && is_valid_name(&product.name)
        && is_valid_price(product.price)
        && is_valid_stock(product.stock)
        && is_valid_stock(product.min_stock)
}

/// Validates a category record: code format, non-empty name, and the
/// description bound when a description is present.
pub fn is_valid_category(category: &Category) -> bool {
    is_valid_code(&category.code)
        && !category.name.trim().is_empty()
        && category
            .description
            .as_deref()
            .map_or(true, is_valid_description)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_code() {
        // Valid codes
        assert!(is_valid_code("PROD001"));
        assert!(is_valid_code("ABC"));
        assert!(is_valid_code("A1B2C3D4E5F6G7H8I9J0")); // exactly 20

        // Invalid codes
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("AB"));
        assert!(!is_valid_code("A1B2C3D4E5F6G7H8I9J0X")); // 21 chars
        assert!(!is_valid_code("PROD-001"));
        assert!(!is_valid_code("PROD 01"));
        assert!(!is_valid_code("   "));
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Laptop Gaming"));
        assert!(is_valid_name("Teh"));
        assert!(is_valid_name(&"A".repeat(100)));

        assert!(!is_valid_name(""));
        assert!(!is_valid_name("AB"));
        assert!(!is_valid_name("  AB  ")); // trims to 2
        assert!(!is_valid_name(&"A".repeat(101)));
    }

    #[test]
    fn test_is_valid_description() {
        assert!(is_valid_description(""));
        assert!(is_valid_description("Perangkat elektronik rumah tangga"));
        assert!(is_valid_description(&"D".repeat(500)));
        assert!(!is_valid_description(&"D".repeat(501)));
    }

    #[test]
    fn test_is_valid_price() {
        assert!(is_valid_price(Money::from_rupiah(1)));
        assert!(is_valid_price(Money::from_rupiah(15_000_000)));
        assert!(!is_valid_price(Money::zero()));
        assert!(!is_valid_price(Money::from_rupiah(-100)));
    }

    #[test]
    fn test_is_valid_stock() {
        assert!(is_valid_stock(0));
        assert!(is_valid_stock(1_000));
        assert!(!is_valid_stock(-1));
    }

    #[test]
    fn test_is_valid_rate_bps() {
        assert!(is_valid_rate_bps(0));
        assert!(is_valid_rate_bps(3_000));
        assert!(is_valid_rate_bps(10_000));
        assert!(!is_valid_rate_bps(10_001));
    }

    #[test]
    fn test_is_valid_product_each_field() {
        let valid = Product::new(
            "PROD001",
            "Laptop Gaming",
            "Elektronik",
            Money::from_rupiah(15_000_000),
            10,
            5,
        );
        assert!(is_valid_product(&valid));

        let mut bad_code = valid.clone();
        bad_code.code = "P!".to_string();
        assert!(!is_valid_product(&bad_code));

        let mut bad_name = valid.clone();
        bad_name.name = "AB".to_string();
        assert!(!is_valid_product(&bad_name));

        let mut bad_price = valid.clone();
        bad_price.price = Money::zero();
        assert!(!is_valid_product(&bad_price));

        let mut bad_stock = valid.clone();
        bad_stock.stock = -1;
        assert!(!is_valid_product(&bad_stock));

        let mut bad_min = valid;
        bad_min.min_stock = -1;
        assert!(!is_valid_product(&bad_min));
    }

    #[test]
    fn test_is_valid_category() {
        let plain = Category::new("KAT001", "Elektronik");
        assert!(is_valid_category(&plain));

        let mut described = plain.clone();
        described.description = Some("D".repeat(500));
        assert!(is_valid_category(&described));

        let mut long_description = plain.clone();
        long_description.description = Some("D".repeat(501));
        assert!(!is_valid_category(&long_description));

        let mut blank_name = plain.clone();
        blank_name.name = "   ".to_string();
        assert!(!is_valid_category(&blank_name));

        let mut bad_code = plain;
        bad_code.code = "K".to_string();
        assert!(!is_valid_category(&bad_code));
    }
}
