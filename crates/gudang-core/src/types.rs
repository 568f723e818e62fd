//! # Domain Types
//!
//! Core domain types used throughout Gudang.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │      Product        │        │      Category       │                 │
//! │  │  ─────────────────  │        │  ─────────────────  │                 │
//! │  │  code (identity)    │        │  code (identity)    │                 │
//! │  │  name               │        │  name               │                 │
//! │  │  category (text)    │        │  description        │                 │
//! │  │  price (Money)      │        │  is_active          │                 │
//! │  │  stock              │        └─────────────────────┘                 │
//! │  │  min_stock          │                                                │
//! │  │  is_active          │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Business-Code Identity
//! There are no surrogate ids. A product IS its code: the store keys on it,
//! and `Category` equality/hashing is defined solely over `code`. Two
//! categories with the same code are the same category even if every other
//! field differs.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier, 3-20 ASCII alphanumeric characters.
    pub code: String,

    /// Display name, 3-100 characters.
    pub name: String,

    /// Category label. Free text; not checked against any category registry.
    pub category: String,

    /// Unit price in whole rupiah. Positive while the record is valid.
    pub price: Money,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Reorder threshold. Stock at or below this (but above zero) is "low".
    pub min_stock: i64,

    /// Whether the product participates in sales and totals (soft delete).
    pub is_active: bool,
}

impl Product {
    /// Creates an active product.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::money::Money;
    /// use gudang_core::types::Product;
    ///
    /// let laptop = Product::new(
    ///     "PROD001",
    ///     "Laptop Gaming",
    ///     "Elektronik",
    ///     Money::from_rupiah(15_000_000),
    ///     10,
    ///     5,
    /// );
    /// assert!(laptop.is_active);
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        stock: i64,
        min_stock: i64,
    ) -> Self {
        Product {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            min_stock,
            is_active: true,
        }
    }

    /// Checks if stock has fallen to the reorder threshold without running out.
    ///
    /// ## Rules
    /// - Zero stock is "out", not "low" — the two states are disjoint.
    /// - `stock == min_stock` counts as low (inclusive bound).
    #[inline]
    pub const fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= self.min_stock
    }

    /// Checks if the product is fully drained.
    #[inline]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Returns `price × stock`, the value this record contributes to the
    /// total inventory valuation.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.stock)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
///
/// Present for catalog organisation only: `Product.category` stays free text
/// and is not validated against these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Business identifier, 3-20 ASCII alphanumeric characters.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Optional longer description, at most 500 characters.
    pub description: Option<String>,

    /// Whether the category is in use (soft delete).
    pub is_active: bool,
}

impl Category {
    /// Creates an active category with no description.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            code: code.into(),
            name: name.into(),
            description: None,
            is_active: true,
        }
    }
}

/// Category identity is the code alone.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Category {}

/// Hash must agree with `PartialEq`: code only.
impl std::hash::Hash for Category {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(category: &Category) -> u64 {
        let mut hasher = DefaultHasher::new();
        category.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_product_is_active() {
        let product = Product::new(
            "PROD001",
            "Laptop Gaming",
            "Elektronik",
            Money::from_rupiah(15_000_000),
            10,
            5,
        );
        assert!(product.is_active);
        assert_eq!(product.stock, 10);
        assert_eq!(product.min_stock, 5);
    }

    #[test]
    fn test_low_stock_boundaries() {
        let mut product = Product::new(
            "PROD002",
            "Mouse Wireless",
            "Elektronik",
            Money::from_rupiah(250_000),
            10,
            5,
        );

        product.stock = 6;
        assert!(!product.is_low_stock());

        product.stock = 5; // exactly at the threshold
        assert!(product.is_low_stock());

        product.stock = 1;
        assert!(product.is_low_stock());

        product.stock = 0; // out, not low
        assert!(!product.is_low_stock());
        assert!(product.is_out_of_stock());
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new(
            "PROD003",
            "Keyboard Mechanical",
            "Elektronik",
            Money::from_rupiah(500_000),
            4,
            2,
        );
        assert_eq!(product.stock_value(), Money::from_rupiah(2_000_000));
    }

    #[test]
    fn test_category_equality_is_code_only() {
        let a = Category::new("KAT001", "Elektronik");
        let mut b = Category::new("KAT001", "Elektronik Rumah Tangga");
        b.description = Some("Perangkat elektronik".to_string());
        b.is_active = false;

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_category_inequality_by_code() {
        let a = Category::new("KAT001", "Elektronik");
        let b = Category::new("KAT002", "Elektronik");
        assert_ne!(a, b);
    }
}
