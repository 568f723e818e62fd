//! # Product Store Boundary
//!
//! The storage interface the inventory service talks to.
//!
//! ## Store Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ProductStore Contract                            │
//! │                                                                         │
//! │  Writes                          Reads                                  │
//! │  ──────                          ─────                                  │
//! │  put(product)       -> bool      get(code)           -> Option<Product> │
//! │  delete(code)       -> bool      scan_by_name(q)     -> Vec<Product>    │
//! │  set_stock(code, n) -> bool      scan_by_category(q) -> Vec<Product>    │
//! │                                  scan_low_stock()    -> Vec<Product>    │
//! │                                  scan_out_of_stock() -> Vec<Product>    │
//! │                                  scan_all()          -> Vec<Product>    │
//! │                                                                         │
//! │  • Every single call is atomic with respect to other calls.             │
//! │  • false / None are answers (key absent, record refused), not faults.   │
//! │  • Substring scans are case-insensitive; blank query text yields an     │
//! │    empty list without scanning.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is an in-process library boundary: no file format or wire protocol
//! is implied. [`InMemoryStore`](crate::memory::InMemoryStore) is the
//! shipped implementation; tests substitute their own doubles.

use gudang_core::Product;

/// Key-value storage for products, keyed by business code.
///
/// Implementations must be usable behind `&self` from multiple threads,
/// hence the `Send + Sync` bound. Atomicity is per call: the service layers
/// its own per-code locking on top for check-then-act sequences.
pub trait ProductStore: Send + Sync {
    /// Inserts or replaces the record under `product.code`.
    ///
    /// ## Returns
    /// Whether the store accepted the record.
    fn put(&self, product: Product) -> bool;

    /// Looks up a record by exact code.
    fn get(&self, code: &str) -> Option<Product>;

    /// Removes the record under `code`.
    ///
    /// ## Returns
    /// * `true` - record existed and is gone
    /// * `false` - no such code (e.g. it vanished under a race)
    fn delete(&self, code: &str) -> bool;

    /// Overwrites the stock level of the record under `code`.
    ///
    /// ## Returns
    /// * `true` - record existed, stock now set
    /// * `false` - no such code
    fn set_stock(&self, code: &str, stock: i64) -> bool;

    /// Scans for products whose name contains `query`, case-insensitively.
    /// Blank or whitespace-only query text yields an empty list without
    /// scanning.
    fn scan_by_name(&self, query: &str) -> Vec<Product>;

    /// Scans for products whose category label contains `query`,
    /// case-insensitively. Blank query behaves like [`scan_by_name`].
    ///
    /// [`scan_by_name`]: ProductStore::scan_by_name
    fn scan_by_category(&self, query: &str) -> Vec<Product>;

    /// Scans for products whose stock is above zero but at or below their
    /// minimum threshold.
    fn scan_low_stock(&self) -> Vec<Product>;

    /// Scans for products with zero stock.
    fn scan_out_of_stock(&self) -> Vec<Product>;

    /// Returns every record in the store.
    fn scan_all(&self) -> Vec<Product>;
}
