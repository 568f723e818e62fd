//! # In-Memory Product Store
//!
//! The shipped [`ProductStore`] implementation: a `RwLock`-guarded map.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      InMemoryStore Locking                              │
//! │                                                                         │
//! │            ┌──────────────────────────────────────┐                     │
//! │            │   RwLock<HashMap<String, Product>>   │                     │
//! │            └──────────────────────────────────────┘                     │
//! │                 ▲                        ▲                              │
//! │     read lock   │                        │   write lock                 │
//! │     (shared)    │                        │   (exclusive)                │
//! │                 │                        │                              │
//! │   get, scan_by_name, scan_all, ...    put, delete, set_stock            │
//! │                                                                         │
//! │  Each trait method holds the lock for its whole duration, so every      │
//! │  single store call is atomic. Check-then-act sequences spanning         │
//! │  MULTIPLE calls are the service's problem, solved with per-code locks.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::store::ProductStore;
use gudang_core::Product;

/// In-memory product store keyed by business code.
///
/// ## Usage
/// ```rust
/// use gudang_core::{Money, Product};
/// use gudang_inventory::{InMemoryStore, ProductStore};
///
/// let store = InMemoryStore::new();
/// store.put(Product::new("PROD001", "Laptop Gaming", "Elektronik",
///                        Money::from_rupiah(15_000_000), 10, 5));
/// assert!(store.get("PROD001").is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, Product>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store pre-loaded with the given products, keyed by their
    /// codes. Later duplicates replace earlier ones, like repeated `put`s.
    pub fn with_products(products: Vec<Product>) -> Self {
        let records = products
            .into_iter()
            .map(|product| (product.code.clone(), product))
            .collect();
        InMemoryStore {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Product>> {
        self.records.read().expect("Product store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Product>> {
        self.records.write().expect("Product store lock poisoned")
    }

    /// Collects records passing `keep`, ordered by code so scan results and
    /// reports are stable.
    fn collect_sorted<F>(&self, keep: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let records = self.read();
        let mut products: Vec<Product> = records.values().filter(|p| keep(p)).cloned().collect();
        products.sort_by(|a, b| a.code.cmp(&b.code));
        products
    }
}

impl ProductStore for InMemoryStore {
    /// Upserts by code. The map can always take a record, so the verdict is
    /// always `true` here; the bool is the trait contract, and other
    /// backends are free to refuse.
    fn put(&self, product: Product) -> bool {
        debug!(code = %product.code, "Storing product");
        self.write().insert(product.code.clone(), product);
        true
    }

    fn get(&self, code: &str) -> Option<Product> {
        self.read().get(code).cloned()
    }

    fn delete(&self, code: &str) -> bool {
        let removed = self.write().remove(code).is_some();
        debug!(code = %code, removed = removed, "Deleting product");
        removed
    }

    fn set_stock(&self, code: &str, stock: i64) -> bool {
        let mut records = self.write();
        match records.get_mut(code) {
            Some(product) => {
                debug!(code = %code, stock = %stock, "Setting stock");
                product.stock = stock;
                true
            }
            None => false,
        }
    }

    fn scan_by_name(&self, query: &str) -> Vec<Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let products = self.collect_sorted(|p| p.name.to_lowercase().contains(&needle));
        debug!(query = %query, count = products.len(), "Name scan matched products");
        products
    }

    fn scan_by_category(&self, query: &str) -> Vec<Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let products = self.collect_sorted(|p| p.category.to_lowercase().contains(&needle));
        debug!(query = %query, count = products.len(), "Category scan matched products");
        products
    }

    fn scan_low_stock(&self) -> Vec<Product> {
        self.collect_sorted(Product::is_low_stock)
    }

    fn scan_out_of_stock(&self) -> Vec<Product> {
        self.collect_sorted(Product::is_out_of_stock)
    }

    fn scan_all(&self) -> Vec<Product> {
        self.collect_sorted(|_| true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_core::Money;

    fn product(code: &str, name: &str, category: &str, stock: i64, min_stock: i64) -> Product {
        Product::new(code, name, category, Money::from_rupiah(10_000), stock, min_stock)
    }

    #[test]
    fn test_put_upserts_by_code() {
        let store = InMemoryStore::new();

        assert!(store.put(product("PROD001", "Laptop Gaming", "Elektronik", 10, 5)));
        assert!(store.put(product("PROD001", "Laptop Kantor", "Elektronik", 3, 5)));

        let all = store.scan_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Laptop Kantor");
        assert_eq!(all[0].stock, 3);
    }

    #[test]
    fn test_get_absent_code() {
        let store = InMemoryStore::new();
        assert!(store.get("PROD999").is_none());
    }

    #[test]
    fn test_delete() {
        let store = InMemoryStore::new();
        store.put(product("PROD001", "Laptop Gaming", "Elektronik", 10, 5));

        assert!(store.delete("PROD001"));
        assert!(store.get("PROD001").is_none());
        assert!(!store.delete("PROD001")); // already gone
    }

    #[test]
    fn test_set_stock() {
        let store = InMemoryStore::new();
        store.put(product("PROD001", "Laptop Gaming", "Elektronik", 10, 5));

        assert!(store.set_stock("PROD001", 42));
        assert_eq!(store.get("PROD001").unwrap().stock, 42);

        assert!(!store.set_stock("PROD999", 1));
    }

    #[test]
    fn test_blank_queries_scan_nothing() {
        let store = InMemoryStore::new();
        store.put(product("PROD001", "Laptop Gaming", "Elektronik", 10, 5));

        assert!(store.scan_by_name("").is_empty());
        assert!(store.scan_by_name("   ").is_empty());
        assert!(store.scan_by_category("").is_empty());
        assert!(store.scan_by_category("\t").is_empty());
    }

    #[test]
    fn test_name_scan_is_case_insensitive_substring() {
        let store = InMemoryStore::with_products(vec![
            product("PROD001", "Laptop Gaming", "Elektronik", 10, 5),
            product("PROD002", "Mouse Wireless", "Elektronik", 30, 10),
            product("PROD003", "Beras Premium 5kg", "Sembako", 100, 20),
        ]);

        let hits = store.scan_by_name("laptop");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "PROD001");

        // substring in the middle, mixed case
        assert_eq!(store.scan_by_name("PREMIUM").len(), 1);
        assert!(store.scan_by_name("keyboard").is_empty());
    }

    #[test]
    fn test_category_scan_is_case_insensitive_substring() {
        let store = InMemoryStore::with_products(vec![
            product("PROD001", "Laptop Gaming", "Elektronik", 10, 5),
            product("PROD002", "Mouse Wireless", "Elektronik", 30, 10),
            product("PROD003", "Beras Premium 5kg", "Sembako", 100, 20),
        ]);

        let electronics = store.scan_by_category("elektro");
        assert_eq!(electronics.len(), 2);
        assert_eq!(electronics[0].code, "PROD001");
        assert_eq!(electronics[1].code, "PROD002");
    }

    #[test]
    fn test_low_and_out_of_stock_scans() {
        let store = InMemoryStore::with_products(vec![
            product("PROD001", "Laptop Gaming", "Elektronik", 10, 5), // healthy
            product("PROD002", "Mouse Wireless", "Elektronik", 3, 10), // low
            product("PROD003", "Beras Premium 5kg", "Sembako", 0, 20), // out
        ]);

        let low = store.scan_low_stock();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].code, "PROD002");

        let out = store.scan_out_of_stock();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "PROD003");
    }

    #[test]
    fn test_scan_all_is_ordered_by_code() {
        let store = InMemoryStore::with_products(vec![
            product("PROD003", "Beras Premium 5kg", "Sembako", 100, 20),
            product("PROD001", "Laptop Gaming", "Elektronik", 10, 5),
            product("PROD002", "Mouse Wireless", "Elektronik", 30, 10),
        ]);

        let codes: Vec<String> = store.scan_all().into_iter().map(|p| p.code).collect();
        assert_eq!(codes, vec!["PROD001", "PROD002", "PROD003"]);
    }
}
