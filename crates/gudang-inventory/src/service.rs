//! # Inventory Service
//!
//! Business operations over the product store: validated creation and
//! removal, stock movements, queries, and aggregate reporting.
//!
//! ## Operation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Operation Pipeline                        │
//! │                                                                         │
//! │  caller ──► validate fields ──► lock code ──► check record ──► act      │
//! │                  │                                 │                    │
//! │                  │ invalid                         │ absent/duplicate/  │
//! │                  ▼                                 ▼ inactive/short     │
//! │              false/None                        false/None               │
//! │           (store untouched)                 (store unchanged)           │
//! │                                                                         │
//! │  • Validation failures never reach the store: zero store calls.         │
//! │  • Mutations hold the code's lock across the whole check-then-act       │
//! │    sequence, so a duplicate check or a sufficiency check cannot         │
//! │    interleave with another writer on the same code.                     │
//! │  • Distinct codes proceed independently.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::ProductStore;
use gudang_core::validation::{is_valid_code, is_valid_product};
use gudang_core::{Money, Product};

// =============================================================================
// Per-Code Lock Registry
// =============================================================================

/// One mutex per product code, handed out on demand.
///
/// ## Why Not Lock the Whole Store?
/// The store already makes each single call atomic. What needs guarding is
/// the gap BETWEEN calls of a check-then-act sequence, and only against
/// other writers of the same code. A registry of per-code mutexes keeps
/// disjoint codes fully parallel.
///
/// Entries live for the service's lifetime; the registry is bounded by the
/// set of codes ever mutated, which tracks catalog size.
#[derive(Debug, Default)]
struct KeyLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    /// Returns the lock for `code`, creating it on first use.
    fn for_code(&self, code: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().expect("Lock registry poisoned");
        locks.entry(code.to_string()).or_default().clone()
    }
}

// =============================================================================
// Inventory Totals
// =============================================================================

/// Aggregate inventory summary.
///
/// Value and stock cover **active** records only; the low/out counts mirror
/// the store scans, which look at stock levels alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTotals {
    /// Σ `price × stock` over active records.
    pub total_value: Money,
    /// Σ stock over active records.
    pub total_stock: i64,
    /// Number of records at or below their minimum threshold (stock > 0).
    pub low_stock_count: usize,
    /// Number of records with zero stock.
    pub out_of_stock_count: usize,
}

// =============================================================================
// Inventory Service
// =============================================================================

/// Orchestrates validation and the product store.
///
/// ## Failure Philosophy
/// Every operation answers with `bool` / `Option` / a list. A `false` or
/// `None` is an expected business condition (bad input, duplicate code,
/// missing record, insufficient stock) and the store is left exactly as it
/// was. Nothing here panics or raises.
///
/// ## Usage
/// ```rust
/// use gudang_core::{Money, Product};
/// use gudang_inventory::{InMemoryStore, InventoryService};
///
/// let service = InventoryService::new(InMemoryStore::new());
/// let added = service.add_product(Product::new(
///     "PROD001",
///     "Laptop Gaming",
///     "Elektronik",
///     Money::from_rupiah(15_000_000),
///     10,
///     5,
/// ));
/// assert!(added);
/// assert!(service.stock_out("PROD001", 4));
/// assert_eq!(service.find_by_code("PROD001").unwrap().stock, 6);
/// ```
#[derive(Debug)]
pub struct InventoryService<S> {
    store: S,
    locks: KeyLocks,
}

impl<S: ProductStore> InventoryService<S> {
    /// Creates a service owning the given store.
    pub fn new(store: S) -> Self {
        InventoryService {
            store,
            locks: KeyLocks::default(),
        }
    }

    /// Borrows the underlying store (read-only access for reports/tests).
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Catalog Mutations
    // =========================================================================

    /// Adds a new product.
    ///
    /// ## Rules
    /// - The full record must validate (code format, name length, positive
    ///   price, non-negative stock and threshold); a rejected record issues
    ///   no store call at all.
    /// - The code must not already exist; the duplicate check and the
    ///   insert happen under the code's lock.
    ///
    /// ## Returns
    /// The store's verdict, verbatim.
    pub fn add_product(&self, product: Product) -> bool {
        if !is_valid_product(&product) {
            debug!(code = %product.code, "Rejected product: validation failed");
            return false;
        }

        let lock = self.locks.for_code(&product.code);
        let _guard = lock.lock().expect("Code lock poisoned");

        if self.store.get(&product.code).is_some() {
            debug!(code = %product.code, "Rejected product: duplicate code");
            return false;
        }

        debug!(code = %product.code, "Adding product");
        let code = product.code.clone();
        let accepted = self.store.put(product);
        if !accepted {
            warn!(code = %code, "Store refused product insert");
        }
        accepted
    }

    /// Removes a product.
    ///
    /// ## Rules
    /// - Code must be well-formed (else no store call).
    /// - Record must exist and have zero stock; remaining stock blocks
    ///   removal so inventory value cannot silently disappear.
    pub fn remove_product(&self, code: &str) -> bool {
        if !is_valid_code(code) {
            debug!(code = %code, "Rejected removal: malformed code");
            return false;
        }

        let lock = self.locks.for_code(code);
        let _guard = lock.lock().expect("Code lock poisoned");

        let product = match self.store.get(code) {
            Some(product) => product,
            None => {
                debug!(code = %code, "Rejected removal: no such product");
                return false;
            }
        };

        if product.stock > 0 {
            debug!(code = %code, stock = %product.stock, "Rejected removal: stock remains");
            return false;
        }

        debug!(code = %code, "Removing product");
        self.store.delete(code)
    }

    // =========================================================================
    // Stock Movements
    // =========================================================================

    /// Sets a product's stock to an absolute level.
    ///
    /// ## Rules
    /// - Code must be well-formed and `new_quantity >= 0` (else no store
    ///   call).
    /// - Record must exist. The active flag is NOT consulted: absolute
    ///   corrections (e.g. after a physical recount) apply to dormant
    ///   records too.
    pub fn update_stock(&self, code: &str, new_quantity: i64) -> bool {
        if !is_valid_code(code) || new_quantity < 0 {
            debug!(code = %code, quantity = %new_quantity, "Rejected stock update: invalid input");
            return false;
        }

        let lock = self.locks.for_code(code);
        let _guard = lock.lock().expect("Code lock poisoned");

        if self.store.get(code).is_none() {
            debug!(code = %code, "Rejected stock update: no such product");
            return false;
        }

        debug!(code = %code, stock = %new_quantity, "Setting stock level");
        self.store.set_stock(code, new_quantity)
    }

    /// Removes `quantity` units from stock (a sale or shipment).
    ///
    /// ## Rules
    /// - Code must be well-formed and `quantity > 0` (else no store call).
    /// - Record must exist and be active.
    /// - Requires `stock >= quantity`; insufficiency refuses and mutates
    ///   nothing. The check and the write share the code's lock, so two
    ///   concurrent sales cannot both pass the check and oversell.
    pub fn stock_out(&self, code: &str, quantity: i64) -> bool {
        if !is_valid_code(code) || quantity <= 0 {
            debug!(code = %code, quantity = %quantity, "Rejected stock-out: invalid input");
            return false;
        }

        let lock = self.locks.for_code(code);
        let _guard = lock.lock().expect("Code lock poisoned");

        let product = match self.store.get(code) {
            Some(product) => product,
            None => {
                debug!(code = %code, "Rejected stock-out: no such product");
                return false;
            }
        };

        if !product.is_active {
            debug!(code = %code, "Rejected stock-out: product inactive");
            return false;
        }

        if product.stock < quantity {
            debug!(
                code = %code,
                stock = %product.stock,
                requested = %quantity,
                "Rejected stock-out: insufficient stock"
            );
            return false;
        }

        debug!(code = %code, quantity = %quantity, "Stock out");
        self.store.set_stock(code, product.stock - quantity)
    }

    /// Adds `quantity` units to stock (a delivery).
    ///
    /// ## Rules
    /// Same gates as [`stock_out`](Self::stock_out) minus the sufficiency
    /// check: well-formed code, positive quantity, existing active record.
    pub fn stock_in(&self, code: &str, quantity: i64) -> bool {
        if !is_valid_code(code) || quantity <= 0 {
            debug!(code = %code, quantity = %quantity, "Rejected stock-in: invalid input");
            return false;
        }

        let lock = self.locks.for_code(code);
        let _guard = lock.lock().expect("Code lock poisoned");

        let product = match self.store.get(code) {
            Some(product) => product,
            None => {
                debug!(code = %code, "Rejected stock-in: no such product");
                return false;
            }
        };

        if !product.is_active {
            debug!(code = %code, "Rejected stock-in: product inactive");
            return false;
        }

        debug!(code = %code, quantity = %quantity, "Stock in");
        self.store.set_stock(code, product.stock + quantity)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Looks up a product by exact code.
    ///
    /// A malformed code answers `None` without touching the store.
    pub fn find_by_code(&self, code: &str) -> Option<Product> {
        if !is_valid_code(code) {
            return None;
        }
        self.store.get(code)
    }

    /// Finds products whose name contains `name`, case-insensitively.
    /// Blank input yields an empty list (enforced by the store).
    pub fn find_by_name(&self, name: &str) -> Vec<Product> {
        self.store.scan_by_name(name)
    }

    /// Finds products whose category label contains `category`,
    /// case-insensitively. Blank input yields an empty list.
    pub fn find_by_category(&self, category: &str) -> Vec<Product> {
        self.store.scan_by_category(category)
    }

    /// Products whose stock has fallen to the reorder threshold.
    pub fn low_stock_products(&self) -> Vec<Product> {
        self.store.scan_low_stock()
    }

    /// Products that are fully drained.
    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.store.scan_out_of_stock()
    }

    // =========================================================================
    // Aggregate Reporting
    // =========================================================================

    /// Total value of stock on hand: Σ `price × stock` over active records.
    /// Zero for an empty or all-inactive store.
    pub fn total_inventory_value(&self) -> Money {
        self.store
            .scan_all()
            .iter()
            .filter(|p| p.is_active)
            .map(Product::stock_value)
            .sum()
    }

    /// Total units on hand over active records. Zero likewise.
    pub fn total_stock_count(&self) -> i64 {
        self.store
            .scan_all()
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.stock)
            .sum()
    }

    /// One-call summary for reports.
    pub fn totals(&self) -> InventoryTotals {
        let mut total_value = Money::zero();
        let mut total_stock = 0;
        for product in self.store.scan_all().iter().filter(|p| p.is_active) {
            total_value += product.stock_value();
            total_stock += product.stock;
        }

        InventoryTotals {
            total_value,
            total_stock,
            low_stock_count: self.store.scan_low_stock().len(),
            out_of_stock_count: self.store.scan_out_of_stock().len(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use std::thread;

    fn laptop() -> Product {
        Product::new(
            "PROD001",
            "Laptop Gaming",
            "Elektronik",
            Money::from_rupiah(15_000_000),
            10,
            5,
        )
    }

    // =========================================================================
    // Recording store double
    // =========================================================================

    /// Test double that records every call it receives, optionally refusing
    /// writes to exercise the verdict-propagation paths.
    #[derive(Debug, Default)]
    struct RecordingStore {
        products: Mutex<HashMap<String, Product>>,
        calls: Mutex<Vec<&'static str>>,
        refuse_writes: bool,
    }

    impl RecordingStore {
        fn with_product(self, product: Product) -> Self {
            self.products
                .lock()
                .unwrap()
                .insert(product.code.clone(), product);
            self
        }

        fn refusing_writes(mut self) -> Self {
            self.refuse_writes = true;
            self
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl ProductStore for RecordingStore {
        fn put(&self, product: Product) -> bool {
            self.record("put");
            if self.refuse_writes {
                return false;
            }
            self.products
                .lock()
                .unwrap()
                .insert(product.code.clone(), product);
            true
        }

        fn get(&self, code: &str) -> Option<Product> {
            self.record("get");
            self.products.lock().unwrap().get(code).cloned()
        }

        fn delete(&self, code: &str) -> bool {
            self.record("delete");
            if self.refuse_writes {
                return false;
            }
            self.products.lock().unwrap().remove(code).is_some()
        }

        fn set_stock(&self, code: &str, stock: i64) -> bool {
            self.record("set_stock");
            if self.refuse_writes {
                return false;
            }
            match self.products.lock().unwrap().get_mut(code) {
                Some(product) => {
                    product.stock = stock;
                    true
                }
                None => false,
            }
        }

        fn scan_by_name(&self, _query: &str) -> Vec<Product> {
            self.record("scan_by_name");
            Vec::new()
        }

        fn scan_by_category(&self, _query: &str) -> Vec<Product> {
            self.record("scan_by_category");
            Vec::new()
        }

        fn scan_low_stock(&self) -> Vec<Product> {
            self.record("scan_low_stock");
            Vec::new()
        }

        fn scan_out_of_stock(&self) -> Vec<Product> {
            self.record("scan_out_of_stock");
            Vec::new()
        }

        fn scan_all(&self) -> Vec<Product> {
            self.record("scan_all");
            Vec::new()
        }
    }

    // =========================================================================
    // Interaction tests (recording double)
    // =========================================================================

    #[test]
    fn test_validation_failures_issue_zero_store_calls() {
        let service = InventoryService::new(RecordingStore::default());

        let invalid = Product::new("P!", "ab", "Elektronik", Money::zero(), -1, -1);
        assert!(!service.add_product(invalid));

        assert!(!service.remove_product("bad code"));
        assert!(service.find_by_code("!!").is_none());
        assert!(!service.update_stock("PROD001", -1));
        assert!(!service.stock_out("AB", 5));
        assert!(!service.stock_in("PROD001", 0));

        assert!(service.store().calls().is_empty());
    }

    #[test]
    fn test_duplicate_add_checks_but_never_puts() {
        let service = InventoryService::new(RecordingStore::default());

        assert!(service.add_product(laptop()));
        assert!(!service.add_product(laptop()));

        // first add: lookup then insert; second add: lookup only
        assert_eq!(service.store().calls(), vec!["get", "put", "get"]);
    }

    #[test]
    fn test_store_put_refusal_propagates() {
        let service = InventoryService::new(RecordingStore::default().refusing_writes());
        assert!(!service.add_product(laptop()));
        assert_eq!(service.store().calls(), vec!["get", "put"]);
    }

    #[test]
    fn test_store_delete_refusal_propagates() {
        let mut drained = laptop();
        drained.stock = 0;
        let service =
            InventoryService::new(RecordingStore::default().with_product(drained).refusing_writes());

        assert!(!service.remove_product("PROD001"));
        assert_eq!(service.store().calls(), vec!["get", "delete"]);
    }

    #[test]
    fn test_store_set_stock_refusal_propagates() {
        let service =
            InventoryService::new(RecordingStore::default().with_product(laptop()).refusing_writes());

        assert!(!service.update_stock("PROD001", 3));
        assert_eq!(service.store().calls(), vec!["get", "set_stock"]);
    }

    #[test]
    fn test_queries_pass_through() {
        let service = InventoryService::new(RecordingStore::default());

        service.find_by_name("laptop");
        service.find_by_category("elektronik");
        service.low_stock_products();
        service.out_of_stock_products();

        assert_eq!(
            service.store().calls(),
            vec![
                "scan_by_name",
                "scan_by_category",
                "scan_low_stock",
                "scan_out_of_stock"
            ]
        );
    }

    // =========================================================================
    // Behavior tests (real store)
    // =========================================================================

    #[test]
    fn test_duplicate_add_keeps_first_record() {
        let service = InventoryService::new(InMemoryStore::new());
        assert!(service.add_product(laptop()));

        let mut imposter = laptop();
        imposter.name = "Laptop Kantor".to_string();
        assert!(!service.add_product(imposter));

        let kept = service.find_by_code("PROD001").unwrap();
        assert_eq!(kept.name, "Laptop Gaming");
        assert_eq!(kept.stock, 10);
    }

    #[test]
    fn test_remove_blocked_while_stock_remains() {
        let service = InventoryService::new(InMemoryStore::new());
        service.add_product(laptop());

        assert!(!service.remove_product("PROD001"));
        assert!(service.find_by_code("PROD001").is_some());

        assert!(service.update_stock("PROD001", 0));
        assert!(service.remove_product("PROD001"));
        assert!(service.find_by_code("PROD001").is_none());
    }

    #[test]
    fn test_remove_absent_product() {
        let service = InventoryService::new(InMemoryStore::new());
        assert!(!service.remove_product("PROD001"));
    }

    #[test]
    fn test_stock_out_insufficiency_leaves_stock_unchanged() {
        let service = InventoryService::new(InMemoryStore::new());
        service.add_product(laptop());

        assert!(!service.stock_out("PROD001", 15));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 10);
    }

    #[test]
    fn test_stock_out_exact_drain() {
        let service = InventoryService::new(InMemoryStore::new());
        service.add_product(laptop());

        assert!(service.stock_out("PROD001", 10));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 0);

        let out = service.out_of_stock_products();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "PROD001");
    }

    #[test]
    fn test_stock_in_accumulates() {
        let service = InventoryService::new(InMemoryStore::new());
        service.add_product(laptop());

        assert!(service.stock_in("PROD001", 7));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 17);
    }

    #[test]
    fn test_movements_refuse_inactive_records() {
        let mut dormant = laptop();
        dormant.is_active = false;
        let service = InventoryService::new(InMemoryStore::with_products(vec![dormant]));

        assert!(!service.stock_in("PROD001", 5));
        assert!(!service.stock_out("PROD001", 1));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 10);
    }

    #[test]
    fn test_update_stock_ignores_active_flag() {
        let mut dormant = laptop();
        dormant.is_active = false;
        let service = InventoryService::new(InMemoryStore::with_products(vec![dormant]));

        // absolute corrections apply to dormant records too
        assert!(service.update_stock("PROD001", 3));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 3);
    }

    #[test]
    fn test_totals_ignore_inactive_records() {
        let active = Product::new(
            "PROD001",
            "Mouse Wireless",
            "Elektronik",
            Money::from_rupiah(10_000),
            2,
            1,
        );
        let mut dormant = Product::new(
            "PROD002",
            "Laptop Gaming",
            "Elektronik",
            Money::from_rupiah(300_000),
            3,
            1,
        );
        dormant.is_active = false;

        let service = InventoryService::new(InMemoryStore::with_products(vec![active, dormant]));

        assert_eq!(service.total_inventory_value(), Money::from_rupiah(20_000));
        assert_eq!(service.total_stock_count(), 2);
    }

    #[test]
    fn test_totals_on_empty_store() {
        let service = InventoryService::new(InMemoryStore::new());
        assert_eq!(service.total_inventory_value(), Money::zero());
        assert_eq!(service.total_stock_count(), 0);
    }

    #[test]
    fn test_totals_summary() {
        let service = InventoryService::new(InMemoryStore::with_products(vec![
            Product::new(
                "PROD001",
                "Laptop Gaming",
                "Elektronik",
                Money::from_rupiah(15_000_000),
                10,
                5,
            ),
            Product::new(
                "PROD002",
                "Mouse Wireless",
                "Elektronik",
                Money::from_rupiah(250_000),
                2,
                5,
            ), // low
            Product::new(
                "PROD003",
                "Beras Premium 5kg",
                "Sembako",
                Money::from_rupiah(78_000),
                0,
                20,
            ), // out
        ]));

        let totals = service.totals();
        assert_eq!(totals.total_value, Money::from_rupiah(150_500_000));
        assert_eq!(totals.total_stock, 12);
        assert_eq!(totals.low_stock_count, 1);
        assert_eq!(totals.out_of_stock_count, 1);
    }

    #[test]
    fn test_totals_serialize_shape() {
        let service = InventoryService::new(InMemoryStore::with_products(vec![Product::new(
            "PROD001",
            "Mouse Wireless",
            "Elektronik",
            Money::from_rupiah(10_000),
            2,
            1,
        )]));

        let json = serde_json::to_value(service.totals()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_value": 20_000,
                "total_stock": 2,
                "low_stock_count": 0,
                "out_of_stock_count": 0,
            })
        );
    }

    #[test]
    fn test_blank_search_input_yields_nothing() {
        let service = InventoryService::new(InMemoryStore::with_products(vec![laptop()]));
        assert!(service.find_by_name("  ").is_empty());
        assert!(service.find_by_category("").is_empty());
    }

    #[test]
    fn test_end_to_end_catalog_flow() {
        let service = InventoryService::new(InMemoryStore::new());

        assert!(service.add_product(laptop()));

        let found = service.find_by_code("PROD001").unwrap();
        assert_eq!(found.name, "Laptop Gaming");

        assert!(!service.stock_out("PROD001", 15)); // insufficient
        assert!(service.stock_out("PROD001", 5));
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 5);
    }

    // =========================================================================
    // Concurrency tests
    // =========================================================================

    #[test]
    fn test_concurrent_stock_out_never_oversells() {
        let service = Arc::new(InventoryService::new(InMemoryStore::new()));
        let mut seeded = laptop();
        seeded.stock = 8;
        assert!(service.add_product(seeded));

        let handles: Vec<_> = (0..12)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.stock_out("PROD001", 1))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|accepted| *accepted)
            .count();

        assert_eq!(successes, 8);
        assert_eq!(service.find_by_code("PROD001").unwrap().stock, 0);
    }

    #[test]
    fn test_concurrent_add_admits_exactly_one() {
        let service = Arc::new(InventoryService::new(InMemoryStore::new()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    service.add_product(Product::new(
                        "PROD001",
                        format!("Laptop Gaming v{i}"),
                        "Elektronik",
                        Money::from_rupiah(15_000_000),
                        10,
                        5,
                    ))
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|accepted| *accepted)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(service.store().scan_all().len(), 1);
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum StockOp {
            In(i64),
            Out(i64),
            Set(i64),
        }

        fn stock_op() -> impl Strategy<Value = StockOp> {
            prop_oneof![
                (1i64..=50).prop_map(StockOp::In),
                (1i64..=50).prop_map(StockOp::Out),
                (0i64..=100).prop_map(StockOp::Set),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any sequence of stock movements tracks a simple
            /// model exactly and never drives stock negative.
            #[test]
            fn stock_movements_match_model(ops in prop::collection::vec(stock_op(), 1..40)) {
                let service = InventoryService::new(InMemoryStore::new());
                prop_assert!(service.add_product(Product::new(
                    "PROD001",
                    "Laptop Gaming",
                    "Elektronik",
                    Money::from_rupiah(1_000),
                    10,
                    3,
                )));

                let mut model: i64 = 10;
                for op in ops {
                    match op {
                        StockOp::In(n) => {
                            prop_assert!(service.stock_in("PROD001", n));
                            model += n;
                        }
                        StockOp::Out(n) => {
                            let accepted = service.stock_out("PROD001", n);
                            if model >= n {
                                prop_assert!(accepted);
                                model -= n;
                            } else {
                                prop_assert!(!accepted);
                            }
                        }
                        StockOp::Set(n) => {
                            prop_assert!(service.update_stock("PROD001", n));
                            model = n;
                        }
                    }

                    let current = service.find_by_code("PROD001").unwrap().stock;
                    prop_assert_eq!(current, model);
                    prop_assert!(current >= 0);
                }
            }
        }
    }
}
