//! # gudang-inventory: Storage and Operations for Gudang
//!
//! This crate provides the product store and the inventory service on top
//! of it. Storage is in-memory and thread-safe; the service layers
//! validation, per-code locking, and reporting over the store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Gudang Data Flow                                │
//! │                                                                         │
//! │  Caller (demo binary, embedding application)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  gudang-inventory (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Service      │   │  Store Trait   │   │  In-Memory   │  │   │
//! │  │   │ (service.rs)   │   │  (store.rs)    │   │ (memory.rs)  │  │   │
//! │  │   │                │   │                │   │              │  │   │
//! │  │   │ validation     │──►│ ProductStore   │◄──│ RwLock over  │  │   │
//! │  │   │ per-code locks │   │ put/get/scan   │   │ HashMap      │  │   │
//! │  │   │ totals         │   │                │   │              │  │   │
//! │  │   └────────────────┘   └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  gudang-core (Product, Money, validation predicates)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ProductStore` trait and its contract
//! - [`memory`] - Thread-safe in-memory store implementation
//! - [`service`] - Business operations, locking, and reporting
//!
//! ## Usage
//!
//! ```rust
//! use gudang_core::{Money, Product};
//! use gudang_inventory::{InMemoryStore, InventoryService};
//!
//! let service = InventoryService::new(InMemoryStore::new());
//!
//! service.add_product(Product::new(
//!     "ELK001",
//!     "Laptop Gaming",
//!     "Elektronik",
//!     Money::from_rupiah(15_000_000),
//!     10,
//!     5,
//! ));
//!
//! assert!(service.stock_out("ELK001", 3));
//! let totals = service.totals();
//! assert_eq!(totals.total_stock, 7);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod memory;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use memory::InMemoryStore;
pub use service::{InventoryService, InventoryTotals};
pub use store::ProductStore;
