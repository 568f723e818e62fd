//! # Inventory Demo
//!
//! Seeds an in-memory catalog and walks through the inventory operations:
//! searches, stock movements, reorder reports, totals, and discount quotes.
//!
//! ## Usage
//! ```bash
//! # Full demo catalog
//! cargo run -p gudang-inventory --bin demo
//!
//! # Seed only the first N catalog entries
//! cargo run -p gudang-inventory --bin demo -- --count 4
//!
//! # Surface the service's debug logging
//! RUST_LOG=debug cargo run -p gudang-inventory --bin demo
//! ```

use std::env;

use gudang_core::pricing::{compute_discount, price_after_discount, quantity_rate};
use gudang_core::{CustomerTier, DiscountBand, DiscountRate, Money, Product, MAX_TOTAL_DISCOUNT};
use gudang_inventory::{InMemoryStore, InventoryService};

/// Demo catalog: (code, name, category, price rupiah, stock, min stock).
const CATALOG: &[(&str, &str, &str, i64, i64, i64)] = &[
    ("ELK001", "Laptop Gaming", "Elektronik", 15_000_000, 10, 5),
    ("ELK002", "Mouse Wireless", "Elektronik", 250_000, 40, 10),
    ("ELK003", "Keyboard Mekanik", "Elektronik", 850_000, 3, 5),
    ("SMB001", "Beras Premium 5kg", "Sembako", 78_000, 120, 20),
    ("SMB002", "Minyak Goreng 2L", "Sembako", 38_000, 15, 25),
    ("SMB003", "Gula Pasir 1kg", "Sembako", 17_500, 0, 10),
    ("MIN001", "Teh Botol 450ml", "Minuman", 5_500, 200, 50),
    ("MIN002", "Kopi Susu Botol", "Minuman", 12_000, 48, 24),
    ("ATK001", "Pulpen Gel Hitam", "Alat Tulis", 4_500, 500, 100),
    ("ATK002", "Buku Tulis 58 Lembar", "Alat Tulis", 7_000, 80, 40),
];

/// Discount quote scenarios: (unit price rupiah, quantity, customer tier).
const QUOTES: &[(i64, i64, &str)] = &[
    (15_000_000, 1, "BARU"),
    (250_000, 5, "REGULER"),
    (78_000, 12, "PREMIUM"),
    (5_500, 60, "walk-in"),
    (4_500, 150, "PREMIUM"),
];

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,gudang=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = CATALOG.len();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(CATALOG.len());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Gudang Inventory Demo");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of catalog entries to seed (default: all)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing();

    println!("📦 Gudang Inventory Demo");
    println!("========================");
    println!();

    // Seed the catalog
    let service = InventoryService::new(InMemoryStore::new());

    let mut seeded = 0;
    for (code, name, category, price, stock, min_stock) in CATALOG.iter().take(count) {
        let product = Product::new(
            *code,
            *name,
            *category,
            Money::from_rupiah(*price),
            *stock,
            *min_stock,
        );
        if service.add_product(product) {
            seeded += 1;
        }
    }
    println!("✓ Seeded {} products", seeded);
    println!();

    // Searches
    println!("Searches");
    println!("--------");
    match service.find_by_code("ELK001") {
        Some(product) => println!("  ELK001         → {} @ {}", product.name, product.price),
        None => println!("  ELK001         → not found"),
    }
    println!(
        "  name 'laptop'  → {} match(es)",
        service.find_by_name("laptop").len()
    );
    println!(
        "  cat 'sembako'  → {} match(es)",
        service.find_by_category("sembako").len()
    );
    println!();

    // Stock movements
    println!("Stock Movements");
    println!("---------------");
    print_movement("stock_in  MIN001 +100", service.stock_in("MIN001", 100));
    print_movement("stock_out ELK001 -4", service.stock_out("ELK001", 4));
    print_movement("stock_out ELK003 -10", service.stock_out("ELK003", 10));
    print_movement("recount   SMB002 =60", service.update_stock("SMB002", 60));
    println!();

    // Reorder reports
    println!("Reorder Reports");
    println!("---------------");
    let low = service.low_stock_products();
    println!("  Low on stock ({}):", low.len());
    for product in &low {
        println!(
            "    {} {} (stock {}, min {})",
            product.code, product.name, product.stock, product.min_stock
        );
    }
    let out = service.out_of_stock_products();
    println!("  Out of stock ({}):", out.len());
    for product in &out {
        println!("    {} {}", product.code, product.name);
    }
    println!();

    // Removals
    println!("Removals");
    println!("--------");
    print_movement("remove ELK001 (stocked)", service.remove_product("ELK001"));
    print_movement("remove SMB003 (drained)", service.remove_product("SMB003"));
    println!();

    // Totals
    println!("Inventory Totals");
    println!("----------------");
    let totals = service.totals();
    println!("  Value: {}", totals.total_value);
    println!("  Units: {}", totals.total_stock);
    println!("{}", serde_json::to_string_pretty(&totals)?);
    println!();

    // Discount quotes
    println!("Discount Quotes");
    println!("---------------");
    println!(
        "  {:>14} {:>4}  {:<8} {:>6} {:>14} {:>14}  Band",
        "Unit Price", "Qty", "Tier", "Rate", "Discount", "Payable"
    );
    for (price, quantity, tier) in QUOTES {
        let unit_price = Money::from_rupiah(*price);
        let discount = match compute_discount(unit_price, *quantity, tier) {
            Ok(discount) => discount,
            Err(e) => {
                println!("  quote refused: {e}");
                continue;
            }
        };
        let payable = price_after_discount(unit_price, *quantity, tier)?;

        let bonus = CustomerTier::parse(tier).map_or(DiscountRate::zero(), |t| t.bonus());
        let rate = quantity_rate(*quantity)
            .saturating_add(bonus)
            .min(MAX_TOTAL_DISCOUNT);
        let band = DiscountBand::classify(rate.bps() as i32);

        println!(
            "  {:>14} {:>4}  {:<8} {:>6} {:>14} {:>14}  {:?}",
            unit_price.to_string(),
            quantity,
            tier,
            rate.to_string(),
            discount.to_string(),
            payable.to_string(),
            band
        );
    }
    println!();

    // Engine fault demonstration
    match compute_discount(Money::zero(), 10, "PREMIUM") {
        Ok(_) => println!("  unexpected: zero price accepted"),
        Err(e) => println!("  zero price refused: {e}"),
    }

    println!();
    println!("✓ Demo complete!");

    Ok(())
}

/// Prints one movement line with its verdict.
fn print_movement(label: &str, accepted: bool) {
    if accepted {
        println!("  ✓ {label}");
    } else {
        println!("  ⚠ {label} → refused");
    }
}
