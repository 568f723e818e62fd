//! # Pricing Module
//!
//! The tiered discount engine. Stateless: every function here is a pure
//! mapping from inputs to a rate or an amount, which keeps the whole module
//! trivially property-testable.
//!
//! ## Discount Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Discount Pipeline                               │
//! │                                                                         │
//! │  quantity ────► quantity_rate ──┐                                       │
//! │                                 ├──► sum ──► cap at 30% ──► rate        │
//! │  tier code ───► CustomerTier ───┘                            │          │
//! │                 (bonus)                                      ▼          │
//! │                                        discount = line total × rate     │
//! │                                                                         │
//! │  Quantity tiers (inclusive lower bounds):                               │
//! │      < 5 → 0%   5-9 → 5%   10-49 → 10%   50-99 → 15%   ≥ 100 → 20%      │
//! │                                                                         │
//! │  Customer bonus (exact, case-sensitive match):                          │
//! │      PREMIUM → +10%   REGULER → +5%   BARU → +2%   other → +0%          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gudang_core::money::Money;
//! use gudang_core::pricing::{compute_discount, price_after_discount};
//!
//! // 10 units at Rp15.000.000 for a PREMIUM customer:
//! // 10% quantity tier + 10% premium bonus = 20% of Rp150.000.000
//! let unit_price = Money::from_rupiah(15_000_000);
//! let discount = compute_discount(unit_price, 10, "PREMIUM").unwrap();
//! assert_eq!(discount, Money::from_rupiah(30_000_000));
//!
//! let to_pay = price_after_discount(unit_price, 10, "PREMIUM").unwrap();
//! assert_eq!(to_pay, Money::from_rupiah(120_000_000));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::MAX_TOTAL_DISCOUNT;

// =============================================================================
// Discount Rate
// =============================================================================

/// A discount rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the first quantity tier)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Combines two rates additively, saturating instead of overflowing.
    #[inline]
    pub const fn saturating_add(self, other: DiscountRate) -> Self {
        DiscountRate(self.0.saturating_add(other.0))
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// Displays the rate as a human percentage: 1250 bps → `12.5%`.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

// =============================================================================
// Quantity Tiers
// =============================================================================

/// Returns the discount rate earned by purchase quantity alone.
///
/// ## Rules
/// Inclusive lower bounds; quantities below the first tier (including
/// non-positive values) earn nothing.
///
/// | quantity | rate |
/// |----------|------|
/// | `< 5`    | 0%   |
/// | `5-9`    | 5%   |
/// | `10-49`  | 10%  |
/// | `50-99`  | 15%  |
/// | `>= 100` | 20%  |
#[inline]
pub const fn quantity_rate(quantity: i64) -> DiscountRate {
    match quantity {
        i64::MIN..=4 => DiscountRate::zero(),
        5..=9 => DiscountRate::from_bps(500),
        10..=49 => DiscountRate::from_bps(1000),
        50..=99 => DiscountRate::from_bps(1500),
        _ => DiscountRate::from_bps(2000),
    }
}

// =============================================================================
// Customer Tier
// =============================================================================

/// A recognized customer classification.
///
/// The wire tokens are the exact business literals (`"PREMIUM"`,
/// `"REGULER"`, `"BARU"`); serde uses the same spellings so a serialized
/// tier round-trips through [`CustomerTier::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerTier {
    /// Long-standing high-volume customer: +10%.
    Premium,
    /// Regular account: +5%.
    Reguler,
    /// New account: +2%.
    Baru,
}

impl CustomerTier {
    /// Parses a customer tier token.
    ///
    /// ## Rules
    /// Exact, case-sensitive match against the three known literals.
    /// Anything else, including the empty string and lowercase spellings,
    /// is unrecognized and maps to no bonus at all.
    ///
    /// ## Example
    /// ```rust
    /// use gudang_core::pricing::CustomerTier;
    ///
    /// assert_eq!(CustomerTier::parse("PREMIUM"), Some(CustomerTier::Premium));
    /// assert_eq!(CustomerTier::parse("premium"), None);
    /// assert_eq!(CustomerTier::parse(""), None);
    /// ```
    pub fn parse(code: &str) -> Option<CustomerTier> {
        match code {
            "PREMIUM" => Some(CustomerTier::Premium),
            "REGULER" => Some(CustomerTier::Reguler),
            "BARU" => Some(CustomerTier::Baru),
            _ => None,
        }
    }

    /// Returns the additional discount rate this tier earns.
    #[inline]
    pub const fn bonus(&self) -> DiscountRate {
        match self {
            CustomerTier::Premium => DiscountRate::from_bps(1000),
            CustomerTier::Reguler => DiscountRate::from_bps(500),
            CustomerTier::Baru => DiscountRate::from_bps(200),
        }
    }

    /// Returns the business literal for this tier.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Premium => "PREMIUM",
            CustomerTier::Reguler => "REGULER",
            CustomerTier::Baru => "BARU",
        }
    }
}

// =============================================================================
// Discount Engine
// =============================================================================

/// Computes the discount amount for a purchase line.
///
/// ## Rules
/// - Faults with [`PricingError::InvalidArgument`] when `unit_price <= 0`
///   or `quantity <= 0`; those are caller contract violations, not business
///   conditions.
/// - Total rate = quantity tier + customer bonus, capped at
///   [`MAX_TOTAL_DISCOUNT`](crate::MAX_TOTAL_DISCOUNT) (30%). The cap is
///   applied silently; the rate halves stay public so a caller who cares
///   can compare them against the cap itself.
/// - Amount = `unit_price × quantity × rate`, rounded half up to whole
///   rupiah.
///
/// ## Example
/// ```rust
/// use gudang_core::money::Money;
/// use gudang_core::pricing::compute_discount;
///
/// // 5 units of Rp100.000 for a BARU customer: 5% + 2% = 7% of Rp500.000
/// let discount = compute_discount(Money::from_rupiah(100_000), 5, "BARU").unwrap();
/// assert_eq!(discount, Money::from_rupiah(35_000));
/// ```
pub fn compute_discount(
    unit_price: Money,
    quantity: i64,
    customer_tier: &str,
) -> PricingResult<Money> {
    if !unit_price.is_positive() || quantity <= 0 {
        return Err(PricingError::InvalidArgument);
    }

    let bonus = CustomerTier::parse(customer_tier).map_or(DiscountRate::zero(), |tier| tier.bonus());
    let rate = quantity_rate(quantity)
        .saturating_add(bonus)
        .min(MAX_TOTAL_DISCOUNT);

    Ok(unit_price.multiply_quantity(quantity).discount_amount(rate))
}

/// Computes the amount left to pay after the discount.
///
/// Same validation and capping as [`compute_discount`]; the two results
/// always partition the undiscounted line total exactly.
pub fn price_after_discount(
    unit_price: Money,
    quantity: i64,
    customer_tier: &str,
) -> PricingResult<Money> {
    let discount = compute_discount(unit_price, quantity, customer_tier)?;
    Ok(unit_price.multiply_quantity(quantity) - discount)
}

// =============================================================================
// Discount Band
// =============================================================================

/// Named severity band for a discount rate.
///
/// Bands are ordered: `None < Light < Moderate < Heavy`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBand {
    /// No effective discount (zero or negative rate).
    None,
    /// Below 10%.
    Light,
    /// 10% up to but excluding 20%.
    Moderate,
    /// 20% and above.
    Heavy,
}

impl DiscountBand {
    /// Classifies a signed rate in basis points into a band.
    ///
    /// ## Rules
    /// Pure range lookup, total over every input: negative rates and rates
    /// above 100% classify like any other value, no validation happens here.
    ///
    /// | rate (bps)    | band     |
    /// |---------------|----------|
    /// | `<= 0`        | None     |
    /// | `1-999`       | Light    |
    /// | `1000-1999`   | Moderate |
    /// | `>= 2000`     | Heavy    |
    #[inline]
    pub const fn classify(rate_bps: i32) -> DiscountBand {
        if rate_bps <= 0 {
            DiscountBand::None
        } else if rate_bps < 1000 {
            DiscountBand::Light
        } else if rate_bps < 2000 {
            DiscountBand::Moderate
        } else {
            DiscountBand::Heavy
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
