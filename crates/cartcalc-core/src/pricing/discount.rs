//! Discount stages: bulk per line, subtotal aggregation, loyalty, and the
//! global cap.
//!
//! ## Rule Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  each line ──► price_line()       bulk = 15% of line value if qty >= 3 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │               aggregate()         original, bulk total, after-bulk      │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │            loyalty_discount()     5% of AFTER-BULK subtotal, tenure > 2 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │              cap_discount()       bulk + loyalty <= 30% of original     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each percentage is rounded exactly once, where it is derived. Sums of
//! rounded values are never rounded again.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::policy::PricingPolicy;
use crate::pricing::result::LineItemResult;
use crate::types::{CartLineItem, CustomerProfile};

/// Computes one line's value and bulk discount.
///
/// ## Example
/// ```rust
/// use cartcalc_core::pricing::discount::price_line;
/// use cartcalc_core::{CartLineItem, PricingPolicy};
///
/// let item = CartLineItem::new("SKU-1", "Chair", 100_000, 3, 0.0).unwrap();
/// let line = price_line(&item, &PricingPolicy::default()).unwrap();
/// assert_eq!(line.line_value().cents(), 300_000);
/// assert_eq!(line.bulk_discount().cents(), 45_000);
/// ```
pub fn price_line(item: &CartLineItem, policy: &PricingPolicy) -> CoreResult<LineItemResult> {
    let line_value = item.line_value().ok_or(CoreError::AmountOverflow {
        operation: "line value",
    })?;
    item.line_weight_kg().ok_or(CoreError::AmountOverflow {
        operation: "line weight",
    })?;

    let bulk_discount = if item.quantity() >= policy.bulk_min_quantity {
        line_value.percent_of(policy.bulk_discount)
    } else {
        Money::zero()
    };

    debug!(
        line = item.id(),
        quantity = item.quantity(),
        line_value = line_value.cents(),
        bulk_discount = bulk_discount.cents(),
        "priced line"
    );

    Ok(LineItemResult::new(item, line_value, bulk_discount))
}

/// Cart totals before loyalty and the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subtotals {
    pub original_total: Money,
    pub bulk_discount_total: Money,
    pub subtotal_after_bulk: Money,
}

/// Sums line values and bulk discounts across the cart.
///
/// An empty cart sums to zero everywhere.
pub fn aggregate(lines: &[LineItemResult]) -> CoreResult<Subtotals> {
    let overflow = || CoreError::AmountOverflow {
        operation: "cart subtotal",
    };

    let original_total = lines
        .iter()
        .try_fold(Money::zero(), |acc, line| acc.checked_add(line.line_value()))
        .ok_or_else(overflow)?;
    let bulk_discount_total = lines
        .iter()
        .try_fold(Money::zero(), |acc, line| acc.checked_add(line.bulk_discount()))
        .ok_or_else(overflow)?;
    let subtotal_after_bulk = original_total
        .checked_sub(bulk_discount_total)
        .ok_or_else(overflow)?;

    debug!(
        original_total = original_total.cents(),
        bulk_discount_total = bulk_discount_total.cents(),
        subtotal_after_bulk = subtotal_after_bulk.cents(),
        "aggregated subtotals"
    );

    Ok(Subtotals {
        original_total,
        bulk_discount_total,
        subtotal_after_bulk,
    })
}

/// Loyalty discount on the bulk-adjusted subtotal.
///
/// Applies only when tenure is strictly above the policy minimum (2 years by
/// default), so a customer of exactly two years gets nothing.
pub fn loyalty_discount(
    subtotal_after_bulk: Money,
    customer: &CustomerProfile,
    policy: &PricingPolicy,
) -> Money {
    let discount = if customer.tenure_years > policy.loyalty_min_tenure_years {
        subtotal_after_bulk.percent_of(policy.loyalty_discount)
    } else {
        Money::zero()
    };

    debug!(
        tenure_years = customer.tenure_years,
        loyalty_discount = discount.cents(),
        "applied loyalty rule"
    );

    discount
}

/// Outcome of applying the discount cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedDiscount {
    /// Discount actually granted.
    pub combined: Money,
    /// The ceiling that was enforced.
    pub cap: Money,
    /// True when bulk + loyalty exceeded the ceiling.
    pub is_capped: bool,
}

/// Limits bulk + loyalty to a share of the original total.
///
/// The cap bounds the sum, not each component. When it binds the granted
/// discount equals the cap exactly.
///
/// ## Example
/// ```rust
/// use cartcalc_core::pricing::discount::cap_discount;
/// use cartcalc_core::{Money, PricingPolicy};
///
/// let capped = cap_discount(
///     Money::from_cents(10_000),
///     Money::from_cents(2_500),
///     Money::from_cents(900),
///     &PricingPolicy::default(),
/// )
/// .unwrap();
/// assert!(capped.is_capped);
/// assert_eq!(capped.combined.cents(), 3_000);
/// ```
pub fn cap_discount(
    original_total: Money,
    bulk_discount_total: Money,
    loyalty_discount: Money,
    policy: &PricingPolicy,
) -> CoreResult<CappedDiscount> {
    let candidate = bulk_discount_total
        .checked_add(loyalty_discount)
        .ok_or(CoreError::AmountOverflow {
            operation: "combined discount",
        })?;
    let cap = original_total.percent_of(policy.discount_cap);

    let capped = if candidate > cap {
        CappedDiscount {
            combined: cap,
            cap,
            is_capped: true,
        }
    } else {
        CappedDiscount {
            combined: candidate,
            cap,
            is_capped: false,
        }
    };

    debug!(
        candidate = candidate.cents(),
        cap = cap.cents(),
        is_capped = capped.is_capped,
        "applied discount cap"
    );

    Ok(capped)
}

// =============================================================================
// Unit Tests
// =============================================================================
