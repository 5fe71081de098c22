//! Shipping charge from weight, order value, and method.
//!
//! ## Decision Table
//! ```text
//! ┌──────────────┬────────┬──────────────────┬────────────────────┬────────┐
//! │ Method       │ Base   │ Weight           │ Method surcharge   │ Free?  │
//! ├──────────────┼────────┼──────────────────┼────────────────────┼────────┤
//! │ STANDARD     │ $7.00  │ round(kg × 200)  │ -                  │ yes    │
//! │ EXPEDITED    │ $7.00  │ round(kg × 200)  │ 15% of ORIGINAL    │ yes    │
//! │ EXPRESS      │ -      │ -                │ -                  │ never  │
//! └──────────────┴────────┴──────────────────┴────────────────────┴────────┘
//! ```
//!
//! Free shipping needs the final (already capped) product total to be
//! strictly above the threshold. EXPRESS is always the flat fee.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::policy::PricingPolicy;
use crate::pricing::result::ShipmentResult;
use crate::types::{CartLineItem, ShippingMethod};

/// Σ unit weight × quantity across the cart, in kilograms.
///
/// ## Errors
/// [`CoreError::AmountOverflow`] if a line weight or the sum is not finite.
pub fn total_weight_kg(items: &[CartLineItem]) -> CoreResult<f64> {
    let overflow = || CoreError::AmountOverflow {
        operation: "total weight",
    };

    let total = items.iter().try_fold(0.0_f64, |acc, item| {
        item.line_weight_kg().map(|kg| acc + kg).ok_or_else(overflow)
    })?;

    if !total.is_finite() {
        return Err(overflow());
    }
    Ok(total)
}

/// Weight charge, rounded half away from zero to whole cents.
///
/// This is the only place a float meets money; the product is rounded
/// immediately and never stored unrounded.
pub fn weight_surcharge(total_weight_kg: f64, policy: &PricingPolicy) -> CoreResult<Money> {
    let cents = (total_weight_kg * policy.weight_rate_per_kg.cents() as f64).round();

    if !cents.is_finite() || cents >= i64::MAX as f64 {
        return Err(CoreError::AmountOverflow {
            operation: "weight surcharge",
        });
    }

    Ok(Money::from_cents(cents as i64))
}

/// Computes the shipment for the chosen method.
///
/// ## Arguments
/// * `total_weight_kg` - from [`total_weight_kg`]
/// * `original_total` - pre-discount product total; prices the EXPEDITED
///   surcharge
/// * `final_total` - post-cap product total; decides free shipping
///
/// ## Example
/// ```rust
/// use cartcalc_core::pricing::shipping::calculate_shipping;
/// use cartcalc_core::{Money, PricingPolicy, ShippingMethod};
///
/// let shipment = calculate_shipping(
///     0.0,
///     Money::from_cents(5_000),
///     Money::from_cents(5_000),
///     ShippingMethod::Expedited,
///     &PricingPolicy::default(),
/// )
/// .unwrap();
/// assert_eq!(shipment.total_shipping().cents(), 1_450);
/// ```
pub fn calculate_shipping(
    total_weight_kg: f64,
    original_total: Money,
    final_total: Money,
    method: ShippingMethod,
    policy: &PricingPolicy,
) -> CoreResult<ShipmentResult> {
    let qualifies_for_free = final_total > policy.free_shipping_threshold;

    let shipment = match method {
        ShippingMethod::Express => ShipmentResult::flat(method, policy.express_flat),
        ShippingMethod::Standard | ShippingMethod::Expedited if qualifies_for_free => {
            ShipmentResult::free(method)
        }
        ShippingMethod::Standard => {
            charged(method, total_weight_kg, Money::zero(), policy)?
        }
        ShippingMethod::Expedited => {
            let surcharge = original_total.percent_of(policy.expedited_surcharge);
            charged(method, total_weight_kg, surcharge, policy)?
        }
    };

    debug!(
        method = %method,
        total_weight_kg,
        final_total = final_total.cents(),
        is_free_shipping = shipment.is_free_shipping(),
        total_shipping = shipment.total_shipping().cents(),
        "calculated shipping"
    );

    Ok(shipment)
}

fn charged(
    method: ShippingMethod,
    total_weight_kg: f64,
    expedited_surcharge: Money,
    policy: &PricingPolicy,
) -> CoreResult<ShipmentResult> {
    let base = policy.base_shipping;
    let weight = weight_surcharge(total_weight_kg, policy)?;

    let total = base
        .checked_add(weight)
        .and_then(|sum| sum.checked_add(expedited_surcharge))
        .ok_or(CoreError::AmountOverflow {
            operation: "shipping total",
        })?;

    Ok(ShipmentResult::charged(
        method,
        base,
        weight,
        expedited_surcharge,
        total,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
