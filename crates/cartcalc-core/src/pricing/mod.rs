//! # Pricing Engine
//!
//! Turns a cart, a customer, and a shipping method into a fully itemized
//! [`PricingResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         calculate()                                     │
//! │                                                                         │
//! │  1. price_line()          per-line bulk discount                       │
//! │        │                                                                │
//! │  2. aggregate()           original total, bulk total, after-bulk       │
//! │        │                                                                │
//! │  3. loyalty_discount()    % off the after-bulk subtotal                │
//! │        │                                                                │
//! │  4. cap_discount()        bulk + loyalty <= cap ──► final total        │
//! │        │                                               │                │
//! │  5. calculate_shipping()  weight, original total, ◄────┘                │
//! │        │                  final total, method                           │
//! │  6. assemble              grand total = final + shipping               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Control only flows forward. Free-shipping eligibility reads the capped
//! final total, so stage 4 must complete before stage 5.
//!
//! The engine holds nothing but its policy. Calls share no state, so one
//! engine may be used from any number of threads at once.
//!
//! ## Example
//! ```rust
//! use cartcalc_core::{calculate, CartLineItem, CustomerProfile, ShippingMethod};
//!
//! let cart = vec![CartLineItem::new("SOFA-01", "Sofa", 100_000, 3, 0.0).unwrap()];
//! let result = calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Standard).unwrap();
//!
//! assert_eq!(result.original_total().cents(), 300_000);
//! assert_eq!(result.final_total().cents(), 255_000);
//! assert!(result.shipment().is_free_shipping());
//! assert_eq!(result.grand_total().cents(), 255_000);
//! ```

pub mod discount;
pub mod result;
pub mod shipping;

use tracing::{debug, instrument};

use crate::error::{CoreError, CoreResult};
use crate::policy::PricingPolicy;
use crate::types::{CartLineItem, CustomerProfile, ShippingMethod};
use crate::validation::validate_unique_ids;

pub use result::{LineItemResult, PricingResult, ShipmentResult};

use discount::{aggregate, cap_discount, loyalty_discount, price_line};
use result::PricingParts;
use shipping::{calculate_shipping, total_weight_kg};

// =============================================================================
// Engine
// =============================================================================

/// The pricing engine: a validated [`PricingPolicy`] and nothing else.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Creates an engine after checking the policy.
    pub fn new(policy: PricingPolicy) -> CoreResult<Self> {
        policy.validate()?;
        Ok(PricingEngine { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Prices a cart.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if two lines share an id
    /// - [`CoreError::AmountOverflow`] if any amount leaves the i64 range
    ///
    /// There is no partial result. An empty cart is valid and prices to zero,
    /// plus the flat fee when EXPRESS is chosen.
    #[instrument(
        skip_all,
        fields(lines = items.len(), method = %method, tenure_years = customer.tenure_years)
    )]
    pub fn calculate(
        &self,
        items: &[CartLineItem],
        customer: &CustomerProfile,
        method: ShippingMethod,
    ) -> CoreResult<PricingResult> {
        let policy = &self.policy;

        validate_unique_ids(items.iter().map(CartLineItem::id))?;

        // 1. Line-item discounter
        let lines = items
            .iter()
            .map(|item| price_line(item, policy))
            .collect::<CoreResult<Vec<_>>>()?;

        // 2. Subtotal aggregator
        let subtotals = aggregate(&lines)?;

        // 3. Loyalty discounter
        let loyalty = loyalty_discount(subtotals.subtotal_after_bulk, customer, policy);

        // 4. Discount capper
        let capped = cap_discount(
            subtotals.original_total,
            subtotals.bulk_discount_total,
            loyalty,
            policy,
        )?;
        let final_total = subtotals
            .original_total
            .checked_sub(capped.combined)
            .ok_or(CoreError::AmountOverflow {
                operation: "final total",
            })?;

        // 5. Shipping calculator
        let weight = total_weight_kg(items)?;
        let shipment = calculate_shipping(
            weight,
            subtotals.original_total,
            final_total,
            method,
            policy,
        )?;

        // 6. Result assembler
        let result = PricingResult::assemble(PricingParts {
            original_total: subtotals.original_total,
            lines,
            bulk_discount_total: subtotals.bulk_discount_total,
            subtotal_after_bulk: subtotals.subtotal_after_bulk,
            loyalty_discount: loyalty,
            combined_discount: capped.combined,
            is_capped: capped.is_capped,
            final_total,
            total_weight_kg: weight,
            shipment,
        })
        .ok_or(CoreError::AmountOverflow {
            operation: "grand total",
        })?;

        debug!(
            final_total = result.final_total().cents(),
            grand_total = result.grand_total().cents(),
            "priced cart"
        );

        Ok(result)
    }
}

/// Prices a cart with the default policy.
///
/// Shorthand for `PricingEngine::default().calculate(..)`.
pub fn calculate(
    items: &[CartLineItem],
    customer: &CustomerProfile,
    method: ShippingMethod,
) -> CoreResult<PricingResult> {
    PricingEngine::default().calculate(items, customer, method)
}

// =============================================================================
// Unit Tests
// =============================================================================
