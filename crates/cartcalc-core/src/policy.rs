//! # Pricing Policy
//!
//! Every rule constant the engine uses, as data.
//!
//! ## Default Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                          Default                                  │
//! │  ────────────────────────────  ──────────────────────────────────────  │
//! │  Bulk discount                 15% of line value when qty >= 3         │
//! │  Loyalty discount              5% of bulk-adjusted subtotal, tenure > 2│
//! │  Discount cap                  30% of original total                   │
//! │  Free shipping                 final total > $100.00 (not EXPRESS)     │
//! │  Standard / expedited base     $7.00                                   │
//! │  Weight surcharge              $2.00 per kg                            │
//! │  Expedited surcharge           15% of original total                   │
//! │  Express flat fee              $25.00                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policy File Format
//! Every field is optional; missing fields keep their default.
//! ```toml
//! bulk_min_quantity = 3
//! bulk_discount_bps = 1500
//! free_shipping_threshold_cents = 10000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Rate;
use crate::validation::validate_rate_bps;

/// Rule constants for discounts, the discount cap, and shipping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingPolicy {
    /// Smallest line quantity that earns the bulk discount.
    pub bulk_min_quantity: i64,

    #[serde(rename = "bulk_discount_bps")]
    pub bulk_discount: Rate,

    /// Loyalty applies when tenure is strictly greater than this.
    pub loyalty_min_tenure_years: u32,

    #[serde(rename = "loyalty_discount_bps")]
    pub loyalty_discount: Rate,

    /// Ceiling on bulk + loyalty, as a share of the original total.
    #[serde(rename = "discount_cap_bps")]
    pub discount_cap: Rate,

    /// Free shipping needs a final total strictly above this.
    #[serde(rename = "free_shipping_threshold_cents")]
    pub free_shipping_threshold: Money,

    #[serde(rename = "base_shipping_cents")]
    pub base_shipping: Money,

    #[serde(rename = "weight_rate_cents_per_kg")]
    pub weight_rate_per_kg: Money,

    /// Charged on the original (pre-discount) total.
    #[serde(rename = "expedited_surcharge_bps")]
    pub expedited_surcharge: Rate,

    #[serde(rename = "express_flat_cents")]
    pub express_flat: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            bulk_min_quantity: 3,
            bulk_discount: Rate::from_bps(1500),
            loyalty_min_tenure_years: 2,
            loyalty_discount: Rate::from_bps(500),
            discount_cap: Rate::from_bps(3000),
            free_shipping_threshold: Money::from_cents(10_000),
            base_shipping: Money::from_cents(700),
            weight_rate_per_kg: Money::from_cents(200),
            expedited_surcharge: Rate::from_bps(1500),
            express_flat: Money::from_cents(2500),
        }
    }
}

impl PricingPolicy {
    /// Checks the policy can be applied without breaking the result
    /// invariants (no rate above 100%, no negative charges).
    pub fn validate(&self) -> CoreResult<()> {
        let rates = [
            ("bulk_discount_bps", self.bulk_discount),
            ("loyalty_discount_bps", self.loyalty_discount),
            ("discount_cap_bps", self.discount_cap),
            ("expedited_surcharge_bps", self.expedited_surcharge),
        ];
        for (field, rate) in rates {
            validate_rate_bps(field, rate.bps()).map_err(|e| CoreError::InvalidPolicy {
                reason: e.to_string(),
            })?;
        }

        if self.bulk_min_quantity < 1 {
            return Err(CoreError::InvalidPolicy {
                reason: "bulk_min_quantity must be at least 1".to_string(),
            });
        }

        let amounts = [
            ("free_shipping_threshold_cents", self.free_shipping_threshold),
            ("base_shipping_cents", self.base_shipping),
            ("weight_rate_cents_per_kg", self.weight_rate_per_kg),
            ("express_flat_cents", self.express_flat),
        ];
        for (field, amount) in amounts {
            if amount.is_negative() {
                return Err(CoreError::InvalidPolicy {
                    reason: format!("{} must not be negative", field),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PricingPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_rate_above_100_percent_rejected() {
        let policy = PricingPolicy {
            discount_cap: Rate::from_bps(10_001),
            ..PricingPolicy::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidPolicy { ref reason } if reason.contains("discount_cap_bps")
        ));
    }

    #[test]
    fn test_zero_bulk_quantity_rejected() {
        let policy = PricingPolicy {
            bulk_min_quantity: 0,
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_negative_charge_rejected() {
        let policy = PricingPolicy {
            express_flat: Money::from_cents(-1),
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let policy: PricingPolicy =
            serde_json::from_str(r#"{"express_flat_cents": 3000}"#).unwrap();
        assert_eq!(policy.express_flat.cents(), 3000);
        assert_eq!(policy.bulk_discount.bps(), 1500);
        assert_eq!(policy.free_shipping_threshold.cents(), 10_000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<PricingPolicy>(r#"{"tax_bps": 825}"#);
        assert!(result.is_err());
    }
}
