//! Immutable result records returned by the engine.
//!
//! All fields are private with read accessors; nothing outside the pricing
//! module can construct or alter a result, so a `PricingResult` in hand is
//! always internally consistent.

use serde::Serialize;
use std::fmt;

use crate::money::Money;
use crate::types::{CartLineItem, ShippingMethod};

// =============================================================================
// Line Item Result
// =============================================================================

/// Per-line echo of the input plus the bulk discount it earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResult {
    id: String,
    name: String,
    unit_price: Money,
    quantity: i64,
    unit_weight_kg: f64,
    line_value: Money,
    bulk_discount: Money,
}

impl LineItemResult {
    pub(crate) fn new(item: &CartLineItem, line_value: Money, bulk_discount: Money) -> Self {
        LineItemResult {
            id: item.id().to_string(),
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            unit_weight_kg: item.unit_weight_kg(),
            line_value,
            bulk_discount,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_weight_kg(&self) -> f64 {
        self.unit_weight_kg
    }

    /// Unit price × quantity, before any discount.
    pub fn line_value(&self) -> Money {
        self.line_value
    }

    pub fn bulk_discount(&self) -> Money {
        self.bulk_discount
    }

    /// Line value less its bulk discount.
    pub fn value_after_bulk(&self) -> Money {
        self.line_value - self.bulk_discount
    }
}

// =============================================================================
// Shipment Result
// =============================================================================

/// The shipping charge and how it was made up.
///
/// Exactly one of three cases produced `total_shipping`:
/// - free shipping: every component and the total are zero
/// - EXPRESS: components are zero, total is the flat fee
/// - otherwise: total = base + weight surcharge + expedited surcharge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResult {
    method: ShippingMethod,
    base_charge: Money,
    weight_surcharge: Money,
    expedited_surcharge: Money,
    is_free_shipping: bool,
    total_shipping: Money,
}

impl ShipmentResult {
    pub(crate) fn free(method: ShippingMethod) -> Self {
        ShipmentResult {
            method,
            base_charge: Money::zero(),
            weight_surcharge: Money::zero(),
            expedited_surcharge: Money::zero(),
            is_free_shipping: true,
            total_shipping: Money::zero(),
        }
    }

    pub(crate) fn flat(method: ShippingMethod, fee: Money) -> Self {
        ShipmentResult {
            method,
            base_charge: Money::zero(),
            weight_surcharge: Money::zero(),
            expedited_surcharge: Money::zero(),
            is_free_shipping: false,
            total_shipping: fee,
        }
    }

    pub(crate) fn charged(
        method: ShippingMethod,
        base_charge: Money,
        weight_surcharge: Money,
        expedited_surcharge: Money,
        total_shipping: Money,
    ) -> Self {
        ShipmentResult {
            method,
            base_charge,
            weight_surcharge,
            expedited_surcharge,
            is_free_shipping: false,
            total_shipping,
        }
    }

    pub fn method(&self) -> ShippingMethod {
        self.method
    }

    pub fn base_charge(&self) -> Money {
        self.base_charge
    }

    pub fn weight_surcharge(&self) -> Money {
        self.weight_surcharge
    }

    pub fn expedited_surcharge(&self) -> Money {
        self.expedited_surcharge
    }

    pub fn is_free_shipping(&self) -> bool {
        self.is_free_shipping
    }

    pub fn total_shipping(&self) -> Money {
        self.total_shipping
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The complete, itemized price of one cart.
///
/// ## Field Relationships
/// ```text
/// original_total      = Σ line_value
/// subtotal_after_bulk = original_total - bulk_discount_total
/// combined_discount   = min(bulk + loyalty, cap)
/// final_total         = original_total - combined_discount
/// grand_total         = final_total + shipment.total_shipping
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    original_total: Money,
    lines: Vec<LineItemResult>,
    bulk_discount_total: Money,
    subtotal_after_bulk: Money,
    loyalty_discount: Money,
    combined_discount: Money,
    is_capped: bool,
    final_total: Money,
    total_weight_kg: f64,
    shipment: ShipmentResult,
    grand_total: Money,
}

/// Everything the assembler needs, gathered from the earlier stages.
pub(crate) struct PricingParts {
    pub original_total: Money,
    pub lines: Vec<LineItemResult>,
    pub bulk_discount_total: Money,
    pub subtotal_after_bulk: Money,
    pub loyalty_discount: Money,
    pub combined_discount: Money,
    pub is_capped: bool,
    pub final_total: Money,
    pub total_weight_kg: f64,
    pub shipment: ShipmentResult,
}

impl PricingResult {
    /// Assembles the result; the only derived field is the grand total.
    pub(crate) fn assemble(parts: PricingParts) -> Option<Self> {
        let grand_total = parts
            .final_total
            .checked_add(parts.shipment.total_shipping())?;

        Some(PricingResult {
            original_total: parts.original_total,
            lines: parts.lines,
            bulk_discount_total: parts.bulk_discount_total,
            subtotal_after_bulk: parts.subtotal_after_bulk,
            loyalty_discount: parts.loyalty_discount,
            combined_discount: parts.combined_discount,
            is_capped: parts.is_capped,
            final_total: parts.final_total,
            total_weight_kg: parts.total_weight_kg,
            shipment: parts.shipment,
            grand_total,
        })
    }

    /// Sum of line values before any discount.
    pub fn original_total(&self) -> Money {
        self.original_total
    }

    pub fn lines(&self) -> &[LineItemResult] {
        &self.lines
    }

    /// Sum of per-line bulk discounts, before the cap.
    pub fn bulk_discount_total(&self) -> Money {
        self.bulk_discount_total
    }

    pub fn subtotal_after_bulk(&self) -> Money {
        self.subtotal_after_bulk
    }

    /// Loyalty discount as computed, before the cap.
    pub fn loyalty_discount(&self) -> Money {
        self.loyalty_discount
    }

    /// Bulk + loyalty after the cap; this is what the customer saves.
    pub fn combined_discount(&self) -> Money {
        self.combined_discount
    }

    pub fn is_capped(&self) -> bool {
        self.is_capped
    }

    /// Product total after the capped discount, before shipping.
    pub fn final_total(&self) -> Money {
        self.final_total
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_kg
    }

    pub fn shipment(&self) -> &ShipmentResult {
        &self.shipment
    }

    pub fn grand_total(&self) -> Money {
        self.grand_total
    }
}

// =============================================================================
// Display
// =============================================================================

/// Itemized breakdown, one figure per line.
///
/// ```text
/// LINE                  QTY        VALUE         BULK           NET
/// DESK-01                 3     $3000.00     -$450.00      $2550.00
/// ------------------------------------------------------------------
/// Original total                                           $3000.00
/// ...
/// ```
impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str =
            "------------------------------------------------------------------";

        writeln!(
            f,
            "{:<20} {:>5} {:>12} {:>12} {:>13}",
            "LINE", "QTY", "VALUE", "BULK", "NET"
        )?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20} {:>5} {:>12} {:>12} {:>13}",
                line.id,
                line.quantity,
                line.line_value.to_string(),
                format!("-{}", line.bulk_discount),
                line.value_after_bulk().to_string(),
            )?;
        }
        writeln!(f, "{}", RULE)?;

        fn row(f: &mut fmt::Formatter<'_>, label: &str, value: String) -> fmt::Result {
            writeln!(f, "{:<52} {:>13}", label, value)
        }

        row(f, "Original total", self.original_total.to_string())?;
        row(f, "Bulk discount", format!("-{}", self.bulk_discount_total))?;
        row(f, "Subtotal after bulk", self.subtotal_after_bulk.to_string())?;
        row(f, "Loyalty discount", format!("-{}", self.loyalty_discount))?;
        let combined_label = if self.is_capped {
            "Combined discount (capped)"
        } else {
            "Combined discount"
        };
        row(f, combined_label, format!("-{}", self.combined_discount))?;
        row(f, "Final total", self.final_total.to_string())?;

        let shipment = &self.shipment;
        let shipping_label = format!("Shipping ({})", shipment.method);
        if shipment.is_free_shipping {
            row(f, &shipping_label, "FREE".to_string())?;
        } else {
            row(f, &shipping_label, shipment.total_shipping.to_string())?;
            if !shipment.base_charge.is_zero() {
                row(f, "  base", shipment.base_charge.to_string())?;
                row(
                    f,
                    &format!("  weight ({:.2} kg)", self.total_weight_kg),
                    shipment.weight_surcharge.to_string(),
                )?;
            }
            if !shipment.expedited_surcharge.is_zero() {
                row(f, "  expedited", shipment.expedited_surcharge.to_string())?;
            }
        }

        writeln!(f, "{}", RULE)?;
        write!(f, "{:<52} {:>13}", "Grand total", self.grand_total.to_string())
    }
}
