//! # Domain Types
//!
//! Input types for the pricing engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CartLineItem   │   │ CustomerProfile │   │ ShippingMethod  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (SKU)       │   │  tenure_years   │   │  Standard       │       │
//! │  │  name           │   └─────────────────┘   │  Expedited      │       │
//! │  │  unit_price     │                         │  Express        │       │
//! │  │  quantity       │   ┌─────────────────┐   └─────────────────┘       │
//! │  │  unit_weight_kg │   │      Rate       │                             │
//! │  └─────────────────┘   │  bps (u32)      │                             │
//! │                        │  1500 = 15%     │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All inputs are immutable once constructed. A `CartLineItem` is only
//! obtainable through validation, so holding one is proof it is well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_line_id, validate_price_cents, validate_quantity, validate_weight_kg,
};

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every rule rate used by the engine
/// (15%, 5%, 30%) is an exact integer and never a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
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
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One SKU's contribution to a cart.
///
/// Fields are private: construct with [`CartLineItem::new`], the
/// [`builder`](CartLineItem::builder), or by deserializing, all of which run
/// the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCartLineItem", rename_all = "camelCase")]
pub struct CartLineItem {
    id: String,
    name: String,
    #[serde(rename = "unitPriceCents")]
    unit_price: Money,
    quantity: i64,
    unit_weight_kg: f64,
}

impl CartLineItem {
    /// Creates a validated line item.
    ///
    /// ## Errors
    /// Returns a [`ValidationError`] for an empty id, a negative price, a
    /// quantity below one, or a negative / non-finite weight. The id is kept
    /// exactly as given; a blank name falls back to the id.
    ///
    /// ## Example
    /// ```rust
    /// use cartcalc_core::CartLineItem;
    ///
    /// let mug = CartLineItem::new("MUG-01", "Ceramic Mug", 1250, 4, 0.35).unwrap();
    /// assert_eq!(mug.line_value().unwrap().cents(), 5000);
    ///
    /// assert!(CartLineItem::new("MUG-01", "Ceramic Mug", 1250, 0, 0.35).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price_cents: i64,
        quantity: i64,
        unit_weight_kg: f64,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();

        validate_line_id(&id)?;
        validate_price_cents(unit_price_cents)?;
        validate_quantity(quantity)?;
        validate_weight_kg(unit_weight_kg)?;

        let name = match name.trim() {
            "" => id.clone(),
            trimmed => trimmed.to_string(),
        };

        Ok(CartLineItem {
            id,
            name,
            unit_price: Money::from_cents(unit_price_cents),
            quantity,
            unit_weight_kg,
        })
    }

    /// Line identifier, unique within a cart.
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

    /// Unit price × quantity, or `None` if that overflows i64 cents.
    pub fn line_value(&self) -> Option<Money> {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Unit weight × quantity in kilograms, or `None` if that is not finite.
    pub fn line_weight_kg(&self) -> Option<f64> {
        let kg = self.unit_weight_kg * self.quantity as f64;
        kg.is_finite().then_some(kg)
    }
}

/// Wire shape of a line item before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCartLineItem {
    id: String,
    #[serde(default)]
    name: Option<String>,
    unit_price_cents: i64,
    quantity: i64,
    #[serde(default)]
    unit_weight_kg: f64,
}

impl TryFrom<RawCartLineItem> for CartLineItem {
    type Error = ValidationError;

    fn try_from(raw: RawCartLineItem) -> Result<Self, Self::Error> {
        let name = raw.name.unwrap_or_else(|| raw.id.clone());
        CartLineItem::new(
            raw.id,
            name,
            raw.unit_price_cents,
            raw.quantity,
            raw.unit_weight_kg,
        )
    }
}

// =============================================================================
// Customer Profile
// =============================================================================

/// The customer attributes the engine reads. Only tenure matters today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Whole years as a customer.
    #[serde(default)]
    pub tenure_years: u32,
}

impl CustomerProfile {
    pub const fn new(tenure_years: u32) -> Self {
        CustomerProfile { tenure_years }
    }

    /// A customer with no tenure.
    pub const fn guest() -> Self {
        CustomerProfile { tenure_years: 0 }
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// How the order ships.
///
/// ## Method Behavior
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  STANDARD   base + weight                    free over threshold       │
/// │  EXPEDITED  base + weight + % of original    free over threshold       │
/// │  EXPRESS    flat fee                         never free                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Expedited,
    Express,
}

impl ShippingMethod {
    /// Every method, in display order.
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Standard,
        ShippingMethod::Expedited,
        ShippingMethod::Express,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "STANDARD",
            ShippingMethod::Expedited => "EXPEDITED",
            ShippingMethod::Express => "EXPRESS",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STANDARD" => Ok(ShippingMethod::Standard),
            "EXPEDITED" => Ok(ShippingMethod::Expedited),
            "EXPRESS" => Ok(ShippingMethod::Express),
            _ => Err(CoreError::UnknownShippingMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for ShippingMethod {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
