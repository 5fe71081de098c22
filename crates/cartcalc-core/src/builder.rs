//! # Line Item Builder
//!
//! Fluent construction of [`CartLineItem`]s, mostly for tests and fixtures.
//!
//! ```rust
//! use cartcalc_core::CartLineItem;
//!
//! let item = CartLineItem::builder("LAMP-01")
//!     .name("Desk Lamp")
//!     .unit_price_cents(4_500)
//!     .quantity(3)
//!     .unit_weight_kg(1.2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(item.quantity(), 3);
//! ```

use crate::error::ValidationError;
use crate::types::CartLineItem;

/// Builder for [`CartLineItem`].
///
/// Defaults: name = id, price 0, quantity 1, weight 0 kg.
/// Validation runs once, in [`build`](CartLineItemBuilder::build).
#[derive(Debug, Clone)]
#[must_use]
pub struct CartLineItemBuilder {
    id: String,
    name: Option<String>,
    unit_price_cents: i64,
    quantity: i64,
    unit_weight_kg: f64,
}

impl CartLineItemBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        CartLineItemBuilder {
            id: id.into(),
            name: None,
            unit_price_cents: 0,
            quantity: 1,
            unit_weight_kg: 0.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unit_price_cents(mut self, cents: i64) -> Self {
        self.unit_price_cents = cents;
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_weight_kg(mut self, kg: f64) -> Self {
        self.unit_weight_kg = kg;
        self
    }

    pub fn build(self) -> Result<CartLineItem, ValidationError> {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        CartLineItem::new(
            self.id,
            name,
            self.unit_price_cents,
            self.quantity,
            self.unit_weight_kg,
        )
    }
}

impl CartLineItem {
    /// Starts a [`CartLineItemBuilder`] for the given line id.
    pub fn builder(id: impl Into<String>) -> CartLineItemBuilder {
        CartLineItemBuilder::new(id)
    }
}
