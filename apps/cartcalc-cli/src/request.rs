//! Cart request parsing.
//!
//! ## Request Format
//! ```json
//! {
//!   "customer": { "tenureYears": 3 },
//!   "method": "EXPEDITED",
//!   "items": [
//!     { "id": "MUG-01", "name": "Ceramic Mug", "unitPriceCents": 1250,
//!       "quantity": 4, "unitWeightKg": 0.35 }
//!   ]
//! }
//! ```
//!
//! `customer` defaults to a guest, `method` to STANDARD, `name` to the id
//! and `unitWeightKg` to 0. Line items are validated while parsing.

use std::io::Read;

use cartcalc_core::{CartLineItem, CustomerProfile, ShippingMethod};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CartRequest {
    #[serde(default)]
    pub customer: CustomerProfile,
    #[serde(default)]
    pub method: ShippingMethod,
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

impl CartRequest {
    pub fn from_json(content: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read cart request: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cart request: {0}")]
    Json(#[from] serde_json::Error),
}
