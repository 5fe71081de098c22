//! # cartcalc-core: Pure Pricing Engine
//!
//! Computes a deterministic, auditable price for a shopping cart: bulk and
//! loyalty discounts, a global discount cap, and a shipping charge. Given a
//! cart, a customer, and a shipping method it returns a fully itemized
//! breakdown with no side effects and no hidden state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartCalc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cartcalc-cli (host)                          │   │
//! │  │    cart.json ──► policy.toml ──► engine ──► JSON / text         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartcalc-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ discounts │  │   rules   │  │   │
//! │  │   │ Shipping  │  │   Rate    │  │ shipping  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs: line items, customer profile, shipping method, rates
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The engine and its stages
//! - [`policy`] - Rule constants as configuration
//! - [`builder`] - Fluent line item construction
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output, byte for byte
//! 2. **No I/O**: Files, environment, and log subscribers belong to the host
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Round Once**: Each percentage is rounded where derived, never again
//! 5. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cartcalc_core::{calculate, CartLineItem, CustomerProfile, ShippingMethod};
//!
//! let cart = vec![CartLineItem::new("LAMP-01", "Desk Lamp", 5_000, 1, 0.0).unwrap()];
//! let result = calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Expedited).unwrap();
//!
//! assert_eq!(result.shipment().expedited_surcharge().cents(), 750);
//! assert_eq!(result.shipment().total_shipping().cents(), 1_450);
//! assert_eq!(result.grand_total().cents(), 6_450);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod money;
pub mod policy;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use builder::CartLineItemBuilder;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use policy::PricingPolicy;
pub use pricing::{
    calculate, LineItemResult, PricingEngine, PricingResult, ShipmentResult,
};
pub use types::*;
