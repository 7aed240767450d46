//! Strict input schema for order create/replace requests.
//!
//! Request bodies deserialize into these types before any business rule
//! runs. `deny_unknown_fields` makes the schema closed: a client that sends
//! a `total` or a per-item `line_total` gets a deserialization error instead
//! of a silently-discarded (or worse, silently-trusted) field. Totals are
//! always recomputed server-side from quantity and unit price.
//!
//! Structural problems (missing fields, wrong types, unknown fields) are
//! serde's job and fail deserialization; business rules (blank customer,
//! zero quantity, negative price) are [`validate`]'s job and are collected
//! as data. The two layers stay independent.
//!
//! [`validate`]: crate::validate::validate

use serde::{Deserialize, Serialize};

use tally_core::{CustomerRef, Money, ProductRef};

/// A proposed line item: product reference, quantity, and the unit price
/// snapshot the caller resolved at order time.
///
/// The line total is never part of the schema; it is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDraft {
    /// Identifier of the product, opaque to this crate.
    pub product: ProductRef,
    /// Requested unit count. Validated to be at least 1.
    pub quantity: i64,
    /// Price per unit at order time. Validated to be non-negative.
    pub unit_price: Money,
}

impl ItemDraft {
    /// Convenience constructor.
    pub fn new(product: impl Into<ProductRef>, quantity: i64, unit_price: Money) -> Self {
        Self {
            product: product.into(),
            quantity,
            unit_price,
        }
    }
}

/// A proposed order: the owning customer and at least one line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderDraft {
    /// Identifier of the owning customer, opaque to this crate.
    pub customer: CustomerRef,
    /// Proposed line items, in display order.
    pub items: Vec<ItemDraft>,
}

impl OrderDraft {
    /// Convenience constructor.
    pub fn new(customer: impl Into<CustomerRef>, items: Vec<ItemDraft>) -> Self {
        Self {
            customer: customer.into(),
            items,
        }
    }
}
