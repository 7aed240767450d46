//! The order aggregate and its mutation entry points.
//!
//! `Order` keeps its fields private so the totals invariant holds by
//! construction: there is no way to set `total_amount` directly, and the
//! item list can only change through [`Order::replace_items`], which
//! recomputes it. Every entry point fails atomically; on error the order is
//! unchanged.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tally_core::{CustomerRef, Money, OrderId, OrderStatus, PaymentStatus, ProductRef};

use crate::aggregate::compute_total;
use crate::draft::{ItemDraft, OrderDraft};
use crate::error::OrderError;
use crate::lifecycle;
use crate::validate::{validate, validate_items};

/// One line item within an order.
///
/// The unit price is a snapshot taken at order time; later product price
/// changes do not affect it. The line total is derived on demand and never
/// stored, so it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    product: ProductRef,
    quantity: i64,
    unit_price: Money,
}

impl OrderItem {
    /// Build an item from a draft that has already passed validation.
    pub(crate) fn from_draft(draft: ItemDraft) -> Self {
        Self {
            product: draft.product,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
        }
    }

    /// The referenced product.
    #[must_use]
    pub const fn product(&self) -> &ProductRef {
        &self.product
    }

    /// Unit count, at least 1.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price per unit at order time.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Derived line total: `quantity * unit_price`.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Turn the item back into a draft, e.g. to resubmit it through
    /// [`Order::replace_items`].
    #[must_use]
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            product: self.product.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// An accepted order.
///
/// Serializes for output but deliberately does not implement `Deserialize`:
/// an order can only come into existence through [`Order::create`], which is
/// what keeps `total_amount` consistent with the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerRef,
    items: Vec<OrderItem>,
    total_amount: Money,
    status: OrderStatus,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create an order from a draft.
    ///
    /// Validates the draft, computes the total from the items, assigns a
    /// fresh identifier, and starts the lifecycle at
    /// (`Pending`, `Unpaid`) — the initial state is not caller-overridable.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] carrying every validation failure.
    pub fn create(draft: OrderDraft) -> Result<Self, OrderError> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(OrderError::Rejected(errors));
        }

        let items: Vec<OrderItem> = draft.items.into_iter().map(OrderItem::from_draft).collect();
        let total_amount = compute_total(&items);

        Ok(Self {
            id: OrderId::generate(),
            customer: draft.customer,
            items,
            total_amount,
            status: OrderStatus::default(),
            payment_status: PaymentStatus::default(),
            created_at: Utc::now(),
        })
    }

    /// Replace the whole item list.
    ///
    /// Partial line-item patches are not modeled; updates are either a full
    /// replace or status-only. The total is recomputed from the new items;
    /// status and payment status are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Rejected`] if the new list fails validation;
    /// the order is unchanged in that case.
    pub fn replace_items(&mut self, items: Vec<ItemDraft>) -> Result<(), OrderError> {
        let errors = validate_items(&items);
        if !errors.is_empty() {
            return Err(OrderError::Rejected(errors));
        }

        self.items = items.into_iter().map(OrderItem::from_draft).collect();
        self.total_amount = compute_total(&self.items);
        Ok(())
    }

    /// Apply a lifecycle transition to either or both axes.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Transition`] if either requested half is
    /// illegal; neither field is updated in that case.
    pub fn transition(
        &mut self,
        new_status: Option<OrderStatus>,
        new_payment: Option<PaymentStatus>,
    ) -> Result<(), OrderError> {
        let (status, payment) =
            lifecycle::plan(self.status, self.payment_status, new_status, new_payment)?;
        self.status = status;
        self.payment_status = payment;
        Ok(())
    }

    /// Unique identifier, assigned at creation, immutable thereafter.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// The owning customer.
    #[must_use]
    pub const fn customer(&self) -> &CustomerRef {
        &self.customer
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Derived total; always equals the sum of the line totals.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Current fulfillment status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Current payment status.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Creation timestamp, set once.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
