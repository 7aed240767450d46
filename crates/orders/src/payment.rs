//! Payment records against an order.
//!
//! A payment is recorded for an order's derived total; callers never supply
//! the amount. Each record tracks one attempt through its own small state
//! machine (Pending -> Completed -> Refunded, with a Failed branch), separate
//! from the order's summary `payment_status` axis: an order with a failed
//! card attempt and a later successful transfer keeps both records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tally_core::{Money, OrderId, PaymentId, PaymentMethod, PaymentState};

use crate::error::ErrorKind;
use crate::order::Order;

/// Whether the payment table permits `from -> to`.
#[must_use]
pub const fn payment_state_transition_allowed(from: PaymentState, to: PaymentState) -> bool {
    use PaymentState::{Completed, Failed, Pending, Refunded};
    matches!(
        (from, to),
        (Pending, Completed) | (Pending, Failed) | (Completed, Refunded)
    )
}

/// One payment attempt recorded against a single order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    id: PaymentId,
    order_id: OrderId,
    amount: Money,
    method: PaymentMethod,
    status: PaymentState,
    recorded_at: DateTime<Utc>,
}

impl Payment {
    /// Record a pending payment for an order's current total.
    #[must_use]
    pub fn record(order: &Order, method: PaymentMethod) -> Self {
        Self {
            id: PaymentId::generate(),
            order_id: order.id(),
            amount: order.total_amount(),
            method,
            status: PaymentState::default(),
            recorded_at: Utc::now(),
        }
    }

    /// Move the payment to a new state.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IllegalStateTransition`] when the move is not in
    /// the table; the payment is unchanged in that case.
    pub fn transition(&mut self, requested: PaymentState) -> Result<(), ErrorKind> {
        if !payment_state_transition_allowed(self.status, requested) {
            return Err(ErrorKind::illegal_transition(self.status, requested));
        }
        self.status = requested;
        Ok(())
    }

    /// Unique identifier.
    #[must_use]
    pub const fn id(&self) -> PaymentId {
        self.id
    }

    /// The order this payment was recorded against.
    #[must_use]
    pub const fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Tendered amount: the order total at record time.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// How the payment was tendered.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Current state.
    #[must_use]
    pub const fn status(&self) -> PaymentState {
        self.status
    }

    /// Record timestamp, set once.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
