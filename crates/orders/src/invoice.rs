//! Invoice issuance against an order.
//!
//! An invoice is always issued for an order's derived total; callers never
//! supply the amount. Its status moves through a small state machine of its
//! own (Draft -> Sent -> Paid, with Overdue and Cancelled branches).

use chrono::{DateTime, Utc};
use serde::Serialize;

use tally_core::{InvoiceId, InvoiceStatus, Money, OrderId};

use crate::error::ErrorKind;
use crate::order::Order;

/// Whether the invoice table permits `from -> to`.
#[must_use]
pub const fn invoice_transition_allowed(from: InvoiceStatus, to: InvoiceStatus) -> bool {
    use InvoiceStatus::{Cancelled, Draft, Overdue, Paid, Sent};
    matches!(
        (from, to),
        (Draft, Sent) | (Sent, Paid) | (Sent, Overdue) | (Overdue, Paid) | (Draft | Sent, Cancelled)
    )
}

/// An invoice raised against a single order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    id: InvoiceId,
    order_id: OrderId,
    amount: Money,
    status: InvoiceStatus,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Issue a draft invoice for an order's current total.
    #[must_use]
    pub fn issue(order: &Order) -> Self {
        Self {
            id: InvoiceId::generate(),
            order_id: order.id(),
            amount: order.total_amount(),
            status: InvoiceStatus::default(),
            issued_at: Utc::now(),
        }
    }

    /// Move the invoice to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IllegalStateTransition`] when the move is not in
    /// the table; the invoice is unchanged in that case.
    pub fn transition(&mut self, requested: InvoiceStatus) -> Result<(), ErrorKind> {
        if !invoice_transition_allowed(self.status, requested) {
            return Err(ErrorKind::illegal_transition(self.status, requested));
        }
        self.status = requested;
        Ok(())
    }

    /// Unique identifier.
    #[must_use]
    pub const fn id(&self) -> InvoiceId {
        self.id
    }

    /// The order this invoice was raised against.
    #[must_use]
    pub const fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Invoiced amount: the order total at issue time.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Issue timestamp, set once.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
