//! Store-backed order handling.
//!
//! `OrderService` is the layer the transport (HTTP handler, CLI, queue
//! consumer — out of scope here) talks to: it loads the prior order from the
//! store, applies a domain operation, and writes back only on success. The
//! caller remains responsible for serializing concurrent mutations to the
//! same order identifier; the service assumes at most one writer per order
//! at a time.

use thiserror::Error;
use tracing::{info, instrument, warn};

use tally_core::{OrderId, OrderStatus, PaymentMethod, PaymentStatus};

use crate::draft::{ItemDraft, OrderDraft};
use crate::error::OrderError;
use crate::invoice::Invoice;
use crate::order::Order;
use crate::payment::Payment;
use crate::store::{OrderStore, StoreError};

/// Failure of a service operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The domain rejected the request.
    #[error(transparent)]
    Domain(#[from] OrderError),

    /// The store could not complete the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Order operations wired to a persistence handle.
///
/// The store is injected by the caller, which keeps its lifecycle explicit:
/// open it at process start, pass it in here, and take it back with
/// [`OrderService::into_store`] at shutdown.
#[derive(Debug)]
pub struct OrderService<S> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Wrap a store handle.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Hand the store back to the caller.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate a draft, build the order, and persist it.
    ///
    /// # Errors
    ///
    /// Returns the collected validation failures, or a store error if the
    /// generated identifier collides (practically impossible with UUIDs).
    #[instrument(skip(self, draft), fields(customer = %draft.customer))]
    pub fn create(&mut self, draft: OrderDraft) -> Result<Order, ServiceError> {
        let order = match Order::create(draft) {
            Ok(order) => order,
            Err(err) => {
                warn!(error = %err, "rejected order draft");
                return Err(err.into());
            }
        };

        self.store.insert(order.clone())?;
        info!(order_id = %order.id(), total = %order.total_amount(), "created order");
        Ok(order)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    pub fn get(&self, id: OrderId) -> Result<Order, ServiceError> {
        Ok(self.store.get(id)?)
    }

    /// All orders, oldest first.
    pub fn list(&self) -> Vec<Order> {
        self.store.list()
    }

    /// Replace an order's item list and persist the recomputed total.
    ///
    /// # Errors
    ///
    /// Returns validation failures or [`StoreError::NotFound`]; the stored
    /// order is untouched on failure.
    #[instrument(skip(self, items), fields(order_id = %id))]
    pub fn replace_items(
        &mut self,
        id: OrderId,
        items: Vec<ItemDraft>,
    ) -> Result<Order, ServiceError> {
        let mut order = self.store.get(id)?;

        if let Err(err) = order.replace_items(items) {
            warn!(error = %err, "rejected item replacement");
            return Err(err.into());
        }

        self.store.update(order.clone())?;
        info!(total = %order.total_amount(), "replaced order items");
        Ok(order)
    }

    /// Apply a lifecycle transition and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Transition`] or [`StoreError::NotFound`]; the
    /// stored order is untouched on failure.
    #[instrument(skip(self), fields(order_id = %id))]
    pub fn transition(
        &mut self,
        id: OrderId,
        new_status: Option<OrderStatus>,
        new_payment: Option<PaymentStatus>,
    ) -> Result<Order, ServiceError> {
        let mut order = self.store.get(id)?;

        if let Err(err) = order.transition(new_status, new_payment) {
            warn!(error = %err, "rejected transition");
            return Err(err.into());
        }

        self.store.update(order.clone())?;
        info!(
            status = %order.status(),
            payment_status = %order.payment_status(),
            "transitioned order"
        );
        Ok(order)
    }

    /// Issue a draft invoice for an order's current total.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    pub fn issue_invoice(&self, id: OrderId) -> Result<Invoice, ServiceError> {
        let order = self.store.get(id)?;
        let invoice = Invoice::issue(&order);
        info!(order_id = %id, invoice_id = %invoice.id(), amount = %invoice.amount(), "issued invoice");
        Ok(invoice)
    }

    /// Record a pending payment for an order's current total.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    pub fn record_payment(
        &self,
        id: OrderId,
        method: PaymentMethod,
    ) -> Result<Payment, ServiceError> {
        let order = self.store.get(id)?;
        let payment = Payment::record(&order, method);
        info!(order_id = %id, payment_id = %payment.id(), amount = %payment.amount(), "recorded payment");
        Ok(payment)
    }

    /// Delete an order entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    #[instrument(skip(self), fields(order_id = %id))]
    pub fn delete(&mut self, id: OrderId) -> Result<(), ServiceError> {
        self.store.remove(id)?;
        info!("deleted order");
        Ok(())
    }
}
