//! Persistence seam for orders.
//!
//! The domain has no knowledge of the storage format; it only needs
//! something that keeps orders by identifier. Real deployments implement
//! [`OrderStore`] over their database of choice. [`InMemoryOrderStore`] is
//! the reference implementation, used by tests and embeddable directly.
//!
//! A store is created explicitly by the caller and passed into
//! [`OrderService`](crate::service::OrderService) — there is no module-scope
//! singleton client, and the caller controls open/close lifecycle.

use std::collections::HashMap;

use thiserror::Error;

use tally_core::OrderId;

use crate::order::Order;

/// Errors from a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No order exists under the given identifier.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// An order already exists under the given identifier.
    #[error("order {0} already exists")]
    Duplicate(OrderId),
}

/// Keyed storage for orders.
pub trait OrderStore {
    /// Add a new order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the identifier is already taken.
    fn insert(&mut self, order: Order) -> Result<(), StoreError>;

    /// Fetch an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such order exists.
    fn get(&self, id: OrderId) -> Result<Order, StoreError>;

    /// Overwrite an existing order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such order exists.
    fn update(&mut self, order: Order) -> Result<(), StoreError>;

    /// Remove an order entirely. No soft-delete: the record is gone.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such order exists.
    fn remove(&mut self, id: OrderId) -> Result<Order, StoreError>;

    /// All orders, oldest first.
    fn list(&self) -> Vec<Order>;
}

/// Hash-map-backed store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: HashMap<OrderId, Order>,
}

impl InMemoryOrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the store holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&mut self, order: Order) -> Result<(), StoreError> {
        let id = order.id();
        if self.orders.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        self.orders.insert(id, order);
        Ok(())
    }

    fn get(&self, id: OrderId) -> Result<Order, StoreError> {
        self.orders.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update(&mut self, order: Order) -> Result<(), StoreError> {
        let id = order.id();
        match self.orders.get_mut(&id) {
            Some(slot) => {
                *slot = order;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn remove(&mut self, id: OrderId) -> Result<Order, StoreError> {
        self.orders.remove(&id).ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.values().cloned().collect();
        // HashMap iteration order is arbitrary; sort for deterministic output.
        orders.sort_by_key(|order| (order.created_at(), order.id().as_uuid()));
        orders
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tally_core::Money;

    use super::*;
    use crate::draft::{ItemDraft, OrderDraft};

    fn order() -> Order {
        Order::create(OrderDraft::new(
            "CUST-1",
            vec![ItemDraft::new("PROD-1", 1, Money::from_cents(100))],
        ))
        .unwrap()
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = InMemoryOrderStore::new();
        let order = order();
        let id = order.id();

        store.insert(order.clone()).unwrap();
        assert_eq!(store.get(id).unwrap(), order);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = InMemoryOrderStore::new();
        let order = order();
        store.insert(order.clone()).unwrap();

        assert_eq!(
            store.insert(order.clone()),
            Err(StoreError::Duplicate(order.id()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_requires_existing_order() {
        let mut store = InMemoryOrderStore::new();
        let order = order();
        assert_eq!(
            store.update(order.clone()),
            Err(StoreError::NotFound(order.id()))
        );
    }

    #[test]
    fn test_remove_is_permanent() {
        let mut store = InMemoryOrderStore::new();
        let order = order();
        let id = order.id();
        store.insert(order).unwrap();

        store.remove(id).unwrap();
        assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_is_deterministic() {
        let mut store = InMemoryOrderStore::new();
        let orders = [order(), order(), order()];
        for order in &orders {
            store.insert(order.clone()).unwrap();
        }

        let a = store.list();
        let b = store.list();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }
}
