//! Cross-crate workflow tests for Tally.
//!
//! Unit tests live next to the code they cover; the `tests/` directory here
//! exercises whole flows (create -> mutate -> transition -> invoice) through
//! [`tally_orders::OrderService`] with the in-memory store.
//!
//! Run with: `cargo test -p tally-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use tally_core::Money;
use tally_orders::{InMemoryOrderStore, ItemDraft, OrderDraft, OrderService};

/// Install a log subscriber honoring `RUST_LOG`, for debugging test runs.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A service over a fresh in-memory store.
#[must_use]
pub fn fresh_service() -> OrderService<InMemoryOrderStore> {
    init_tracing();
    OrderService::new(InMemoryOrderStore::new())
}

/// Shorthand line-item draft with the price in cents.
#[must_use]
pub fn item(product: &str, quantity: i64, cents: i64) -> ItemDraft {
    ItemDraft::new(product, quantity, Money::from_cents(cents))
}

/// Shorthand order draft.
#[must_use]
pub fn draft(customer: &str, items: Vec<ItemDraft>) -> OrderDraft {
    OrderDraft::new(customer, items)
}
