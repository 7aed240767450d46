//! Tally Orders - the order domain engine.
//!
//! Everything in this crate is pure, synchronous computation over in-memory
//! values: no network I/O, no locking, no persistence technology. The calling
//! system is responsible for serializing concurrent mutations to the same
//! order (at most one writer per order at a time).
//!
//! # Flow
//!
//! A create/update request arrives as an [`OrderDraft`] (strict boundary
//! schema), is checked by [`validate`], its total is recomputed by
//! [`compute_total`], and the lifecycle rules in [`lifecycle`] govern every
//! status change. The resulting [`Order`] can be kept in any [`OrderStore`];
//! [`OrderService`] wires a store handle to the domain operations.
//!
//! # Modules
//!
//! - [`draft`] - Strict input schema for create/replace requests
//! - [`validate`] - Business-rule validation, errors collected as data
//! - [`aggregate`] - Order total computation
//! - [`lifecycle`] - Status/payment state machine
//! - [`order`] - The order aggregate and its mutation entry points
//! - [`invoice`] - Invoice issuance against an order
//! - [`payment`] - Payment records against an order
//! - [`store`] - Persistence seam and in-memory reference store
//! - [`service`] - Store-backed request handling

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod draft;
pub mod error;
pub mod invoice;
pub mod lifecycle;
pub mod order;
pub mod payment;
pub mod service;
pub mod store;
pub mod validate;

pub use aggregate::compute_total;
pub use draft::{ItemDraft, OrderDraft};
pub use error::{ErrorKind, OrderError};
pub use invoice::Invoice;
pub use order::{Order, OrderItem};
pub use payment::Payment;
pub use service::{OrderService, ServiceError};
pub use store::{InMemoryOrderStore, OrderStore, StoreError};
pub use validate::{validate, validate_items};
