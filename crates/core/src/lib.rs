//! Tally Core - Shared types library.
//!
//! This crate provides the common types used across all Tally components:
//! - `orders` - Order domain engine (validation, totals, lifecycle)
//! - `integration-tests` - Cross-crate workflow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe references, money, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
