//! Error taxonomy for the order domain.
//!
//! Validation failures are data, not control flow: [`validate`] returns every
//! violation in a `Vec<ErrorKind>` so the caller can surface all of them at
//! once. Nothing in this crate is fatal to the process; the caller decides
//! how to present a failure (HTTP status, UI message, retry form).
//!
//! [`validate`]: crate::validate::validate

use serde::Serialize;
use thiserror::Error;

use tally_core::Money;

/// A named validation or transition failure, returned as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The customer reference is absent or blank.
    #[error("customer reference is required")]
    MissingCustomer,

    /// The item list is empty.
    #[error("order must contain at least one item")]
    EmptyItemList,

    /// An item's quantity is below one.
    #[error("item {index}: quantity must be at least 1 (got {quantity})")]
    InvalidQuantity {
        /// Position of the offending item in the submitted list.
        index: usize,
        /// The rejected quantity.
        quantity: i64,
    },

    /// An item's unit price is negative.
    #[error("item {index}: unit price must not be negative (got {price})")]
    InvalidPrice {
        /// Position of the offending item in the submitted list.
        index: usize,
        /// The rejected price.
        price: Money,
    },

    /// The computed order total does not fit in the decimal amount range.
    #[error("order total exceeds the representable amount range")]
    TotalOutOfRange,

    /// A lifecycle transition that the state machine does not permit.
    #[error("illegal state transition from {current} to {requested}")]
    IllegalStateTransition {
        /// The state the entity is in.
        current: String,
        /// The state that was requested.
        requested: String,
    },
}

impl ErrorKind {
    /// Build an [`ErrorKind::IllegalStateTransition`] from any displayable
    /// state pair.
    pub fn illegal_transition(
        current: impl std::fmt::Display,
        requested: impl std::fmt::Display,
    ) -> Self {
        Self::IllegalStateTransition {
            current: current.to_string(),
            requested: requested.to_string(),
        }
    }
}

/// Failure of an order mutation entry point.
///
/// The order an operation was applied to is left unmodified whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Validation rejected the input; every violation is listed.
    #[error("order rejected: {}", join_kinds(.0))]
    Rejected(Vec<ErrorKind>),

    /// A requested lifecycle transition is not permitted.
    #[error(transparent)]
    Transition(#[from] ErrorKind),
}

fn join_kinds(kinds: &[ErrorKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
