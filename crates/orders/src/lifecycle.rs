//! Lifecycle state machine over order status and payment status.
//!
//! The two axes are independent tables, plus one cross-axis rule: an order
//! may only move to `Shipped` or `Delivered` once its payment status is
//! `Paid`. The upstream implementations all omitted that rule; it is
//! deliberately enforced here. The gate checks the payment status that
//! results from the same call, so "mark paid and ship" works as one atomic
//! request.
//!
//! ```text
//! status:   Pending -> Confirmed -> Shipped -> Delivered
//!                 \        |
//!                  \       v
//!                   -> Cancelled
//!
//! payment:  Unpaid -> Pending -> Paid -> Refunded
//!                        |
//!                        v
//!                      Failed
//! ```

use tally_core::{OrderStatus, PaymentStatus};

use crate::error::ErrorKind;

/// Whether the fulfillment axis permits `from -> to`.
#[must_use]
pub const fn status_transition_allowed(from: OrderStatus, to: OrderStatus) -> bool {
    use OrderStatus::{Cancelled, Confirmed, Delivered, Pending, Shipped};
    matches!(
        (from, to),
        (Pending, Confirmed)
            | (Confirmed, Shipped)
            | (Shipped, Delivered)
            | (Pending | Confirmed, Cancelled)
    )
}

/// Whether the payment axis permits `from -> to`.
#[must_use]
pub const fn payment_transition_allowed(from: PaymentStatus, to: PaymentStatus) -> bool {
    use PaymentStatus::{Failed, Paid, Pending, Refunded, Unpaid};
    matches!(
        (from, to),
        (Unpaid, Pending) | (Pending, Paid) | (Pending, Failed) | (Paid, Refunded)
    )
}

/// Resolve a transition request against the current state.
///
/// Either axis may be omitted (`None` keeps the current value). Both axes
/// are checked before anything is decided, so a request with one illegal
/// half changes nothing.
///
/// # Errors
///
/// Returns [`ErrorKind::IllegalStateTransition`] naming the current and
/// requested states when a per-axis table forbids the move, or when the
/// requested fulfillment state is `Shipped`/`Delivered` and the resulting
/// payment status is not `Paid`.
pub fn plan(
    current_status: OrderStatus,
    current_payment: PaymentStatus,
    new_status: Option<OrderStatus>,
    new_payment: Option<PaymentStatus>,
) -> Result<(OrderStatus, PaymentStatus), ErrorKind> {
    let next_payment = match new_payment {
        Some(requested) => {
            if !payment_transition_allowed(current_payment, requested) {
                return Err(ErrorKind::illegal_transition(current_payment, requested));
            }
            requested
        }
        None => current_payment,
    };

    let next_status = match new_status {
        Some(requested) => {
            if !status_transition_allowed(current_status, requested) {
                return Err(ErrorKind::illegal_transition(current_status, requested));
            }
            if matches!(requested, OrderStatus::Shipped | OrderStatus::Delivered)
                && next_payment != PaymentStatus::Paid
            {
                return Err(ErrorKind::illegal_transition(
                    format_args!("{current_status} ({next_payment})"),
                    requested,
                ));
            }
            requested
        }
        None => current_status,
    };

    Ok((next_status, next_payment))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_through_both_axes() {
        use OrderStatus as S;
        use PaymentStatus as P;

        let mut state = (S::Pending, P::Unpaid);
        for (status, payment) in [
            (None, Some(P::Pending)),
            (Some(S::Confirmed), None),
            (None, Some(P::Paid)),
            (Some(S::Shipped), None),
            (Some(S::Delivered), None),
        ] {
            state = plan(state.0, state.1, status, payment).unwrap();
        }
        assert_eq!(state, (S::Delivered, P::Paid));
    }

    #[test]
    fn test_terminal_states_have_no_exit() {
        use OrderStatus as S;

        for from in [S::Delivered, S::Cancelled] {
            for to in [S::Pending, S::Confirmed, S::Shipped, S::Delivered, S::Cancelled] {
                assert!(!status_transition_allowed(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_shipped_orders_are_not_cancellable() {
        assert!(!status_transition_allowed(
            OrderStatus::Shipped,
            OrderStatus::Cancelled
        ));
        assert!(!status_transition_allowed(
            OrderStatus::Delivered,
            OrderStatus::Cancelled
        ));
    }

    #[test]
    fn test_no_status_skipping() {
        assert!(!status_transition_allowed(
            OrderStatus::Pending,
            OrderStatus::Shipped
        ));
        assert!(!status_transition_allowed(
            OrderStatus::Confirmed,
            OrderStatus::Delivered
        ));
    }

    #[test]
    fn test_failed_only_reachable_from_pending_payment() {
        use PaymentStatus as P;

        assert!(payment_transition_allowed(P::Pending, P::Failed));
        for from in [P::Unpaid, P::Paid, P::Failed, P::Refunded] {
            assert!(!payment_transition_allowed(from, P::Failed), "{from}");
        }
    }

    #[test]
    fn test_shipment_requires_settled_payment() {
        let err = plan(
            OrderStatus::Confirmed,
            PaymentStatus::Pending,
            Some(OrderStatus::Shipped),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "illegal state transition from CONFIRMED (PENDING) to SHIPPED"
        );
    }

    #[test]
    fn test_pay_and_ship_in_one_atomic_request() {
        // The gate sees the payment status resulting from this same call.
        let next = plan(
            OrderStatus::Confirmed,
            PaymentStatus::Pending,
            Some(OrderStatus::Shipped),
            Some(PaymentStatus::Paid),
        )
        .unwrap();
        assert_eq!(next, (OrderStatus::Shipped, PaymentStatus::Paid));
    }

    #[test]
    fn test_one_illegal_axis_fails_the_whole_request() {
        // Payment half is legal, status half is not; nothing may change.
        let err = plan(
            OrderStatus::Delivered,
            PaymentStatus::Pending,
            Some(OrderStatus::Cancelled),
            Some(PaymentStatus::Paid),
        )
        .unwrap_err();
        assert!(matches!(err, ErrorKind::IllegalStateTransition { .. }));
    }

    #[test]
    fn test_noop_request_keeps_current_state() {
        let next = plan(
            OrderStatus::Confirmed,
            PaymentStatus::Paid,
            None,
            None,
        )
        .unwrap();
        assert_eq!(next, (OrderStatus::Confirmed, PaymentStatus::Paid));
    }

    #[test]
    fn test_self_transition_is_illegal() {
        // Requesting the state the order is already in is not in the table.
        assert!(
            plan(
                OrderStatus::Pending,
                PaymentStatus::Unpaid,
                Some(OrderStatus::Pending),
                None,
            )
            .is_err()
        );
    }
}
