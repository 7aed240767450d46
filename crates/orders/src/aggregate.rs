//! Order total computation.
//!
//! The total is always derived from the line items, never accepted from a
//! caller. At least one of the upstream implementations this replaces took
//! `total` straight from the request body, which let totals and line items
//! drift apart; here the recomputed value unconditionally wins.

use tally_core::Money;

use crate::order::OrderItem;

/// Compute the total amount for a list of items.
///
/// Each line total is recomputed from quantity and unit price (a stored line
/// total is never trusted) and the results are summed in sequence order with
/// exact decimal arithmetic. Addition is commutative, so ordering does not
/// change the numeric result, but iterating in sequence keeps output
/// formatting deterministic.
///
/// Items only exist after validation, which rejects any list whose total
/// would not fit in the decimal range, so the accumulation here cannot
/// overflow.
#[must_use]
pub fn compute_total(items: &[OrderItem]) -> Money {
    items.iter().map(OrderItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::draft::ItemDraft;

    fn items(specs: &[(i64, i64)]) -> Vec<OrderItem> {
        specs
            .iter()
            .map(|&(quantity, cents)| {
                OrderItem::from_draft(ItemDraft::new(
                    "PROD-1",
                    quantity,
                    Money::from_cents(cents),
                ))
            })
            .collect()
    }

    #[test]
    fn test_sums_line_totals_exactly() {
        // 3 x 19.99 + 1 x 0.02 = 59.99 -- a classic f64 drift case.
        let total = compute_total(&items(&[(3, 1999), (1, 2)]));
        assert_eq!(total, Money::from_cents(5999));
    }

    #[test]
    fn test_empty_list_sums_to_zero() {
        assert_eq!(compute_total(&[]), Money::ZERO);
    }

    #[test]
    fn test_order_of_items_does_not_change_total() {
        let forward = compute_total(&items(&[(2, 1050), (7, 333), (1, 1)]));
        let backward = compute_total(&items(&[(1, 1), (7, 333), (2, 1050)]));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_large_quantities_stay_exact() {
        let total = compute_total(&items(&[(1_000_000, 1)]));
        assert_eq!(total, Money::from_cents(1_000_000));
    }
}
