//! Business-rule validation for proposed orders.
//!
//! Pure functions: no I/O, no mutation of the candidate. All violations are
//! collected and returned together so a caller can surface every problem at
//! once instead of one per round trip.

use tally_core::Money;

use crate::draft::{ItemDraft, OrderDraft};
use crate::error::ErrorKind;

/// Check a proposed order. Returns an empty list when it is acceptable.
#[must_use]
pub fn validate(draft: &OrderDraft) -> Vec<ErrorKind> {
    let mut errors = Vec::new();

    if draft.customer.as_str().trim().is_empty() {
        errors.push(ErrorKind::MissingCustomer);
    }

    errors.extend(validate_items(&draft.items));
    errors
}

/// Check a proposed item list on its own (used by item replacement, where
/// the customer is already fixed).
#[must_use]
pub fn validate_items(items: &[ItemDraft]) -> Vec<ErrorKind> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ErrorKind::EmptyItemList);
    }

    // Checked accumulation: amounts are bounded by the decimal range, and a
    // draft whose total cannot be represented must be rejected here rather
    // than panic later in aggregation.
    let mut running_total = Some(Money::ZERO);

    for (index, item) in items.iter().enumerate() {
        let mut item_ok = true;

        if item.quantity < 1 {
            errors.push(ErrorKind::InvalidQuantity {
                index,
                quantity: item.quantity,
            });
            item_ok = false;
        }
        if item.unit_price.is_negative() {
            errors.push(ErrorKind::InvalidPrice {
                index,
                price: item.unit_price,
            });
            item_ok = false;
        }

        if item_ok {
            running_total = running_total.and_then(|total| {
                item.unit_price
                    .checked_times(item.quantity)
                    .and_then(|line| total.checked_add(line))
            });
        }
    }

    if running_total.is_none() {
        errors.push(ErrorKind::TotalOutOfRange);
    }

    errors
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn item(quantity: i64, cents: i64) -> ItemDraft {
        ItemDraft::new("PROD-1", quantity, Money::from_cents(cents))
    }

    #[test]
    fn test_accepts_well_formed_order() {
        let draft = OrderDraft::new("CUST-1", vec![item(2, 1000)]);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_blank_customer() {
        for customer in ["", "   "] {
            let draft = OrderDraft::new(customer, vec![item(1, 100)]);
            assert_eq!(validate(&draft), vec![ErrorKind::MissingCustomer]);
        }
    }

    #[test]
    fn test_empty_item_list() {
        let draft = OrderDraft::new("CUST-1", vec![]);
        assert_eq!(validate(&draft), vec![ErrorKind::EmptyItemList]);
    }

    #[test]
    fn test_collects_multiple_violations_per_item() {
        // quantity=0 and unit_price=-1 on the same item must both be
        // reported, not short-circuited.
        let draft = OrderDraft::new("CUST-1", vec![item(0, -100)]);
        assert_eq!(
            validate(&draft),
            vec![
                ErrorKind::InvalidQuantity {
                    index: 0,
                    quantity: 0,
                },
                ErrorKind::InvalidPrice {
                    index: 0,
                    price: Money::from_cents(-100),
                },
            ]
        );
    }

    #[test]
    fn test_collects_violations_across_items_and_fields() {
        let draft = OrderDraft::new("", vec![item(1, 100), item(-2, 100), item(1, -50)]);
        let errors = validate(&draft);
        assert_eq!(
            errors,
            vec![
                ErrorKind::MissingCustomer,
                ErrorKind::InvalidQuantity {
                    index: 1,
                    quantity: -2,
                },
                ErrorKind::InvalidPrice {
                    index: 2,
                    price: Money::from_cents(-50),
                },
            ]
        );
    }

    #[test]
    fn test_rejects_total_beyond_representable_range() {
        // Schema-valid extremes must come back as an error, never a panic.
        let draft = OrderDraft::new(
            "CUST-1",
            vec![ItemDraft::new("PROD-1", i64::MAX, Money::new(Decimal::MAX))],
        );
        assert_eq!(validate(&draft), vec![ErrorKind::TotalOutOfRange]);
    }

    #[test]
    fn test_rejects_overflow_across_items() {
        // Each line fits on its own; the sum does not.
        let big = ItemDraft::new("PROD-1", 1, Money::new(Decimal::MAX));
        let draft = OrderDraft::new("CUST-1", vec![big.clone(), big]);
        assert_eq!(validate(&draft), vec![ErrorKind::TotalOutOfRange]);
    }

    #[test]
    fn test_invalid_items_do_not_also_report_overflow() {
        // A negative quantity is its own violation; the unrepresentable
        // product it would imply is not reported on top of it.
        let draft = OrderDraft::new(
            "CUST-1",
            vec![ItemDraft::new("PROD-1", -1, Money::new(Decimal::MAX))],
        );
        assert_eq!(
            validate(&draft),
            vec![ErrorKind::InvalidQuantity {
                index: 0,
                quantity: -1,
            }]
        );
    }

    #[test]
    fn test_zero_price_is_acceptable() {
        // Free items are legal; only negative prices are rejected.
        let draft = OrderDraft::new("CUST-1", vec![item(1, 0)]);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_validation_does_not_mutate_candidate() {
        let draft = OrderDraft::new("CUST-1", vec![item(0, -100)]);
        let before = draft.clone();
        let _ = validate(&draft);
        assert_eq!(draft, before);
    }
}
