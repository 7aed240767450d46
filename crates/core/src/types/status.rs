//! Status enums for orders and invoices.
//!
//! These are plain value types; which transitions between them are legal is
//! decided by the lifecycle rules in the `tally-orders` crate.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Just created, awaiting confirmation.
    #[default]
    Pending,
    /// Accepted and queued for fulfillment.
    Confirmed,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer. Terminal.
    Delivered,
    /// Abandoned before shipment. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Whether no further status transition is permitted from this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Order payment status.
///
/// Independent axis from [`OrderStatus`], but not orthogonal: shipment
/// requires payment to have settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// No payment attempt recorded yet.
    #[default]
    Unpaid,
    /// A payment attempt is in flight.
    Pending,
    /// Payment settled.
    Paid,
    /// The in-flight attempt failed. Terminal.
    Failed,
    /// A settled payment was returned. Terminal.
    Refunded,
}

impl PaymentStatus {
    /// Whether no further payment transition is permitted from this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Refunded)
    }
}

/// Status of a single recorded payment attempt.
///
/// Distinct from [`PaymentStatus`], which summarizes the order's payment
/// axis; one order can accumulate several attempts (a failed card followed
/// by a successful transfer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    /// Recorded, outcome not yet known.
    #[default]
    Pending,
    /// The attempt settled. May still be refunded.
    Completed,
    /// The attempt did not settle. Terminal.
    Failed,
    /// A settled attempt was returned. Terminal.
    Refunded,
}

impl PaymentState {
    /// Whether no further transition is permitted from this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Failed | Self::Refunded)
    }
}

/// How a payment was tendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    BankTransfer,
    Paypal,
}

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Issued but not yet sent to the customer.
    #[default]
    Draft,
    /// Sent and awaiting payment.
    Sent,
    /// Settled. Terminal.
    Paid,
    /// Past its due date, still collectible.
    Overdue,
    /// Withdrawn before settlement. Terminal.
    Cancelled,
}

impl InvoiceStatus {
    /// Whether no further invoice transition is permitted from this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }
}

macro_rules! impl_status_strings {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $text),)+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", stringify!($ty), ": {}"), s)),
                }
            }
        }
    };
}

impl_status_strings!(OrderStatus {
    Pending => "PENDING",
    Confirmed => "CONFIRMED",
    Shipped => "SHIPPED",
    Delivered => "DELIVERED",
    Cancelled => "CANCELLED",
});

impl_status_strings!(PaymentStatus {
    Unpaid => "UNPAID",
    Pending => "PENDING",
    Paid => "PAID",
    Failed => "FAILED",
    Refunded => "REFUNDED",
});

impl_status_strings!(PaymentState {
    Pending => "PENDING",
    Completed => "COMPLETED",
    Failed => "FAILED",
    Refunded => "REFUNDED",
});

impl_status_strings!(PaymentMethod {
    CreditCard => "CREDIT_CARD",
    DebitCard => "DEBIT_CARD",
    BankTransfer => "BANK_TRANSFER",
    Paypal => "PAYPAL",
});

impl_status_strings!(InvoiceStatus {
    Draft => "DRAFT",
    Sent => "SENT",
    Paid => "PAID",
    Overdue => "OVERDUE",
    Cancelled => "CANCELLED",
});

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_lifecycle_state() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
        assert_eq!(PaymentState::default(), PaymentState::Pending);
        assert_eq!(InvoiceStatus::default(), InvoiceStatus::Draft);
    }

    #[test]
    fn test_serde_uses_wire_casing() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");

        let parsed: PaymentStatus = serde_json::from_str("\"UNPAID\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Unpaid);

        let method = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(method, "\"BANK_TRANSFER\"");
    }

    #[test]
    fn test_display_and_from_str_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let text = status.to_string();
            assert_eq!(text.parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("SHIPPING".parse::<OrderStatus>().is_err());
        assert!("paid".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());

        assert!(PaymentStatus::Refunded.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
        assert!(!PaymentStatus::Paid.is_terminal());

        assert!(PaymentState::Failed.is_terminal());
        assert!(PaymentState::Refunded.is_terminal());
        assert!(!PaymentState::Completed.is_terminal());
    }
}
