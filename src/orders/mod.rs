//! Orders
//!
//! Checkout payloads built from cart groups, the order records the backend
//! returns, and the status tracking shown on an order's page.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod request;
pub mod response;
pub mod tracking;

pub use request::{CheckoutDetails, OrderItemRequest, OrderRequest};
pub use response::{OrderAmounts, OrderResponse, OrderedItem, OrderedTopping};
pub use tracking::{StepState, TRACKING_STEPS, TrackingStep};

/// Errors building a checkout payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The tenant has nothing in the cart.
    #[error("cart for tenant {0} is empty")]
    EmptyGroup(String),

    /// A required checkout field is blank.
    #[error("checkout field {0} is required")]
    MissingField(&'static str),
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMode {
    /// Cash on delivery.
    #[default]
    Cash,

    /// Card through the payment gateway.
    Card,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Card => "CARD",
        })
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Paid in full.
    Paid,

    /// Not paid.
    Unpaid,

    /// Nothing to pay.
    NoPaymentRequired,

    /// Awaiting the payment gateway.
    Pending,
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Placed, not yet verified.
    Pending,

    /// Verified by the vendor.
    Verified,

    /// Accepted by the vendor.
    Confirmed,

    /// In the kitchen.
    Preparing,

    /// With a rider.
    OutForDelivery,

    /// Handed to the customer.
    Delivered,

    /// Cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Verified => "verified",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn enums_use_wire_names() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentMode::Card)?, r#""CARD""#);
        assert_eq!(
            serde_json::to_string(&PaymentStatus::NoPaymentRequired)?,
            r#""NO_PAYMENT_REQUIRED""#
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery)?,
            r#""out-for-delivery""#
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>(r#""cancelled""#)?,
            OrderStatus::Cancelled
        );

        Ok(())
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(PaymentMode::Cash.to_string(), "CASH");
        assert_eq!(OrderStatus::OutForDelivery.to_string(), "out-for-delivery");
    }
}
