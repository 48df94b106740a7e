//! Order Responses

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    items::BaseSelection,
    orders::{OrderStatus, PaymentMode, PaymentStatus},
    prices::Price,
};

/// Amounts recorded on a placed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAmounts {
    /// Items subtotal.
    pub sub_total: Price,

    /// Tax.
    pub tax: Price,

    /// Delivery charge.
    pub delivery_charge: Price,

    /// Discount.
    pub discount: Price,

    /// Amount payable.
    pub grand_total: Price,
}

/// A topping on a placed order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedTopping {
    /// Topping id.
    pub id: String,

    /// Price charged.
    pub price: Price,
}

/// A line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItem {
    /// Product id.
    pub product_id: String,

    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Quantity.
    pub quantity: u32,

    /// Base charged.
    pub base: BaseSelection,

    /// Toppings charged.
    #[serde(default)]
    pub toppings: Vec<OrderedTopping>,

    /// Line total as the backend computed it.
    pub item_total: Price,
}

/// A placed order as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Order id.
    pub id: String,

    /// Customer id.
    pub customer_id: String,

    /// Delivery address.
    pub address: String,

    /// Contact phone.
    pub phone: String,

    /// Payment mode.
    pub payment_mode: PaymentMode,

    /// Payment state.
    pub payment_status: PaymentStatus,

    /// Coupon applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// Recorded amounts.
    pub amounts: OrderAmounts,

    /// Lines.
    pub items: Vec<OrderedItem>,

    /// Fulfilment state.
    pub order_status: OrderStatus,

    /// Tenant the order was placed with.
    pub tenant_id: String,

    /// When the order was placed.
    pub created_at: Timestamp,

    /// When the order last changed.
    pub updated_at: Timestamp,
}

impl OrderResponse {
    /// Sum of quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Check if the order still needs a card payment.
    #[must_use]
    pub fn awaits_payment(&self) -> bool {
        self.payment_mode == PaymentMode::Card
            && matches!(
                self.payment_status,
                PaymentStatus::Pending | PaymentStatus::Unpaid
            )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const ORDER: &str = r#"{
        "id": "o1",
        "customerId": "c1",
        "address": "221B Baker Street",
        "phone": "9999999999",
        "paymentMode": "CARD",
        "paymentStatus": "PENDING",
        "amounts": { "subTotal": 310, "tax": 16, "deliveryCharge": 40, "discount": 0, "grandTotal": 366 },
        "items": [
            {
                "productId": "P1",
                "productName": "Margherita",
                "quantity": 2,
                "base": { "name": "medium", "price": 100 },
                "toppings": [{ "id": "A", "price": 20 }, { "id": "B", "price": 10 }],
                "itemTotal": 260
            },
            { "productId": "P2", "quantity": 1, "base": { "name": "small", "price": 50 }, "itemTotal": 50 }
        ],
        "orderStatus": "preparing",
        "tenantId": "t1",
        "createdAt": "2025-01-15T12:30:00Z",
        "updatedAt": "2025-01-15T12:45:10.250Z"
    }"#;

    #[test]
    fn deserializes_order() -> TestResult {
        let order: OrderResponse = serde_json::from_str(ORDER)?;

        assert_eq!(order.order_status, OrderStatus::Preparing);
        assert_eq!(order.amounts.grand_total, Price::new(366));
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.items.get(1).and_then(|item| item.product_name.as_deref()), None);
        assert!(order.created_at < order.updated_at);
        assert!(order.awaits_payment());

        Ok(())
    }
}
