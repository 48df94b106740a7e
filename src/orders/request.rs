//! Order Requests

use serde::{Deserialize, Serialize};

use crate::{
    items::{BaseSelection, ItemKey, LineItem, ToppingRef, groups::CartGroup},
    orders::{CheckoutError, PaymentMode},
    prices::Price,
    pricing::PricingPolicy,
};

/// Who is ordering, where to, and how they pay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDetails {
    /// Customer id.
    pub customer_id: String,

    /// Delivery address.
    pub address: String,

    /// Contact phone.
    pub phone: String,

    /// Payment mode.
    pub payment_mode: PaymentMode,

    /// Coupon code, if one was entered.
    pub coupon_code: Option<String>,
}

impl CheckoutDetails {
    /// Creates checkout details paying cash with no coupon.
    pub fn new(
        customer_id: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        CheckoutDetails {
            customer_id: customer_id.into(),
            address: address.into(),
            phone: phone.into(),
            ..CheckoutDetails::default()
        }
    }

    /// Sets the payment mode.
    #[must_use]
    pub fn with_payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }

    /// Sets the coupon code; a blank code counts as none.
    #[must_use]
    pub fn with_coupon_code(mut self, coupon_code: impl Into<String>) -> Self {
        let coupon_code = coupon_code.into();
        self.coupon_code = (!coupon_code.trim().is_empty()).then_some(coupon_code);
        self
    }

    fn validate(&self) -> Result<(), CheckoutError> {
        [
            ("customerId", &self.customer_id),
            ("address", &self.address),
            ("phone", &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(CheckoutError::MissingField(field)))
    }
}

/// One line of an order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product id.
    pub product_id: String,

    /// Product name snapshot.
    pub product_name: String,

    /// Quantity.
    pub quantity: u32,

    /// Base snapshot.
    pub base: BaseSelection,

    /// Topping snapshots.
    pub toppings: Vec<ToppingRef>,

    /// Line key.
    pub key: ItemKey,
}

impl From<&LineItem> for OrderItemRequest {
    fn from(item: &LineItem) -> Self {
        OrderItemRequest {
            product_id: item.product_id().to_string(),
            product_name: item.product_name().to_string(),
            quantity: item.quantity(),
            base: item.base().clone(),
            toppings: item.toppings().to_vec(),
            key: item.key().clone(),
        }
    }
}

/// The order submission payload for one tenant's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Customer id.
    pub customer_id: String,

    /// Tenant the order is placed with.
    pub tenant_id: String,

    /// Delivery address.
    pub address: String,

    /// Contact phone.
    pub phone: String,

    /// Payment mode.
    pub payment_mode: PaymentMode,

    /// Coupon code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// Items subtotal.
    pub sub_total: Price,

    /// Tax.
    pub tax: Price,

    /// Delivery charge.
    pub delivery_charge: Price,

    /// Delivery charge, repeated under the name the checkout page uses.
    pub delivery: Price,

    /// Discount.
    pub discount: Price,

    /// Amount payable.
    pub grand_total: Price,

    /// Lines.
    pub items: Vec<OrderItemRequest>,
}

impl OrderRequest {
    /// Build the payload for one tenant group.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the group is empty or the customer id,
    /// address or phone is blank.
    pub fn for_group(
        group: &CartGroup,
        details: &CheckoutDetails,
        policy: &PricingPolicy,
    ) -> Result<Self, CheckoutError> {
        if group.is_empty() {
            return Err(CheckoutError::EmptyGroup(group.tenant_id().to_string()));
        }

        details.validate()?;

        let totals = policy.totals(group);

        Ok(OrderRequest {
            customer_id: details.customer_id.clone(),
            tenant_id: group.tenant_id().to_string(),
            address: details.address.clone(),
            phone: details.phone.clone(),
            payment_mode: details.payment_mode,
            coupon_code: details.coupon_code.clone(),
            sub_total: totals.subtotal,
            tax: totals.tax,
            delivery_charge: totals.delivery,
            delivery: totals.delivery,
            discount: totals.discount,
            grand_total: totals.grand_total,
            items: group.iter().map(OrderItemRequest::from).collect(),
        })
    }
}
