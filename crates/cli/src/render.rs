//! Table rendering for cart and order output.

use std::io;

use pizzeria::{
    cart::CartStore,
    items::LineItem,
    orders::OrderResponse,
    prices::Price,
    pricing::{PricingPolicy, TenantTotals},
    snapshot::SnapshotStore,
    tenants::TenantDirectory,
};
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::commands::CliError;

/// Write every vendor's lines and totals.
pub(crate) fn write_cart<S: SnapshotStore>(
    out: &mut impl io::Write,
    cart: &CartStore<S>,
    directory: &TenantDirectory,
    policy: &PricingPolicy,
) -> Result<(), CliError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    }

    let currency = policy.currency();

    for summary in cart.summaries(directory, policy) {
        writeln!(
            out,
            "\n{} ({})",
            summary.tenant_name,
            summary.group.tenant_id()
        )?;

        let mut builder = Builder::default();

        builder.push_record(["#", "Key", "Item", "Size", "Toppings", "Qty", "Unit", "Total"]);

        for (index, item) in summary.group.iter().enumerate() {
            push_item_row(&mut builder, index, item, currency)?;
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(5..8), Alignment::right());

        writeln!(out, "{table}")?;

        write_totals(out, &summary.totals, currency)?;
    }

    writeln!(out, "\nItems in cart: {}", cart.total_quantity())?;

    Ok(())
}

fn push_item_row(
    builder: &mut Builder,
    index: usize,
    item: &LineItem,
    currency: &'static Currency,
) -> Result<(), CliError> {
    let toppings = item
        .toppings()
        .iter()
        .map(|topping| topping.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    builder.push_record([
        index.to_string(),
        item.key().to_string(),
        item.product_name().to_string(),
        item.base().name.clone(),
        toppings,
        item.quantity().to_string(),
        money(item.unit_price(), currency)?,
        money(item.line_total(), currency)?,
    ]);

    Ok(())
}

fn write_totals(
    out: &mut impl io::Write,
    totals: &TenantTotals,
    currency: &'static Currency,
) -> Result<(), CliError> {
    let delivery = if totals.delivery.is_zero() {
        "Free".to_string()
    } else {
        money(totals.delivery, currency)?
    };

    let rows = [
        ("Subtotal", money(totals.subtotal, currency)?),
        ("Delivery", delivery),
        ("Tax", money(totals.tax, currency)?),
        ("Discount", format!("- {}", money(totals.discount, currency)?)),
        ("Total", money(totals.grand_total, currency)?),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);

    for (label, value) in rows {
        writeln!(out, " {label:<label_width$}  {value:>value_width$}")?;
    }

    Ok(())
}

/// Write the tracking steps and amounts of a placed order.
pub(crate) fn write_tracking(
    out: &mut impl io::Write,
    order: &OrderResponse,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Order {} ({}, {} {})",
        order.id, order.order_status, order.payment_mode, order_payment(order)
    )?;

    let mut builder = Builder::default();

    builder.push_record(["Step", "State"]);

    for (step, state) in order.order_status.tracking() {
        builder.push_record([step.label.to_string(), state.to_string()]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")?;
    writeln!(out, " Items:       {}", order.item_count())?;
    writeln!(out, " Grand total: {}", order.amounts.grand_total)?;

    Ok(())
}

fn order_payment(order: &OrderResponse) -> &'static str {
    if order.awaits_payment() {
        "awaiting payment"
    } else {
        "no payment due"
    }
}

fn money(price: Price, currency: &'static Currency) -> Result<String, CliError> {
    Ok(price.to_money(currency)?.to_string())
}
