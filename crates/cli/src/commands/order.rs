//! Order subcommands

use std::{fs, io, path::PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use pizzeria::orders::{CheckoutDetails, OrderRequest, OrderResponse, PaymentMode};

use crate::{
    commands::{CliError, open_cart},
    config::Config,
    render,
};

/// Order subcommands.
#[derive(Debug, Args)]
pub struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    /// Print the order submission payload for each vendor in the cart.
    Payload(PayloadArgs),

    /// Show tracking progress for an order response document.
    Track {
        /// Path to an order response JSON file
        response: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Payment {
    Cash,
    Card,
}

impl From<Payment> for PaymentMode {
    fn from(payment: Payment) -> Self {
        match payment {
            Payment::Cash => PaymentMode::Cash,
            Payment::Card => PaymentMode::Card,
        }
    }
}

#[derive(Debug, Args)]
struct PayloadArgs {
    /// Customer id
    #[arg(long)]
    customer: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// Contact phone
    #[arg(long)]
    phone: String,

    /// Payment mode
    #[arg(long, value_enum, default_value_t = Payment::Cash)]
    payment: Payment,

    /// Coupon code
    #[arg(long)]
    coupon: Option<String>,

    /// Only build the payload for this tenant
    #[arg(long)]
    tenant: Option<String>,
}

pub(super) fn run(
    config: &Config,
    command: &OrderCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match &command.command {
        OrderSubcommand::Payload(args) => payload(config, args, out),
        OrderSubcommand::Track { response } => {
            let contents = fs::read_to_string(response)?;
            let order: OrderResponse = serde_json::from_str(&contents)?;

            render::write_tracking(out, &order)?;

            Ok(())
        }
    }
}

fn payload(config: &Config, args: &PayloadArgs, out: &mut impl io::Write) -> Result<(), CliError> {
    let cart = open_cart(config);
    let policy = config.pricing.policy()?;

    let mut details = CheckoutDetails::new(&args.customer, &args.address, &args.phone)
        .with_payment_mode(args.payment.into());

    if let Some(coupon) = &args.coupon {
        details = details.with_coupon_code(coupon);
    }

    let requests = match &args.tenant {
        Some(tenant) => {
            let group = cart
                .group(tenant)
                .ok_or_else(|| CliError::TenantNotInCart(tenant.clone()))?;

            vec![OrderRequest::for_group(group, &details, &policy)?]
        }
        None => cart.order_requests(&details, &policy)?,
    };

    serde_json::to_writer_pretty(&mut *out, &requests)?;
    writeln!(out)?;

    Ok(())
}
