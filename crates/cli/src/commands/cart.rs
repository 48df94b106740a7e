//! Cart subcommands

use std::io;

use clap::{Args, Subcommand};
use pizzeria::{
    cart::{AddOutcome, CartStore},
    items::LineItem,
    snapshot::SnapshotStore,
};

use crate::{
    commands::{CliError, open_cart},
    config::Config,
    render,
};

/// Cart subcommands.
#[derive(Debug, Args)]
pub struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show every vendor's items and totals.
    Show,

    /// Add a product to its vendor's cart.
    Add(AddArgs),

    /// Increase a line's quantity by one.
    Inc {
        /// Line key
        key: String,
    },

    /// Decrease a line's quantity by one, removing it at one.
    Dec {
        /// Line key
        key: String,
    },

    /// Remove a line by its position in a vendor's cart.
    Remove {
        /// Tenant id
        tenant: String,

        /// Zero-based line position
        index: usize,
    },

    /// Empty the cart, or one vendor's part of it.
    Clear {
        /// Only clear this tenant
        #[arg(long)]
        tenant: Option<String>,
    },
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    product: String,

    /// Size; the product's default size when omitted
    #[arg(short, long)]
    size: Option<String>,

    /// Topping id, repeatable
    #[arg(short, long = "topping")]
    toppings: Vec<String>,
}

pub(super) fn run(
    config: &Config,
    command: &CartCommand,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut cart = open_cart(config);

    match &command.command {
        CartSubcommand::Show => {
            let catalog = config.fixtures.load()?;
            let policy = config.pricing.policy()?;

            render::write_cart(out, &cart, &catalog.directory(), &policy)?;
        }
        CartSubcommand::Add(args) => {
            let catalog = config.fixtures.load()?;
            let candidate = catalog.candidate(&args.product, args.size.as_deref(), &args.toppings)?;

            let outcome = match catalog.tenant(candidate.tenant_id()) {
                Ok(tenant) => cart.add_item_for(tenant, candidate),
                Err(_) => cart.add_item(candidate),
            };

            match outcome {
                AddOutcome::Added { key } => writeln!(out, "added {key}")?,
                AddOutcome::Duplicate { key } => {
                    writeln!(out, "already in cart: {key} (use `cart inc {key}` to add another)")?;
                }
            }
        }
        CartSubcommand::Inc { key } => {
            if cart.increment_quantity(key) {
                writeln!(out, "{key}: {}", quantity(&cart, key))?;
            } else {
                writeln!(out, "no item {key}")?;
            }
        }
        CartSubcommand::Dec { key } => {
            if cart.decrement_quantity(key) {
                writeln!(out, "{key}: {}", quantity(&cart, key))?;
            } else {
                writeln!(out, "no item {key}")?;
            }
        }
        CartSubcommand::Remove { tenant, index } => match cart.remove_item(tenant, *index) {
            Some(item) => writeln!(out, "removed {}", item.key())?,
            None => writeln!(out, "no item at {tenant}[{index}]")?,
        },
        CartSubcommand::Clear { tenant: Some(tenant) } => {
            if cart.clear_tenant(tenant) {
                writeln!(out, "cleared {tenant}")?;
            } else {
                writeln!(out, "nothing in the cart for {tenant}")?;
            }
        }
        CartSubcommand::Clear { tenant: None } => {
            cart.clear_all();

            writeln!(out, "cleared cart")?;
        }
    }

    Ok(())
}

fn quantity<S: SnapshotStore>(cart: &CartStore<S>, key: &str) -> u32 {
    cart.find(key).map_or(0, LineItem::quantity)
}
