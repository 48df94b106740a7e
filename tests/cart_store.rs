//! Integration tests for the cart store against the storefront catalog set.
//!
//! Candidates are resolved from `fixtures/catalog/storefront.yml`:
//!
//! - `margherita` (t1): small 100, medium 150, large 200
//! - `farmhouse` (t1): medium 220, large 300
//! - `garlic-bread` (t1): regular 50, no toppings
//! - `pepperoni` (t2): small 180, medium 260
//! - toppings: olives 20, jalapeno 10, paneer 35, extra-cheese 42.5

use testresult::TestResult;

use pizzeria::{
    cart::{AddOutcome, CartStore, RestoreOutcome},
    fixtures::CatalogFixture,
    items::{BaseSelection, LineItem, ToppingRef, groups::CartGroup},
    prices::Price,
    pricing::PricingPolicy,
    snapshot::{MemorySnapshotStore, SnapshotStore},
};

fn toppings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

fn assert_invariants(cart: &CartStore<impl SnapshotStore>) {
    for group in cart.groups() {
        assert!(!group.is_empty(), "group {} is empty", group.tenant_id());

        let mut keys: Vec<&str> = group.iter().map(|item| item.key().as_str()).collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), before, "duplicate key in {}", group.tenant_id());
        assert!(group.iter().all(|item| item.quantity() >= 1));
        assert!(group.iter().all(|item| !item.key().is_empty()));
    }
}

#[test]
fn key_is_independent_of_topping_order() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;

    let first = fixture.candidate(
        "margherita",
        Some("medium"),
        &toppings(&["olives", "jalapeno"]),
    )?;
    let second = fixture.candidate(
        "margherita",
        Some("medium"),
        &toppings(&["jalapeno", "olives"]),
    )?;

    assert_eq!(first.derive_key(), second.derive_key());
    assert_eq!(first.derive_key().as_str(), "margherita|medium|jalapeno,olives");

    Ok(())
}

#[test]
fn duplicate_add_reports_and_leaves_cart_unchanged() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    let first = cart.add_item(fixture.candidate("margherita", None, &toppings(&["olives"]))?);
    let second = cart.add_item(fixture.candidate("margherita", None, &toppings(&["olives"]))?);

    assert!(matches!(first, AddOutcome::Added { .. }));
    assert!(matches!(
        second,
        AddOutcome::Duplicate { ref key } if key.as_str() == "margherita|medium|olives"
    ));
    assert_eq!(cart.total_quantity(), 1);
    assert_eq!(cart.group("t1").map(CartGroup::len), Some(1));

    assert_invariants(&cart);

    Ok(())
}

#[test]
fn invariants_hold_across_a_session() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    let margherita = cart
        .add_item(fixture.candidate("margherita", Some("large"), &toppings(&["paneer"]))?)
        .key()
        .clone();
    cart.add_item(fixture.candidate("farmhouse", None, &[])?);
    cart.add_item(fixture.candidate("garlic-bread", None, &[])?);
    let pepperoni = cart
        .add_item(fixture.candidate("pepperoni", Some("small"), &[])?)
        .key()
        .clone();
    cart.add_item(fixture.candidate("margherita", Some("large"), &toppings(&["paneer"]))?);

    assert_invariants(&cart);

    cart.increment_quantity(margherita.as_str());
    cart.increment_quantity(margherita.as_str());
    cart.decrement_quantity(margherita.as_str());
    cart.decrement_quantity(pepperoni.as_str());
    cart.remove_item("t1", 1);
    cart.remove_item("t1", 10);
    cart.decrement_quantity("not-a-key");

    assert_invariants(&cart);

    assert!(cart.group("t2").is_none());
    assert!(!cart.is_multi_tenant());
    assert_eq!(cart.find(margherita.as_str()).map(LineItem::quantity), Some(2));
    assert_eq!(cart.total_quantity(), 3);

    Ok(())
}

#[test]
fn decrementing_to_zero_never_leaves_a_zero_quantity() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    let key = cart.add_item(fixture.candidate("pepperoni", None, &[])?).key().clone();

    assert!(cart.decrement_quantity(key.as_str()));

    assert!(cart.find(key.as_str()).is_none());
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn clearing_one_tenant_leaves_the_other() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    cart.add_item(fixture.candidate("margherita", None, &[])?);
    cart.add_item(fixture.candidate("pepperoni", None, &toppings(&["olives"]))?);

    assert_eq!(cart.groups().len(), 2);
    assert!(cart.is_multi_tenant());

    let untouched = cart.group("t2").cloned();

    assert!(cart.clear_tenant("t1"));

    assert!(cart.group("t1").is_none());
    assert_eq!(cart.group("t2").cloned(), untouched);

    Ok(())
}

#[test]
fn worked_example_totals() {
    let mut cart: CartStore = CartStore::default();

    cart.add_item(
        LineItem::new("P1", "t1", BaseSelection::new("medium", Price::new(100)))
            .with_topping(ToppingRef::new("A", "A", Price::new(20)))
            .with_topping(ToppingRef::new("B", "B", Price::new(10)))
            .with_quantity(2),
    );
    cart.add_item(LineItem::new("P2", "t1", BaseSelection::new("medium", Price::new(50))));

    let totals = cart.tenant_totals("t1", &PricingPolicy::default());

    assert_eq!(totals.map(|t| t.subtotal), Some(Price::new(310)));
    assert_eq!(totals.map(|t| t.tax), Some(Price::new(16)));
    assert_eq!(totals.map(|t| t.delivery), Some(Price::new(40)));
    assert_eq!(totals.map(|t| t.grand_total), Some(Price::new(366)));
    assert_eq!(cart.tenant_totals("t2", &PricingPolicy::default()), None);
}

#[test]
fn snapshot_round_trip_reproduces_state() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    cart.clear_all();
    let key = cart
        .add_item(fixture.candidate("margherita", None, &toppings(&["extra-cheese", "olives"]))?)
        .key()
        .clone();
    cart.add_item(fixture.candidate("pepperoni", Some("small"), &[])?);
    cart.increment_quantity(key.as_str());

    let snapshot = cart.snapshot_store().value().map(ToString::to_string);
    let mut restored =
        CartStore::new(MemorySnapshotStore::with_value(snapshot.unwrap_or_default()));

    assert_eq!(
        restored.restore_from_snapshot(),
        RestoreOutcome::Restored { groups: 2, items: 2 }
    );
    assert_eq!(restored.groups(), cart.groups());

    Ok(())
}

#[test]
fn product_variants_are_listed_across_groups() -> TestResult {
    let fixture = CatalogFixture::from_set("storefront")?;
    let mut cart: CartStore = CartStore::default();

    cart.add_item(fixture.candidate("margherita", Some("small"), &[])?);
    cart.add_item(fixture.candidate("margherita", Some("large"), &toppings(&["jalapeno"]))?);
    cart.add_item(fixture.candidate("farmhouse", None, &[])?);

    let keys: Vec<&str> = cart
        .items_for_product("margherita")
        .map(|item| item.key().as_str())
        .collect();

    assert_eq!(keys, ["margherita|small|", "margherita|large|jalapeno"]);

    Ok(())
}
