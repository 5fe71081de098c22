//! End-to-end pricing scenarios with hand-checked figures.

use cartcalc_core::{
    calculate, CartLineItem, CoreError, CustomerProfile, Money, PricingEngine, PricingPolicy,
    ShippingMethod,
};

fn line(id: &str, price: i64, qty: i64, weight: f64) -> CartLineItem {
    CartLineItem::builder(id)
        .unit_price_cents(price)
        .quantity(qty)
        .unit_weight_kg(weight)
        .build()
        .unwrap()
}

#[test]
fn bulk_order_ships_free_on_standard() {
    let cart = vec![line("CHAIR", 100_000, 3, 0.0)];
    let result = calculate(&cart, &CustomerProfile::new(0), ShippingMethod::Standard).unwrap();

    assert_eq!(result.original_total().cents(), 300_000);
    assert_eq!(result.bulk_discount_total().cents(), 45_000);
    assert_eq!(result.loyalty_discount(), Money::zero());
    assert!(!result.is_capped());
    assert_eq!(result.final_total().cents(), 255_000);
    assert!(result.shipment().is_free_shipping());
    assert_eq!(result.shipment().total_shipping(), Money::zero());
    assert_eq!(result.grand_total().cents(), 255_000);
}

#[test]
fn small_order_pays_expedited_surcharge() {
    let cart = vec![line("LAMP", 5_000, 1, 0.0)];
    let result = calculate(&cart, &CustomerProfile::new(0), ShippingMethod::Expedited).unwrap();

    assert_eq!(result.original_total().cents(), 5_000);
    assert_eq!(result.bulk_discount_total(), Money::zero());
    assert_eq!(result.final_total().cents(), 5_000);

    let shipment = result.shipment();
    assert!(!shipment.is_free_shipping());
    assert_eq!(shipment.expedited_surcharge().cents(), 750);
    assert_eq!(shipment.base_charge().cents(), 700);
    assert_eq!(shipment.weight_surcharge(), Money::zero());
    assert_eq!(shipment.total_shipping().cents(), 1_450);
    assert_eq!(result.grand_total().cents(), 6_450);
}

#[test]
fn express_ignores_weight_and_discounts() {
    let cart = vec![line("ANVIL", 10_000, 5, 10.0)];

    for tenure in [0, 5] {
        let result =
            calculate(&cart, &CustomerProfile::new(tenure), ShippingMethod::Express).unwrap();
        assert!((result.total_weight_kg() - 50.0).abs() < 1e-9);
        assert_eq!(result.shipment().total_shipping().cents(), 2_500);
        assert_eq!(result.shipment().base_charge(), Money::zero());
        assert_eq!(result.shipment().weight_surcharge(), Money::zero());
        assert_eq!(result.shipment().expedited_surcharge(), Money::zero());
        assert!(!result.shipment().is_free_shipping());
        assert_eq!(
            result.grand_total(),
            result.final_total() + Money::from_cents(2_500)
        );
    }
}

#[test]
fn mixed_cart_with_loyalty_and_weight() {
    // MUG: 4 × 1_250 = 5_000, bulk 750
    // TEA: 2 × 899   = 1_798, no bulk
    // original 6_798, after bulk 6_048, loyalty round(302.4) = 302
    // combined 1_052, final 5_746
    // weight 4 × 0.35 + 2 × 0.1 = 1.6 kg → 320
    let cart = vec![line("MUG", 1_250, 4, 0.35), line("TEA", 899, 2, 0.1)];
    let result = calculate(&cart, &CustomerProfile::new(4), ShippingMethod::Standard).unwrap();

    assert_eq!(result.original_total().cents(), 6_798);
    assert_eq!(result.lines()[0].bulk_discount().cents(), 750);
    assert_eq!(result.lines()[1].bulk_discount(), Money::zero());
    assert_eq!(result.subtotal_after_bulk().cents(), 6_048);
    assert_eq!(result.loyalty_discount().cents(), 302);
    assert_eq!(result.combined_discount().cents(), 1_052);
    assert_eq!(result.final_total().cents(), 5_746);
    assert_eq!(result.shipment().weight_surcharge().cents(), 320);
    assert_eq!(result.shipment().total_shipping().cents(), 1_020);
    assert_eq!(result.grand_total().cents(), 6_766);
}

#[test]
fn threshold_is_strict() {
    let at = calculate(
        &[line("A", 10_000, 1, 0.0)],
        &CustomerProfile::guest(),
        ShippingMethod::Standard,
    )
    .unwrap();
    assert!(!at.shipment().is_free_shipping());
    assert_eq!(at.grand_total().cents(), 10_700);

    let above = calculate(
        &[line("A", 10_001, 1, 0.0)],
        &CustomerProfile::guest(),
        ShippingMethod::Standard,
    )
    .unwrap();
    assert!(above.shipment().is_free_shipping());
    assert_eq!(above.grand_total().cents(), 10_001);
}

#[test]
fn custom_policy_changes_rules() {
    let policy: PricingPolicy = serde_json::from_str(
        r#"{ "bulk_min_quantity": 2, "express_flat_cents": 1999 }"#,
    )
    .unwrap();
    let engine = PricingEngine::new(policy).unwrap();

    let result = engine
        .calculate(
            &[line("A", 1_000, 2, 0.0)],
            &CustomerProfile::guest(),
            ShippingMethod::Express,
        )
        .unwrap();
    assert_eq!(result.bulk_discount_total().cents(), 300);
    assert_eq!(result.shipment().total_shipping().cents(), 1_999);
}

#[test]
fn overflowing_cart_fails_without_partial_result() {
    let cart = vec![
        line("A", i64::MAX / 2, 1, 0.0),
        line("B", i64::MAX / 2, 1, 0.0),
        line("C", 10, 1, 0.0),
    ];
    let err = calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Standard).unwrap_err();
    assert!(matches!(err, CoreError::AmountOverflow { .. }));
}

#[test]
fn overflowing_weight_fails_even_when_weight_is_unused() {
    let cart = vec![line("LEAD", 100, 2, f64::MAX)];
    for method in [ShippingMethod::Express, ShippingMethod::Standard] {
        let err = calculate(&cart, &CustomerProfile::guest(), method).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { operation: "line weight" }));
    }

    let cart = vec![line("A", 100, 1, f64::MAX), line("B", 100, 1, f64::MAX)];
    let err = calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Express).unwrap_err();
    assert!(matches!(err, CoreError::AmountOverflow { operation: "total weight" }));
}

#[test]
fn free_form_ids_and_names_price_normally() {
    let cart = vec![
        CartLineItem::new("sku.1", "", 5_000, 1, 0.0).unwrap(),
        CartLineItem::new("Desk Lamp", "Desk Lamp", 2_000, 3, 0.5).unwrap(),
        CartLineItem::new("SKU/42", "Cable", 300, 1, 0.0).unwrap(),
    ];
    let result = calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Standard).unwrap();

    let ids: Vec<_> = result.lines().iter().map(|l| l.id()).collect();
    assert_eq!(ids, ["sku.1", "Desk Lamp", "SKU/42"]);
    assert_eq!(result.lines()[0].name(), "sku.1");

    // Desk Lamp: 6_000 less 900 bulk
    assert_eq!(result.original_total().cents(), 11_300);
    assert_eq!(result.final_total().cents(), 10_400);
    assert!(result.shipment().is_free_shipping());
    assert_eq!(result.grand_total().cents(), 10_400);
}

#[test]
fn identical_calls_give_identical_results() {
    let cart = vec![line("MUG", 1_250, 4, 0.35), line("TEA", 899, 2, 0.1)];
    let customer = CustomerProfile::new(3);

    let first = calculate(&cart, &customer, ShippingMethod::Expedited).unwrap();
    let second = calculate(&cart, &customer, ShippingMethod::Expedited).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(PricingEngine::default());
    let cart = vec![line("A", 3_000, 3, 1.0)];
    let expected = engine
        .calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Standard)
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            let cart = cart.clone();
            std::thread::spawn(move || {
                engine
                    .calculate(&cart, &CustomerProfile::guest(), ShippingMethod::Standard)
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
