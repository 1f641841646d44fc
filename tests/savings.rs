//! 절감액 계산 회귀 테스트. 기본 폼 값(50대, 4000h, 0.15/kWh) 기준 시나리오.
use led_savings_calculator::lighting::{
    co2_for_fixtures, compute, compute_with, trees_for_co2, CalculationInput, Catalog,
    PaybackFormula, SavingsError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

fn input(tube: &str) -> CalculationInput {
    CalculationInput {
        fixture_count: 50,
        annual_hours: 4000,
        price_per_kwh: 0.15,
        tube_type: tube.into(),
        fixture_unit_price: 800.0,
        extra_cost: 1000.0,
    }
}

#[test]
fn t8_58w_reference_scenario() {
    let res = compute(&input("T8_58W")).expect("T8_58W");
    assert_eq!(res.led_type, "LED_20W");
    assert_close("old_power_w", res.old_power_w, 140.0, 1e-12);
    assert_close("new_power_w", res.new_power_w, 40.0, 1e-12);
    assert_close("old_energy_kwh", res.old_energy_kwh, 560.0, 1e-9);
    assert_close("new_energy_kwh", res.new_energy_kwh, 160.0, 1e-9);
    assert_close("old_annual_cost", res.old_annual_cost, 4200.0, 1e-6);
    assert_close("new_annual_cost", res.new_annual_cost, 1200.0, 1e-6);
    assert_close("annual_savings", res.annual_savings, 3000.0, 1e-6);
    assert_close("purchase", res.total_fixture_purchase_cost, 40_000.0, 1e-9);
    assert_close("total", res.total_project_cost, 41_000.0, 1e-9);
    assert_close("payback", res.payback_period_years, 42_200.0 / 4_200.0, 1e-9);
    assert!((res.payback_period_years - 10.05).abs() < 0.01);
    assert_close("co2", res.co2_saved_tons, 2.5, 1e-12);
    assert_close("trees", res.trees_equivalent, 114.84, 0.01);
    assert_eq!(res.trees_equivalent.round(), 115.0);
}

#[test]
fn t8_36w_reference_scenario() {
    let res = compute(&input("T8_36W")).expect("T8_36W");
    assert_eq!(res.led_type, "LED_18W");
    assert_close("old_power_w", res.old_power_w, 86.0, 1e-12);
    assert_close("old_energy_kwh", res.old_energy_kwh, 344.0, 1e-9);
    assert_close("old_annual_cost", res.old_annual_cost, 2580.0, 1e-6);
    assert_close("new_power_w", res.new_power_w, 36.0, 1e-12);
    assert_close("new_energy_kwh", res.new_energy_kwh, 144.0, 1e-9);
    assert_close("new_annual_cost", res.new_annual_cost, 1080.0, 1e-6);
    assert_close("annual_savings", res.annual_savings, 1500.0, 1e-6);
}

#[test]
fn t5_types_map_to_their_leds() {
    let r49 = compute(&input("T5_49W")).expect("T5_49W");
    assert_eq!(r49.led_type, "LED_25W");
    assert_close("T5_49W old W", r49.old_power_w, 108.0, 1e-12);
    assert_close("T5_49W new W", r49.new_power_w, 50.0, 1e-12);

    let r28 = compute(&input("T5_28W")).expect("T5_28W");
    assert_eq!(r28.led_type, "LED_16W");
    assert_close("T5_28W old W", r28.old_power_w, 64.0, 1e-12);
    assert_close("T5_28W new W", r28.new_power_w, 32.0, 1e-12);
}

#[test]
fn unknown_tube_type_is_rejected() {
    for bad in ["LED_99W", "LED_20W", "t8_58w", ""] {
        assert_eq!(
            compute(&input(bad)),
            Err(SavingsError::InvalidTubeType(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn zero_hours_fails_loudly() {
    let mut inp = input("T8_58W");
    inp.annual_hours = 0;
    assert_eq!(compute(&inp), Err(SavingsError::DivisionByZero));
}

#[test]
fn savings_non_negative_and_totals_consistent() {
    let catalog = Catalog::builtin();
    for tube in catalog.tube_types() {
        for &(fixtures, hours, price, unit, extra) in &[
            (1u32, 1u32, 0.01, 1.0, 0.0),
            (7, 365, 1.37, 499.5, 12.25),
            (250, 8760, 2.2, 1200.0, 50_000.0),
        ] {
            let inp = CalculationInput {
                fixture_count: fixtures,
                annual_hours: hours,
                price_per_kwh: price,
                tube_type: tube.clone(),
                fixture_unit_price: unit,
                extra_cost: extra,
            };
            let res = compute(&inp).expect("valid input");
            assert!(res.annual_savings >= 0.0, "{tube}: {}", res.annual_savings);
            assert_eq!(
                res.total_project_cost,
                res.total_fixture_purchase_cost + extra
            );
            assert_close(
                "trees",
                res.trees_equivalent,
                res.co2_saved_tons * 1000.0 / 21.77,
                1e-9,
            );
        }
    }
}

#[test]
fn higher_price_means_more_savings_and_faster_payback() {
    let mut prev: Option<(f64, f64)> = None;
    for step in 1..=20 {
        let mut inp = input("T8_58W");
        inp.price_per_kwh = 0.05 * f64::from(step);
        let res = compute(&inp).expect("calc");
        if let Some((savings, payback)) = prev {
            assert!(res.annual_savings > savings, "savings not increasing at step {step}");
            assert!(res.payback_period_years < payback, "payback not decreasing at step {step}");
        }
        prev = Some((res.annual_savings, res.payback_period_years));
    }
}

#[test]
fn payback_without_extra_cost_ignores_extra() {
    let with = compute_with(Catalog::builtin(), PaybackFormula::WithExtraCost, &input("T8_58W"))
        .expect("with");
    let without =
        compute_with(Catalog::builtin(), PaybackFormula::WithoutExtraCost, &input("T8_58W"))
            .expect("without");
    assert_close("with", with.payback_period_years, 42_200.0 / 4_200.0, 1e-9);
    assert_close("without", without.payback_period_years, 41_200.0 / 4_200.0, 1e-9);
    // 총비용은 회수기간 식과 무관하다.
    assert_eq!(with.total_project_cost, without.total_project_cost);
}

#[test]
fn co2_and_trees_as_separate_steps() {
    assert_close("co2 for 50", co2_for_fixtures(50), 2.5, 1e-12);
    assert_close("co2 for 1", co2_for_fixtures(1), 0.05, 1e-12);
    assert_close("trees for 2.177 t", trees_for_co2(2.177), 100.0, 1e-9);
}
