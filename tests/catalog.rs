//! 교체 조합 테이블 검증 테스트.
use std::collections::BTreeMap;

use led_savings_calculator::lighting::{
    compute_with, CalculationInput, Catalog, CatalogError, CatalogTables, PaybackFormula,
};

fn tables(legacy: &[(&str, f64)], led: &[(&str, f64)], mapping: &[(&str, &str)]) -> CatalogTables {
    CatalogTables {
        legacy_tubes: legacy.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        led_tubes: led.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        mapping: mapping
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn builtin_keeps_dropdown_order() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.tube_types(), ["T8_58W", "T8_36W", "T5_49W", "T5_28W"]);
    let leds: Vec<&str> = catalog.pairs().map(|p| p.led_code).collect();
    assert_eq!(leds, ["LED_20W", "LED_18W", "LED_25W", "LED_16W"]);
}

#[test]
fn builtin_lookups() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.legacy_watts("T8_58W"), Some(70.0));
    assert_eq!(catalog.legacy_watts("T8_36W"), Some(43.0));
    assert_eq!(catalog.led_watts("LED_25W"), Some(25.0));
    assert_eq!(catalog.replacement_for("T5_28W"), Some("LED_16W"));
    assert_eq!(catalog.replacement_for("LED_16W"), None);
    assert!(catalog.resolve("T12_40W").is_none());
}

#[test]
fn every_builtin_led_draws_less_than_its_tube() {
    for pair in Catalog::builtin().pairs() {
        assert!(
            pair.led_watts < pair.legacy_watts,
            "{} -> {}",
            pair.legacy_code,
            pair.led_code
        );
    }
}

#[test]
fn empty_table_rejected() {
    assert_eq!(
        Catalog::from_tables(CatalogTables::default()),
        Err(CatalogError::Empty)
    );
}

#[test]
fn missing_mapping_rejected() {
    let t = tables(
        &[("T8_58W", 70.0), ("T8_36W", 43.0)],
        &[("LED_20W", 20.0)],
        &[("T8_58W", "LED_20W")],
    );
    assert_eq!(
        Catalog::from_tables(t),
        Err(CatalogError::MissingMapping("T8_36W".into()))
    );
}

#[test]
fn mapping_to_unknown_led_rejected() {
    let t = tables(&[("T8_58W", 70.0)], &[("LED_20W", 20.0)], &[("T8_58W", "LED_99W")]);
    assert_eq!(
        Catalog::from_tables(t),
        Err(CatalogError::UnknownLed {
            tube: "T8_58W".into(),
            led: "LED_99W".into(),
        })
    );
}

#[test]
fn mapping_from_unknown_tube_rejected() {
    let t = tables(
        &[("T8_58W", 70.0)],
        &[("LED_20W", 20.0)],
        &[("T8_58W", "LED_20W"), ("T12_40W", "LED_20W")],
    );
    assert_eq!(
        Catalog::from_tables(t),
        Err(CatalogError::UnknownTube("T12_40W".into()))
    );
}

#[test]
fn non_positive_wattage_rejected() {
    let t = tables(&[("T8_58W", 70.0)], &[("LED_20W", 0.0)], &[("T8_58W", "LED_20W")]);
    assert!(matches!(
        Catalog::from_tables(t),
        Err(CatalogError::InvalidWattage { ref code, .. }) if code == "LED_20W"
    ));
}

#[test]
fn custom_catalog_drives_calculation() {
    // 두 종류만 있는 변형 테이블
    let catalog = Catalog::from_tables(tables(
        &[("T8_58W", 70.0), ("T8_36W", 43.0)],
        &[("LED_22W", 22.0), ("LED_18W", 18.0)],
        &[("T8_58W", "LED_22W"), ("T8_36W", "LED_18W")],
    ))
    .expect("valid");
    assert_eq!(catalog.tube_types(), ["T8_36W", "T8_58W"]);

    let input = CalculationInput {
        fixture_count: 10,
        annual_hours: 1000,
        price_per_kwh: 1.0,
        tube_type: "T8_58W".into(),
        fixture_unit_price: 100.0,
        extra_cost: 0.0,
    };
    let res = compute_with(&catalog, PaybackFormula::default(), &input).expect("calc");
    assert_eq!(res.led_type, "LED_22W");
    assert!((res.new_power_w - 44.0).abs() < 1e-12);
    // 등기구 10대 합계 1400 kWh vs 440 kWh, 단가 1.0
    assert!((res.annual_savings - 960.0).abs() < 1e-9);

    let mut t5 = input.clone();
    t5.tube_type = "T5_49W".into();
    assert!(compute_with(&catalog, PaybackFormula::default(), &t5).is_err());
}
