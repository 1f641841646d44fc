//! 결과 표시 변환 테스트.
use led_savings_calculator::i18n::Translator;
use led_savings_calculator::lighting::{
    compute, report::format_currency, CalculationInput, PaybackDisplay, ResultReport,
};

fn reference_report() -> ResultReport {
    let result = compute(&CalculationInput {
        fixture_count: 50,
        annual_hours: 4000,
        price_per_kwh: 0.15,
        tube_type: "T8_58W".into(),
        fixture_unit_price: 800.0,
        extra_cost: 1000.0,
    })
    .expect("calc");
    ResultReport::new(result, "SEK")
}

#[test]
fn payback_over_one_year_shown_in_years() {
    assert_eq!(PaybackDisplay::from_years(10.05), PaybackDisplay::Years(10.05));
}

#[test]
fn payback_up_to_one_year_shown_in_months() {
    assert_eq!(PaybackDisplay::from_years(0.5), PaybackDisplay::Months(6.0));
    assert_eq!(PaybackDisplay::from_years(1.0), PaybackDisplay::Months(12.0));
}

#[test]
fn currency_rounded_to_whole_units() {
    assert_eq!(format_currency(4200.000000001, "SEK"), "SEK 4200");
    assert_eq!(format_currency(1199.7, "SEK"), "SEK 1200");
    assert_eq!(format_currency(41_000.0, "EUR"), "EUR 41000");
}

#[test]
fn english_report_lines() {
    let tr = Translator::new("en-us");
    let report = reference_report();
    assert_eq!(report.heading(&tr), "Result for T8_58W (LED_20W):");
    let values: Vec<String> = report.lines(&tr).into_iter().map(|(_, v)| v).collect();
    assert_eq!(
        values,
        [
            "SEK 4200",
            "SEK 1200",
            "SEK 3000",
            "SEK 40000",
            "SEK 41000",
            "2.50 tons",
            "10.05 years",
            "115 trees",
        ]
    );
}

#[test]
fn swedish_report_uses_original_labels() {
    let tr = Translator::new("sv-se");
    let report = reference_report();
    let lines = report.lines(&tr);
    assert_eq!(lines[0].0, "Årlig driftskostnad för de gamla lysrören");
    assert_eq!(lines[5].1, "2.50 ton");
    assert_eq!(lines[6].0, "Tid till breakeven");
    assert_eq!(lines[6].1, "10.05 år");
    assert_eq!(lines[7].1, "115 träd");
}

#[test]
fn short_payback_switches_to_months() {
    let result = compute(&CalculationInput {
        fixture_count: 10,
        annual_hours: 8760,
        price_per_kwh: 5.0,
        tube_type: "T8_58W".into(),
        fixture_unit_price: 1.0,
        extra_cost: 1.0,
    })
    .expect("calc");
    let report = ResultReport::new(result, "SEK");
    let PaybackDisplay::Months(months) = report.payback() else {
        panic!("expected months, got {:?}", report.payback());
    };
    assert!((months - report.result.payback_period_years * 12.0).abs() < 1e-12);
    let tr = Translator::new("en-us");
    assert!(report.lines(&tr)[6].1.ends_with(" months"));
}
