//! 계산 결과 표시용 변환.
//!
//! 금액은 소수점 없이 통화 코드와 함께, CO2는 소수 둘째 자리, 나무 수는
//! 정수로 표시한다. 회수기간은 1년 초과면 연, 아니면 개월로 나타낸다.

use crate::i18n::{self, keys, Translator};

use super::savings::CalculationResult;

/// 회수기간 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaybackDisplay {
    Years(f64),
    Months(f64),
}

impl PaybackDisplay {
    pub fn from_years(years: f64) -> Self {
        if years > 1.0 {
            PaybackDisplay::Years(years)
        } else {
            PaybackDisplay::Months(years * 12.0)
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            PaybackDisplay::Years(v) | PaybackDisplay::Months(v) => *v,
        }
    }

    fn unit_key(&self) -> &'static str {
        match self {
            PaybackDisplay::Years(_) => keys::UNIT_YEARS,
            PaybackDisplay::Months(_) => keys::UNIT_MONTHS,
        }
    }
}

pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{currency} {value:.0}")
}

/// 계산 결과 하나를 화면용 문자열로 묶는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub result: CalculationResult,
    pub currency: String,
}

impl ResultReport {
    pub fn new(result: CalculationResult, currency: impl Into<String>) -> Self {
        Self {
            result,
            currency: currency.into(),
        }
    }

    pub fn payback(&self) -> PaybackDisplay {
        PaybackDisplay::from_years(self.result.payback_period_years)
    }

    pub fn heading(&self, tr: &Translator) -> String {
        i18n::fill_template(
            tr.t(keys::REPORT_HEADING),
            &[
                ("tube", self.result.tube_type.clone()),
                ("led", self.result.led_type.clone()),
            ],
        )
    }

    /// (라벨, 값) 쌍을 화면 표시 순서대로 돌려준다.
    pub fn lines(&self, tr: &Translator) -> Vec<(String, String)> {
        let r = &self.result;
        let money = |v: f64| format_currency(v, &self.currency);
        let payback = self.payback();
        vec![
            (tr.t(keys::REPORT_OLD_COST).to_string(), money(r.old_annual_cost)),
            (tr.t(keys::REPORT_NEW_COST).to_string(), money(r.new_annual_cost)),
            (tr.t(keys::REPORT_SAVINGS).to_string(), money(r.annual_savings)),
            (
                tr.t(keys::REPORT_PURCHASE_COST).to_string(),
                money(r.total_fixture_purchase_cost),
            ),
            (tr.t(keys::REPORT_TOTAL_COST).to_string(), money(r.total_project_cost)),
            (
                tr.t(keys::REPORT_CO2).to_string(),
                format!("{:.2} {}", r.co2_saved_tons, tr.t(keys::UNIT_TONS)),
            ),
            (
                tr.t(keys::REPORT_PAYBACK).to_string(),
                format!("{:.2} {}", payback.value(), tr.t(payback.unit_key())),
            ),
            (
                tr.t(keys::REPORT_TREES).to_string(),
                format!("{:.0} {}", r.trees_equivalent, tr.t(keys::UNIT_TREES)),
            ),
        ]
    }
}
