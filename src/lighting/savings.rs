//! 형광등 → LED 교체 절감액 계산.
//!
//! 등기구 한 대에 관 두 개가 들어간다고 가정하고, 연간 전력비, 절감액,
//! 투자 회수기간, CO2 감축량과 그에 해당하는 나무 수를 계산한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::tube_catalog::Catalog;

/// 등기구당 관 개수
pub const TUBES_PER_FIXTURE: f64 = 2.0;
/// 관 100개 교체당 CO2 감축량 [ton]. 소비전력 차와 무관한 고정 추정치.
pub const CO2_TONS_PER_100_TUBES: f64 = 2.5;
/// 나무 한 그루의 연간 CO2 흡수량 [kg/년]
pub const TREE_CO2_KG_PER_YEAR: f64 = 21.77;

/// 절감액 계산 입력. 폼 값에서 매번 새로 만든다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// 등기구 수 (관 2개/대)
    pub fixture_count: u32,
    /// 연간 운전 시간 [h]
    pub annual_hours: u32,
    /// 전력 단가 [통화/kWh]
    pub price_per_kwh: f64,
    /// 교체 대상 기존 관 코드 (예: T8_58W)
    pub tube_type: String,
    /// 새 등기구 단가 [통화/대]
    pub fixture_unit_price: f64,
    /// 설치비 등 추가 비용 [통화]
    pub extra_cost: f64,
}

/// 절감액 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub tube_type: String,
    /// 매핑된 대체 LED 관 코드
    pub led_type: String,
    /// 등기구당 기존 소비전력 [W]
    pub old_power_w: f64,
    /// 등기구당 LED 소비전력 [W]
    pub new_power_w: f64,
    /// 등기구당 기존 연간 사용량 [kWh]
    pub old_energy_kwh: f64,
    /// 등기구당 LED 연간 사용량 [kWh]
    pub new_energy_kwh: f64,
    pub old_annual_cost: f64,
    pub new_annual_cost: f64,
    pub annual_savings: f64,
    /// 회수기간 [년]
    pub payback_period_years: f64,
    pub total_fixture_purchase_cost: f64,
    pub total_project_cost: f64,
    pub co2_saved_tons: f64,
    pub trees_equivalent: f64,
}

/// 회수기간 분자 구성 방식.
///
/// 둘 다 등기구 구입비와 LED 1년 운전비를 더한 뒤 기존 1년 운전비로 나눈다.
/// 추가 비용(설치비) 포함 여부만 다르다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackFormula {
    #[default]
    WithExtraCost,
    WithoutExtraCost,
}

impl PaybackFormula {
    fn numerator(self, purchase_cost: f64, new_annual_cost: f64, extra_cost: f64) -> f64 {
        match self {
            PaybackFormula::WithExtraCost => purchase_cost + new_annual_cost + extra_cost,
            PaybackFormula::WithoutExtraCost => purchase_cost + new_annual_cost,
        }
    }
}

/// 절감액 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    #[error("invalid tube type: {0}")]
    InvalidTubeType(String),
    /// 기존 연간 운전비가 0이면 회수기간을 정의할 수 없다.
    #[error("old annual cost is zero, payback period is undefined")]
    DivisionByZero,
}

/// 등기구 수에 해당하는 CO2 감축량 [ton].
pub fn co2_for_fixtures(fixture_count: u32) -> f64 {
    (f64::from(fixture_count) * TUBES_PER_FIXTURE / 100.0) * CO2_TONS_PER_100_TUBES
}

/// CO2 감축량 [ton]을 연간 흡수량 기준 나무 그루 수로 환산한다.
pub fn trees_for_co2(co2_tons: f64) -> f64 {
    co2_tons * 1000.0 / TREE_CO2_KG_PER_YEAR
}

/// 내장 카탈로그와 기본 회수기간 식으로 계산한다.
pub fn compute(input: &CalculationInput) -> Result<CalculationResult, SavingsError> {
    compute_with(Catalog::builtin(), PaybackFormula::default(), input)
}

/// 주어진 카탈로그와 회수기간 식으로 절감액을 계산한다.
pub fn compute_with(
    catalog: &Catalog,
    formula: PaybackFormula,
    input: &CalculationInput,
) -> Result<CalculationResult, SavingsError> {
    let pair = catalog
        .resolve(&input.tube_type)
        .ok_or_else(|| SavingsError::InvalidTubeType(input.tube_type.clone()))?;

    let fixtures = f64::from(input.fixture_count);
    let hours = f64::from(input.annual_hours);

    let old_power_w = pair.legacy_watts * TUBES_PER_FIXTURE;
    let new_power_w = pair.led_watts * TUBES_PER_FIXTURE;
    let old_energy_kwh = old_power_w * hours / 1000.0;
    let new_energy_kwh = new_power_w * hours / 1000.0;

    let old_annual_cost = old_energy_kwh * fixtures * input.price_per_kwh;
    let new_annual_cost = new_energy_kwh * fixtures * input.price_per_kwh;
    // 0, 비정규수, NaN, 무한대 모두 회수기간 분모로 쓸 수 없다.
    if !old_annual_cost.is_normal() {
        return Err(SavingsError::DivisionByZero);
    }
    let annual_savings = old_annual_cost - new_annual_cost;

    let total_fixture_purchase_cost = input.fixture_unit_price * fixtures;
    let total_project_cost = total_fixture_purchase_cost + input.extra_cost;
    let payback_period_years = formula.numerator(
        total_fixture_purchase_cost,
        new_annual_cost,
        input.extra_cost,
    ) / old_annual_cost;

    let co2_saved_tons = co2_for_fixtures(input.fixture_count);
    let trees_equivalent = trees_for_co2(co2_saved_tons);

    debug!(
        tube = pair.legacy_code,
        led = pair.led_code,
        fixtures = input.fixture_count,
        hours = input.annual_hours,
        old_annual_cost,
        new_annual_cost,
        payback_period_years,
        "savings computed"
    );

    Ok(CalculationResult {
        tube_type: pair.legacy_code.to_string(),
        led_type: pair.led_code.to_string(),
        old_power_w,
        new_power_w,
        old_energy_kwh,
        new_energy_kwh,
        old_annual_cost,
        new_annual_cost,
        annual_savings,
        payback_period_years,
        total_fixture_purchase_cost,
        total_project_cost,
        co2_saved_tons,
        trees_equivalent,
    })
}
