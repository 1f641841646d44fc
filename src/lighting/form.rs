//! 입력 폼 계층의 기본값과 허용 범위.
//!
//! 계산 코어는 관 코드만 다시 확인하므로 나머지 범위 검사는 CLI/GUI가
//! 계산 전에 이 모듈로 수행한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::savings::CalculationInput;

/// 폼 입력 항목. 오류 메시지와 번역 키에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FixtureCount,
    AnnualHours,
    PricePerKwh,
    FixtureUnitPrice,
    ExtraCost,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FixtureCount => "fixture_count",
            FormField::AnnualHours => "annual_hours",
            FormField::PricePerKwh => "price_per_kwh",
            FormField::FixtureUnitPrice => "fixture_unit_price",
            FormField::ExtraCost => "extra_cost",
        }
    }

    /// 라벨 번역 키 (form.<field>)
    pub fn label_key(&self) -> String {
        format!("form.{}", self.as_str())
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: FormField,
        min: f64,
        value: f64,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: FormField },
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::OutOfRange { field, .. } | FormError::NotFinite { field } => *field,
        }
    }
}

/// 각 입력 항목의 하한.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormBounds {
    pub min_fixture_count: u32,
    pub min_annual_hours: u32,
    pub min_price_per_kwh: f64,
    pub min_fixture_unit_price: f64,
    pub min_extra_cost: f64,
}

impl FormBounds {
    /// 입력 폼 기본 하한: 1대, 1시간, 0.01/kWh, 단가 1, 추가 비용 1.
    pub const STANDARD: FormBounds = FormBounds {
        min_fixture_count: 1,
        min_annual_hours: 1,
        min_price_per_kwh: 0.01,
        min_fixture_unit_price: 1.0,
        min_extra_cost: 1.0,
    };

    /// 첫 번째로 범위를 벗어난 항목을 오류로 돌려준다.
    pub fn validate(&self, input: &CalculationInput) -> Result<(), FormError> {
        check(
            FormField::FixtureCount,
            f64::from(input.fixture_count),
            f64::from(self.min_fixture_count),
        )?;
        check(
            FormField::AnnualHours,
            f64::from(input.annual_hours),
            f64::from(self.min_annual_hours),
        )?;
        check(
            FormField::PricePerKwh,
            input.price_per_kwh,
            self.min_price_per_kwh,
        )?;
        check(
            FormField::FixtureUnitPrice,
            input.fixture_unit_price,
            self.min_fixture_unit_price,
        )?;
        check(FormField::ExtraCost, input.extra_cost, self.min_extra_cost)
    }
}

impl Default for FormBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn check(field: FormField, value: f64, min: f64) -> Result<(), FormError> {
    if !value.is_finite() {
        return Err(FormError::NotFinite { field });
    }
    if value < min {
        return Err(FormError::OutOfRange { field, min, value });
    }
    Ok(())
}

/// 폼을 처음 열었을 때 채워지는 값. config.toml의 [defaults] 테이블.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub fixture_count: u32,
    pub annual_hours: u32,
    pub price_per_kwh: f64,
    pub tube_type: String,
    pub fixture_unit_price: f64,
    pub extra_cost: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            fixture_count: 50,
            annual_hours: 4000,
            price_per_kwh: 0.15,
            tube_type: "T8_58W".into(),
            fixture_unit_price: 800.0,
            extra_cost: 1000.0,
        }
    }
}

impl FormDefaults {
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            fixture_count: self.fixture_count,
            annual_hours: self.annual_hours,
            price_per_kwh: self.price_per_kwh,
            tube_type: self.tube_type.clone(),
            fixture_unit_price: self.fixture_unit_price,
            extra_cost: self.extra_cost,
        }
    }
}
