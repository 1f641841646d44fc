//! 형광등 → LED 교체 조합 테이블.
//!
//! 기존 관(legacy tube) 정격 소비전력, LED 관 정격 소비전력, 그리고 기존 관마다
//! 하나씩 지정된 대체 LED 관 매핑을 한 곳에서 관리한다. 내장 테이블은 프로세스
//! 당 한 번만 만들어지며, 설정 파일로 교체 테이블을 지정할 수도 있다.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 내장 기존 관 테이블 [W]. 선택 목록 순서를 그대로 유지한다.
const LEGACY_TUBES: &[(&str, f64)] = &[
    ("T8_58W", 70.0),
    ("T8_36W", 43.0),
    ("T5_49W", 54.0),
    ("T5_28W", 32.0),
];

/// 내장 LED 관 테이블 [W].
const LED_TUBES: &[(&str, f64)] = &[
    ("LED_20W", 20.0),
    ("LED_18W", 18.0),
    ("LED_25W", 25.0),
    ("LED_16W", 16.0),
];

const TUBE_TO_LED: &[(&str, &str)] = &[
    ("T8_58W", "LED_20W"),
    ("T8_36W", "LED_18W"),
    ("T5_49W", "LED_25W"),
    ("T5_28W", "LED_16W"),
];

/// 카탈로그 구성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("catalog has no legacy tube types")]
    Empty,
    #[error("tube type {code} has invalid wattage {watts}")]
    InvalidWattage { code: String, watts: f64 },
    #[error("tube type {0} has no LED replacement")]
    MissingMapping(String),
    #[error("mapping refers to unknown tube type {0}")]
    UnknownTube(String),
    #[error("tube type {tube} maps to unknown LED type {led}")]
    UnknownLed { tube: String, led: String },
}

/// 설정 파일에 그대로 기록되는 키-값 테이블 묶음.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogTables {
    /// 기존 관 코드 → 정격 소비전력 [W]
    pub legacy_tubes: BTreeMap<String, f64>,
    /// LED 관 코드 → 정격 소비전력 [W]
    pub led_tubes: BTreeMap<String, f64>,
    /// 기존 관 코드 → LED 관 코드
    pub mapping: BTreeMap<String, String>,
}

/// 기존 관 하나와 그 대체 LED 관의 조회 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubePair<'a> {
    pub legacy_code: &'a str,
    pub legacy_watts: f64,
    pub led_code: &'a str,
    pub led_watts: f64,
}

/// 검증을 마친 교체 조합 카탈로그. 생성 후에는 변경되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    order: Vec<String>,
    tables: CatalogTables,
}

impl Catalog {
    /// 내장 카탈로그. 최초 호출 시 한 번 구성된다.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let tables = CatalogTables {
                legacy_tubes: owned_watts(LEGACY_TUBES),
                led_tubes: owned_watts(LED_TUBES),
                mapping: TUBE_TO_LED
                    .iter()
                    .map(|(tube, led)| (tube.to_string(), led.to_string()))
                    .collect(),
            };
            Catalog {
                order: LEGACY_TUBES.iter().map(|(code, _)| code.to_string()).collect(),
                tables,
            }
        })
    }

    /// 사용자 테이블로 카탈로그를 만든다. 모든 기존 관이 존재하는 LED 관으로
    /// 매핑되어 있어야 한다. 선택 목록 순서는 코드의 사전순이다.
    pub fn from_tables(tables: CatalogTables) -> Result<Self, CatalogError> {
        if tables.legacy_tubes.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (code, &watts) in tables.legacy_tubes.iter().chain(tables.led_tubes.iter()) {
            if !watts.is_finite() || watts <= 0.0 {
                return Err(CatalogError::InvalidWattage {
                    code: code.clone(),
                    watts,
                });
            }
        }
        for (tube, led) in &tables.mapping {
            if !tables.legacy_tubes.contains_key(tube) {
                return Err(CatalogError::UnknownTube(tube.clone()));
            }
            if !tables.led_tubes.contains_key(led) {
                return Err(CatalogError::UnknownLed {
                    tube: tube.clone(),
                    led: led.clone(),
                });
            }
        }
        if let Some(code) = tables
            .legacy_tubes
            .keys()
            .find(|code| !tables.mapping.contains_key(*code))
        {
            return Err(CatalogError::MissingMapping(code.clone()));
        }
        Ok(Self {
            order: tables.legacy_tubes.keys().cloned().collect(),
            tables,
        })
    }

    /// 입력으로 허용되는 기존 관 코드 목록(선택 목록 순서).
    pub fn tube_types(&self) -> &[String] {
        &self.order
    }

    pub fn legacy_watts(&self, code: &str) -> Option<f64> {
        self.tables.legacy_tubes.get(code).copied()
    }

    pub fn led_watts(&self, code: &str) -> Option<f64> {
        self.tables.led_tubes.get(code).copied()
    }

    pub fn replacement_for(&self, code: &str) -> Option<&str> {
        self.tables.mapping.get(code).map(String::as_str)
    }

    /// 기존 관 코드로 교체 조합을 찾는다. 테이블 중 하나라도 빠져 있으면 None.
    pub fn resolve(&self, code: &str) -> Option<TubePair<'_>> {
        let (legacy_code, &legacy_watts) = self.tables.legacy_tubes.get_key_value(code)?;
        let led = self.tables.mapping.get(code)?;
        let (led_code, &led_watts) = self.tables.led_tubes.get_key_value(led.as_str())?;
        Some(TubePair {
            legacy_code,
            legacy_watts,
            led_code,
            led_watts,
        })
    }

    /// 선택 목록 순서대로 모든 교체 조합을 돌려준다.
    pub fn pairs(&self) -> impl Iterator<Item = TubePair<'_>> + '_ {
        self.order.iter().filter_map(|code| self.resolve(code))
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }
}

fn owned_watts(table: &[(&str, f64)]) -> BTreeMap<String, f64> {
    table
        .iter()
        .map(|(code, watts)| (code.to_string(), *watts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_built_once() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn builtin_tables_pass_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::from_tables(builtin.tables().clone()).expect("builtin valid");
        assert_eq!(rebuilt.tables(), builtin.tables());
    }
}
