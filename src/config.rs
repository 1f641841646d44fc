use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::lighting::{Catalog, CatalogError, CatalogTables, FormDefaults, PaybackFormula};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en-us/sv-se/ko-kr)
    pub language: String,
    /// 언어팩 디렉터리. 없으면 내장 문자열만 사용한다.
    pub language_pack_dir: Option<String>,
    /// 금액 앞에 붙는 통화 코드
    pub currency: String,
    pub payback_formula: PaybackFormula,
    /// 폼 초기값
    pub defaults: FormDefaults,
    /// 내장 교체 조합 대신 사용할 테이블
    pub catalog: Option<CatalogTables>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            currency: "SEK".into(),
            payback_formula: PaybackFormula::default(),
            defaults: FormDefaults::default(),
            catalog: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error")]
    Io(#[from] std::io::Error),
    #[error("config parse error")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 기록한 뒤 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// TOML 문자열을 파싱한다. 교체 조합 테이블은 `catalog()` 호출 시 검증한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 계산에 사용할 카탈로그. 사용자 테이블이 없으면 내장 카탈로그.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(tables) => Catalog::from_tables(tables.clone()),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}
