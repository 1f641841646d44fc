use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::lighting::{
    compute_with, CalculationInput, CalculationResult, Catalog, CatalogError, FormBounds,
    FormError, SavingsError,
};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("config error")]
    Config(#[from] ConfigError),
    #[error("catalog error")]
    Catalog(#[from] CatalogError),
    #[error("input error")]
    Form(#[from] FormError),
    #[error("calculation error")]
    Savings(#[from] SavingsError),
}

/// 폼 범위 검사 후 설정의 회수기간 식으로 절감액을 계산한다.
pub fn calculate(
    config: &Config,
    catalog: &Catalog,
    input: &CalculationInput,
) -> Result<CalculationResult, AppError> {
    FormBounds::STANDARD.validate(input)?;
    Ok(compute_with(catalog, config.payback_formula, input)?)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    let catalog = config.catalog()?;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculation(tr, config, &catalog)?,
            MenuChoice::Catalog => ui_cli::print_catalog(tr, &catalog),
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                    let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::{FormDefaults, FormField, PaybackFormula};

    #[test]
    fn calculate_uses_configured_formula() {
        let mut config = Config::default();
        config.payback_formula = PaybackFormula::WithoutExtraCost;
        let input = FormDefaults::default().to_input();
        let res = calculate(&config, Catalog::builtin(), &input).expect("calc");
        // (40000 + 1200) / 4200
        assert!((res.payback_period_years - 41_200.0 / 4_200.0).abs() < 1e-9);
    }

    #[test]
    fn calculate_rejects_out_of_range_before_compute() {
        let mut input = FormDefaults::default().to_input();
        input.extra_cost = 0.0;
        input.tube_type = "LED_99W".into();
        let err = calculate(&Config::default(), Catalog::builtin(), &input).unwrap_err();
        assert!(matches!(err, AppError::Form(e) if e.field() == FormField::ExtraCost));
    }

    #[test]
    fn wrapped_errors_print_inner_message_once() {
        use std::error::Error as _;
        let err = AppError::from(SavingsError::InvalidTubeType("LED_99W".into()));
        assert_eq!(err.to_string(), "calculation error");
        let inner = err.source().expect("source").to_string();
        assert_eq!(inner, "invalid tube type: LED_99W");
    }

    #[test]
    fn calculate_reports_unknown_tube() {
        let mut input = FormDefaults::default().to_input();
        input.tube_type = "LED_99W".into();
        let err = calculate(&Config::default(), Catalog::builtin(), &input).unwrap_err();
        assert!(matches!(
            err,
            AppError::Savings(SavingsError::InvalidTubeType(ref t)) if t == "LED_99W"
        ));
    }
}
