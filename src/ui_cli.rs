use std::error::Error as _;
use std::io::{self, BufRead, Write};

use crate::app::{self, AppError};
use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::lighting::{Catalog, FormBounds, FormError, PaybackFormula, ResultReport};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// `main_menu`와 같지만 임의의 입력에서 읽는다. 입력이 끝나면 종료를 고른 것으로 본다.
pub fn main_menu_from<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 절감액 계산 메뉴를 처리한다. 엔터만 누르면 설정의 기본값을 사용한다.
pub fn handle_calculation(tr: &Translator, cfg: &Config, catalog: &Catalog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FORM_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_DEFAULT));
    let bounds = FormBounds::STANDARD;
    let mut input = cfg.defaults.to_input();
    input.fixture_count = read_u32(
        tr,
        tr.t(keys::FORM_FIXTURE_COUNT),
        input.fixture_count,
        bounds.min_fixture_count,
    )?;
    input.annual_hours = read_u32(
        tr,
        tr.t(keys::FORM_ANNUAL_HOURS),
        input.annual_hours,
        bounds.min_annual_hours,
    )?;
    input.price_per_kwh = read_f64(
        tr,
        tr.t(keys::FORM_PRICE_PER_KWH),
        input.price_per_kwh,
        bounds.min_price_per_kwh,
    )?;
    input.tube_type = read_tube_type(tr, catalog, &input.tube_type)?;
    input.fixture_unit_price = read_f64(
        tr,
        tr.t(keys::FORM_FIXTURE_UNIT_PRICE),
        input.fixture_unit_price,
        bounds.min_fixture_unit_price,
    )?;
    input.extra_cost = read_f64(
        tr,
        tr.t(keys::FORM_EXTRA_COST),
        input.extra_cost,
        bounds.min_extra_cost,
    )?;

    match app::calculate(cfg, catalog, &input) {
        Ok(result) => print_report(tr, &ResultReport::new(result, cfg.currency.as_str())),
        // 잘못된 입력은 메뉴로 돌아가 다시 입력받는다.
        Err(err @ (AppError::Form(_) | AppError::Savings(_))) => {
            println!("{}: {}", tr.t(keys::ERROR_PREFIX), describe_error(tr, &err));
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

/// 계산 결과를 출력한다.
pub fn print_report(tr: &Translator, report: &ResultReport) {
    println!("\n{}", report.heading(tr));
    for (label, value) in report.lines(tr) {
        println!("  {label}: {value}");
    }
}

/// 교체 조합 목록을 출력한다.
pub fn print_catalog(tr: &Translator, catalog: &Catalog) {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    println!("{}", tr.t(keys::CATALOG_COLUMNS));
    for pair in catalog.pairs() {
        println!(
            "{:<10} {:>5.0}  ->  {:<10} {:>5.0}",
            pair.legacy_code, pair.legacy_watts, pair.led_code, pair.led_watts
        );
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_CURRENCY), cfg.currency);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_FORMULA),
        tr.t(formula_key(cfg.payback_formula))
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim();
            if lang.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(false);
            }
            cfg.language = lang.to_string();
            Ok(true)
        }
        "2" => {
            let currency = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            let currency = currency.trim();
            if currency.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(false);
            }
            cfg.currency = currency.to_uppercase();
            Ok(true)
        }
        "3" => {
            println!("{}", tr.t(keys::SETTINGS_FORMULA_OPTIONS));
            let formula = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.payback_formula = match formula.trim() {
                "1" => PaybackFormula::WithExtraCost,
                "2" => PaybackFormula::WithoutExtraCost,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(false);
                }
            };
            Ok(true)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

/// 계산 오류를 사용자에게 보여줄 문장으로 만든다. 폼 오류는 번역된 항목 이름을 붙인다.
pub fn describe_error(tr: &Translator, err: &AppError) -> String {
    match err {
        AppError::Form(form) => {
            let key = form.field().label_key();
            let label = tr.t(&key).to_string();
            let detail = match form {
                FormError::OutOfRange { min, .. } => i18n::fill_template(
                    tr.t(keys::ERROR_BELOW_MINIMUM),
                    &[("min", min.to_string())],
                ),
                FormError::NotFinite { .. } => tr.t(keys::ERROR_INVALID_NUMBER).to_string(),
            };
            format!("{label}: {detail}")
        }
        other => match other.source() {
            Some(inner) => inner.to_string(),
            None => other.to_string(),
        },
    }
}

pub fn formula_key(formula: PaybackFormula) -> &'static str {
    match formula {
        PaybackFormula::WithExtraCost => keys::FORMULA_WITH_EXTRA,
        PaybackFormula::WithoutExtraCost => keys::FORMULA_WITHOUT_EXTRA,
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into());
    }
    Ok(buf)
}

fn below_minimum(tr: &Translator, min: String) {
    println!(
        "{}",
        i18n::fill_template(tr.t(keys::ERROR_BELOW_MINIMUM), &[("min", min)])
    );
}

fn read_f64(tr: &Translator, label: &str, default: f64, min: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        // 소수점 쉼표(0,15)도 허용한다.
        match s.replace(',', ".").parse::<f64>() {
            Ok(v) if v.is_finite() && v >= min => return Ok(v),
            Ok(_) => below_minimum(tr, min.to_string()),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, label: &str, default: u32, min: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) if v >= min => return Ok(v),
            Ok(_) => below_minimum(tr, min.to_string()),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_INTEGER)),
        }
    }
}

fn read_tube_type(tr: &Translator, catalog: &Catalog, default: &str) -> Result<String, AppError> {
    let types = catalog.tube_types();
    println!("{}:", tr.t(keys::FORM_TUBE_TYPE));
    for (i, code) in types.iter().enumerate() {
        println!("  {}) {code}", i + 1);
    }
    loop {
        let sel = read_line(&format!("{} [{default}]: ", tr.t(keys::PROMPT_SELECT)))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default.to_string());
        }
        if let Some(code) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| types.get(i))
        {
            return Ok(code.clone());
        }
        if let Some(code) = types.iter().find(|c| c.eq_ignore_ascii_case(sel)) {
            return Ok(code.clone());
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}
