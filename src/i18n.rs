use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::warn;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_INTEGER: &str = "error.invalid_integer";
    pub const ERROR_BELOW_MINIMUM: &str = "error.below_minimum";

    pub const FORM_HEADING: &str = "form.heading";
    pub const FORM_FIXTURE_COUNT: &str = "form.fixture_count";
    pub const FORM_ANNUAL_HOURS: &str = "form.annual_hours";
    pub const FORM_PRICE_PER_KWH: &str = "form.price_per_kwh";
    pub const FORM_TUBE_TYPE: &str = "form.tube_type";
    pub const FORM_FIXTURE_UNIT_PRICE: &str = "form.fixture_unit_price";
    pub const FORM_EXTRA_COST: &str = "form.extra_cost";
    pub const FORM_CALCULATE: &str = "form.calculate";

    pub const REPORT_HEADING: &str = "report.heading";
    pub const REPORT_OLD_COST: &str = "report.old_cost";
    pub const REPORT_NEW_COST: &str = "report.new_cost";
    pub const REPORT_SAVINGS: &str = "report.savings";
    pub const REPORT_PURCHASE_COST: &str = "report.purchase_cost";
    pub const REPORT_TOTAL_COST: &str = "report.total_cost";
    pub const REPORT_CO2: &str = "report.co2";
    pub const REPORT_PAYBACK: &str = "report.payback";
    pub const REPORT_TREES: &str = "report.trees";
    pub const UNIT_YEARS: &str = "report.unit.years";
    pub const UNIT_MONTHS: &str = "report.unit.months";
    pub const UNIT_TONS: &str = "report.unit.tons";
    pub const UNIT_TREES: &str = "report.unit.trees";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_COLUMNS: &str = "catalog.columns";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_CURRENT_FORMULA: &str = "settings.current_formula";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_FORMULA_OPTIONS: &str = "settings.formula_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const FORMULA_WITH_EXTRA: &str = "settings.formula.with_extra_cost";
    pub const FORMULA_WITHOUT_EXTRA: &str = "settings.formula.without_extra_cost";

    pub const GUI_CALCULATE_HINT: &str = "gui.calculate_hint";
    pub const GUI_RESET: &str = "gui.reset";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings_title";
    pub const GUI_SETTINGS_LANG: &str = "gui.settings_lang";
    pub const GUI_SETTINGS_LANG_AUTO: &str = "gui.settings_lang_auto";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings_save";
    pub const GUI_SETTINGS_SAVED: &str = "gui.settings_saved";
    pub const GUI_SETTINGS_NOT_SAVED: &str = "gui.settings_not_saved";
    pub const GUI_FORMULA_BUTTON: &str = "gui.formula_button";
    pub const GUI_FORMULA_TITLE: &str = "gui.formula_title";
    pub const GUI_FORMULA_ENERGY: &str = "gui.formula_energy";
    pub const GUI_FORMULA_CO2: &str = "gui.formula_co2";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Sv,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("sv") {
            Language::Sv
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en-us",
            Language::Sv => "sv-se",
            Language::Ko => "ko-kr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 영어 내장 팩을 바탕으로 선택 언어의 내장 팩, 언어팩 디렉터리의 파일 순으로
/// 덮어쓴다. 어디에도 없는 키는 키 문자열 그대로 돌려준다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만으로 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = built_in_pack(Language::En);
        if lang != Language::En {
            strings.extend(built_in_pack(lang));
        }
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang_code)) {
            strings.extend(overrides);
        }
        Self { lang, strings }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    /// 번역을 가져온다. 없으면 키를 그대로 반환한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }
}

/// `{name}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "sv" | "sv-se" | "sv-fi" => Some("sv-se".into()),
        "ko" | "ko-kr" => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("sv") => Some("sv-se".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!(path = %path.display(), "language pack ignored: not a string table");
        }
        map
    };

    // 1) full code (e.g., sv-se)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., sv)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en-us.toml"),
        Language::Sv => include_str!("../locales/sv-se.toml"),
        Language::Ko => include_str!("../locales/ko-kr.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}
