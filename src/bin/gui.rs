#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use std::{env, fs, path::Path};
use led_savings_calculator::{
    app, config, i18n, logging,
    lighting::{Catalog, FormBounds, ResultReport},
    ui_cli,
};

#[derive(Parser, Debug)]
#[command(name = "led_savings_calculator")]
#[command(version, about = "LED retrofit savings calculator (desktop form)")]
struct GuiArgs {
    /// 표시 언어 (auto/en-us/sv-se/ko-kr)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logging::init(args.verbose);

    // 읽지 못한 설정 파일은 기본값으로 대신하되 덮어쓰지 않는다.
    let (mut app_cfg, writable) = match config::load_or_default() {
        Ok(cfg) => (cfg, true),
        Err(e) => {
            tracing::warn!(error = ?e, "config load failed, using defaults");
            (config::Config::default(), false)
        }
    };
    if args.lang != "auto" {
        app_cfg.language = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "LED Savings Calculator",
        options,
        Box::new(move |cc| {
            let mut app = GuiApp::new(app_cfg);
            app.config_writable = writable;
            if app.tr.language() == i18n::Language::Ko {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    tracing::warn!("font error: {e}");
                }
            }
            Box::new(app)
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾아 적용한다. 못 찾으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/truetype/nanum/NanumGothic.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc").to_path_buf(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        candidates.insert(0, Path::new(&windir).join("Fonts").join("malgun.ttf"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul may not render.".into())
}

struct GuiApp {
    config: config::Config,
    /// false면 config.toml을 읽지 못한 상태라 저장하지 않는다.
    config_writable: bool,
    tr: i18n::Translator,
    catalog: Catalog,
    catalog_error: Option<String>,
    lang_input: String,
    lang_save_status: Option<String>,
    show_settings_modal: bool,
    show_formula_modal: bool,
    // 입력 폼
    fixture_count: u32,
    annual_hours: u32,
    price_per_kwh: f64,
    tube_type: String,
    fixture_unit_price: f64,
    extra_cost: f64,
    // 결과
    report: Option<ResultReport>,
    error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::debug!(lang = %lang_code, "GUI language resolved");
        let (catalog, catalog_error) = match config.catalog() {
            Ok(c) => (c, None),
            Err(e) => {
                tracing::warn!("custom catalog rejected, using built-in: {e}");
                (Catalog::builtin().clone(), Some(e.to_string()))
            }
        };
        let mut s = Self {
            lang_input: config.language.clone(),
            config,
            config_writable: true,
            tr,
            catalog,
            catalog_error,
            lang_save_status: None,
            show_settings_modal: false,
            show_formula_modal: false,
            fixture_count: 0,
            annual_hours: 0,
            price_per_kwh: 0.0,
            tube_type: String::new(),
            fixture_unit_price: 0.0,
            extra_cost: 0.0,
            report: None,
            error: None,
        };
        s.reset_form();
        s
    }

    /// 설정의 기본값으로 폼을 되돌린다.
    fn reset_form(&mut self) {
        let d = &self.config.defaults;
        self.fixture_count = d.fixture_count;
        self.annual_hours = d.annual_hours;
        self.price_per_kwh = d.price_per_kwh;
        self.tube_type = if self.catalog.resolve(&d.tube_type).is_some() {
            d.tube_type.clone()
        } else {
            self.catalog.tube_types().first().cloned().unwrap_or_default()
        };
        self.fixture_unit_price = d.fixture_unit_price;
        self.extra_cost = d.extra_cost;
        self.report = None;
        self.error = None;
    }

    fn calculate(&mut self) {
        let mut input = self.config.defaults.to_input();
        input.fixture_count = self.fixture_count;
        input.annual_hours = self.annual_hours;
        input.price_per_kwh = self.price_per_kwh;
        input.tube_type = self.tube_type.clone();
        input.fixture_unit_price = self.fixture_unit_price;
        input.extra_cost = self.extra_cost;
        match app::calculate(&self.config, &self.catalog, &input) {
            Ok(result) => {
                self.report = Some(ResultReport::new(result, self.config.currency.as_str()));
                self.error = None;
            }
            Err(e) => {
                self.report = None;
                self.error = Some(format!(
                    "{}: {}",
                    self.tr.t(i18n::keys::ERROR_PREFIX),
                    ui_cli::describe_error(&self.tr, &e)
                ));
            }
        }
    }

    /// 설정을 저장하고 결과 문구를 돌려준다.
    fn save_config(&self) -> String {
        if !self.config_writable {
            tracing::warn!("config.toml was not loaded; keeping the file as is");
            return self.tr.t(i18n::keys::GUI_SETTINGS_NOT_SAVED).to_string();
        }
        match self.config.save() {
            Ok(()) => self.tr.t(i18n::keys::GUI_SETTINGS_SAVED).to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(i18n::keys::ERROR_PREFIX)),
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let bounds = FormBounds::STANDARD;
        egui::Grid::new("savings_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(i18n::keys::FORM_FIXTURE_COUNT));
                ui.add(
                    egui::DragValue::new(&mut self.fixture_count)
                        .clamp_range(bounds.min_fixture_count..=u32::MAX),
                );
                ui.end_row();

                ui.label(tr.t(i18n::keys::FORM_ANNUAL_HOURS));
                ui.add(
                    egui::DragValue::new(&mut self.annual_hours)
                        .clamp_range(bounds.min_annual_hours..=u32::MAX)
                        .speed(10.0)
                        .suffix(" h"),
                );
                ui.end_row();

                ui.label(tr.t(i18n::keys::FORM_PRICE_PER_KWH));
                ui.add(
                    egui::DragValue::new(&mut self.price_per_kwh)
                        .clamp_range(bounds.min_price_per_kwh..=f64::MAX)
                        .speed(0.01)
                        .fixed_decimals(2),
                );
                ui.end_row();

                ui.label(tr.t(i18n::keys::FORM_TUBE_TYPE));
                egui::ComboBox::from_id_source("tube_type")
                    .selected_text(self.tube_type.as_str())
                    .show_ui(ui, |ui| {
                        for code in self.catalog.tube_types() {
                            ui.selectable_value(&mut self.tube_type, code.clone(), code.as_str());
                        }
                    });
                ui.end_row();

                ui.label(tr.t(i18n::keys::FORM_FIXTURE_UNIT_PRICE));
                ui.add(
                    egui::DragValue::new(&mut self.fixture_unit_price)
                        .clamp_range(bounds.min_fixture_unit_price..=f64::MAX)
                        .speed(10.0),
                );
                ui.end_row();

                ui.label(tr.t(i18n::keys::FORM_EXTRA_COST));
                ui.add(
                    egui::DragValue::new(&mut self.extra_cost)
                        .clamp_range(bounds.min_extra_cost..=f64::MAX)
                        .speed(10.0),
                );
                ui.end_row();
            });
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, err.as_str());
        }
        let Some(report) = &self.report else {
            return;
        };
        ui.heading(report.heading(&self.tr));
        for (label, value) in report.lines(&self.tr) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(format!("{label}:"));
                    ui.strong(value);
                });
            });
            ui.add_space(4.0);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key).unwrap_or_else(|| default.to_string())
        };

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt(i18n::keys::APP_TITLE, "LED Savings Calculator"));
                ui.separator();
                if ui.button(txt(i18n::keys::GUI_FORMULA_BUTTON, "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt(i18n::keys::GUI_SETTINGS_TITLE, "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut save_clicked = false;
            egui::Window::new(txt(i18n::keys::GUI_SETTINGS_TITLE, "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt(i18n::keys::GUI_SETTINGS_LANG, "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt(i18n::keys::GUI_SETTINGS_LANG_AUTO, "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "sv-se".into(), "Svenska");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt(i18n::keys::GUI_SETTINGS_SAVE, "Save settings")).clicked() {
                        save_clicked = true;
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if save_clicked {
                self.config.language = self.lang_input.clone();
                let resolved = i18n::resolve_language("auto", Some(self.config.language.as_str()));
                self.tr = i18n::Translator::new_with_pack(
                    &resolved,
                    self.config.language_pack_dir.as_deref(),
                );
                if self.tr.language() == i18n::Language::Ko {
                    if let Err(e) = setup_fonts(ctx) {
                        tracing::warn!("font error: {e}");
                    }
                }
                self.lang_save_status = Some(self.save_config());
            }
        }

        if self.show_formula_modal {
            egui::Window::new(txt(i18n::keys::GUI_FORMULA_TITLE, "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.label(txt(i18n::keys::GUI_FORMULA_ENERGY, ""));
                    ui.separator();
                    ui.label(txt(ui_cli::formula_key(self.config.payback_formula), ""));
                    ui.separator();
                    ui.label(txt(i18n::keys::GUI_FORMULA_CO2, ""));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if let Some(err) = &self.catalog_error {
                        ui.colored_label(ui.visuals().warn_fg_color, err.as_str());
                        ui.separator();
                    }
                    ui.label(txt(i18n::keys::GUI_CALCULATE_HINT, ""));
                    ui.add_space(8.0);
                    self.ui_form(ui);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button(txt(i18n::keys::FORM_CALCULATE, "Calculate")).clicked() {
                            self.calculate();
                        }
                        if ui.button(txt(i18n::keys::GUI_RESET, "Reset")).clicked() {
                            self.reset_form();
                        }
                    });
                    ui.add_space(12.0);
                    self.ui_results(ui);
                });
        });
    }
}
