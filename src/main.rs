use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use led_savings_calculator::{
    app, config, i18n, logging,
    lighting::ResultReport,
    ui_cli,
};

#[derive(Parser)]
#[command(name = "led_savings_calculator_cli")]
#[command(version, about = "Energy savings calculator for fluorescent to LED retrofits")]
struct Cli {
    /// 표시 언어 (auto/en-us/sv-se/ko-kr)
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    lang: String,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 한 번 계산하고 결과를 출력한다. 생략한 값은 설정의 기본값을 쓴다.
    Calc {
        /// 등기구 수 (관 2개/대)
        #[arg(long)]
        fixtures: Option<u32>,
        /// 연간 운전 시간 [h]
        #[arg(long)]
        hours: Option<u32>,
        /// kWh당 전력 단가
        #[arg(long)]
        price: Option<f64>,
        /// 교체할 형광등 종류 (예: T8_58W)
        #[arg(long)]
        tube: Option<String>,
        /// 등기구 구입 단가
        #[arg(long)]
        unit_price: Option<f64>,
        /// 추가 비용 (설치비 등)
        #[arg(long)]
        extra: Option<f64>,
    },
    /// 형광등 → LED 교체 조합을 출력한다.
    Tubes,
    /// 대화형 메뉴 (기본값)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut cfg = config::load_or_default().context("failed to load config.toml")?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = tr.language_code(), "language resolved");

    match cli.command {
        Some(Commands::Calc {
            fixtures,
            hours,
            price,
            tube,
            unit_price,
            extra,
        }) => {
            let catalog = cfg.catalog()?;
            let mut input = cfg.defaults.to_input();
            input.fixture_count = fixtures.unwrap_or(input.fixture_count);
            input.annual_hours = hours.unwrap_or(input.annual_hours);
            input.price_per_kwh = price.unwrap_or(input.price_per_kwh);
            input.tube_type = tube.unwrap_or(input.tube_type);
            input.fixture_unit_price = unit_price.unwrap_or(input.fixture_unit_price);
            input.extra_cost = extra.unwrap_or(input.extra_cost);
            let result = app::calculate(&cfg, &catalog, &input)?;
            ui_cli::print_report(&tr, &ResultReport::new(result, cfg.currency.as_str()));
        }
        Some(Commands::Tubes) => {
            let catalog = cfg.catalog()?;
            ui_cli::print_catalog(&tr, &catalog);
        }
        Some(Commands::Interactive) | None => app::run(&mut cfg, &mut tr)?,
    }
    Ok(())
}
