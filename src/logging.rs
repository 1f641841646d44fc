use tracing_subscriber::EnvFilter;

/// stderr로 로그를 내보내는 구독자를 설치한다. RUST_LOG가 있으면 그 값을 따른다.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("led_savings_calculator=debug")
        } else {
            EnvFilter::new("led_savings_calculator=warn")
        }
    });

    // 이미 설치돼 있으면(테스트 등) 그대로 둔다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
