use log::LevelFilter;

/// Initialize the logger; `--debug` raises the default level to debug
///
/// `RUST_LOG` still takes precedence when set.
pub fn init(debug_mode: bool) {
    let default_level = if debug_mode { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Logger for tests; output is captured by the harness
pub fn init_for_tests() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
