use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; `RUST_LOG` overrides the defaults.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .filter_module("moodle_light_core", log::LevelFilter::Info)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .init();

        log::debug!("logging initialized");
    });
}
