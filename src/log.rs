use log::LevelFilter;

/// Builds the global stderr logger used by all binaries. Safe to call more
/// than once; only the first initialization wins.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}
