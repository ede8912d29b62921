use env_logger::{Builder, Target};

/// Logs go to stderr so they never mix with the menu on stdout. `RUST_LOG` overrides the
/// default filter.
pub fn setup_logging() {
    let mut builder = Builder::new();

    builder
        .filter(None, log::LevelFilter::Warn)
        .filter_module("movie_query", log::LevelFilter::Info)
        .format_timestamp(None)
        .target(Target::Stderr);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
