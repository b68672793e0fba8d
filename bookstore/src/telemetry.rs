//! Log output setup.

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// Call once, before the first event is emitted. JSON output drops ANSI colors so the
/// lines stay machine-readable.
pub fn setup_tracing(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // the module path adds nothing for a single-binary service
        .with_target(false);

    if config.log_json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
