pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt, EnvFilter,
};

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber. Logs go to stderr so they never mix
/// with shell output; `RUST_LOG` raises verbosity above the default `warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(default_directive());
        // Another subscriber may already be installed by an embedding test harness.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn default_directive() -> Directive {
    "finaware=warn"
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}
