//! Tracing subscriber setup for the `bracer` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per process.
///
/// Logging stays off unless `BRACER_LOG` (or, failing that, `RUST_LOG`) is
/// set, e.g. `BRACER_LOG=bracer=debug bracer check src`. Output goes to
/// stderr so it never mixes with JSON on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("BRACER_LOG").or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
