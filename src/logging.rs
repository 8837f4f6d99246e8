//! Tracing subscriber setup for the chart executables.

use std::sync::Once;

const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        use tracing_subscriber::fmt;
        use tracing_subscriber::EnvFilter;

        let filter = std::env::var("RUST_LOG")
            .ok()
            .and_then(|expr| EnvFilter::try_new(expr).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

        if let Err(err) = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init()
        {
            // Another subscriber is already installed; report through it
            tracing::debug!(error = %err, "tracing subscriber not installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        init();
        init();
        assert!(INIT.is_completed());
    }
}
