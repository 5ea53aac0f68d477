//! Tracing initialization for tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Initializes tracing with the test writer and sensible defaults.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_test_tracing_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
