//! Cross-layer integration tests for Lineage
//!
//! Tests that evaluate with the standard library and explain with the debug
//! layer in one flow.

mod scenarios;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
