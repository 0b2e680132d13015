// Licensed under the Apache-2.0 license

//! Host-side helpers shared by unit and integration tests.

mod mmio;
pub use mmio::FakeMmio;

use std::sync::Once;

static LOGGER: Once = Once::new();

/// Installs a logger for test output. Safe to call from every test.
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init();
    });
}
