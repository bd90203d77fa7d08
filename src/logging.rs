//! Logging
//!
//! Installs a `tracing-subscriber` fmt layer. `log` records are bridged in,
//! so the `log::` macros used across the crate share one sink: the devtools
//! console on wasm32, stderr elsewhere.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

#[cfg(target_arch = "wasm32")]
fn console_writer() -> BoxMakeWriter {
    BoxMakeWriter::new(tracing_web::MakeWebConsoleWriter::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn console_writer() -> BoxMakeWriter {
    BoxMakeWriter::new(std::io::stderr)
}

/// Install the subscriber. Later calls keep the first one.
pub fn init(level: LevelFilter) {
    // No wall clock in the browser; the console timestamps lines itself
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(console_writer());

    if let Err(err) = tracing_subscriber::registry().with(level).with(fmt_layer).try_init() {
        log::warn!("[APP] Logger already installed: {}", err);
    }
}
