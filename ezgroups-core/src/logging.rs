//! Structured logging using **tracing**.
//!
//! Library code only emits events. Binaries call
//! [`init_structured_logging`] once to get JSON lines on stderr.

/// Initializes the global tracing subscriber.
///
/// Call once at startup. Output is JSON on stderr so stdout stays clean
/// for reports.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=ezgroups_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
