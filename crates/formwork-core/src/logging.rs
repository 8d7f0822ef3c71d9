//! Logging integration for the formwork toolkit.
//!
//! Provides a helper for configuring tracing-based logging. The toolkit
//! itself only *emits* events (validation warnings, submit-cycle traces);
//! installing a subscriber is the host application's call, and this helper
//! covers the common case.

/// Sets up the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string (e.g. "debug", "info",
/// "formwork_client=debug"). When `pretty` is `true` a human-readable format
/// is used; otherwise output is structured JSON.
///
/// Installing a second subscriber is tolerated: the call becomes a no-op.
pub fn setup_logging(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}
