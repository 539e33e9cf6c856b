//! Telemetry helpers for structured logging.

/// Install a default env-filtered subscriber unless the caller has already
/// set one up. Scheduler decision points emit `debug`/`trace` events, so
/// `RUST_LOG=taskweave=debug` surfaces parking and admission activity.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
