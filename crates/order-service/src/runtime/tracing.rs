use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`:
/// - `RUST_LOG=info` - Lifecycle events (orders created, transitions, rejections)
/// - `RUST_LOG=debug` - Every actor request, with payloads
/// - `RUST_LOG=order_service=debug,resource_actor=info` - Per-crate levels
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "create:save")
        .init();
}
