use tracing_subscriber::EnvFilter;
use crate::app_system::SystemConfig;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the config's filter applies. A second
/// call leaves the first subscriber in place and reports that on stderr.
///
/// ```text
/// RUST_LOG=debug cargo run                                   # every catalog page
/// RUST_LOG=order_orchestrator::orchestrator=debug cargo run  # orchestration only
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();

    // No subscriber means no tracing output, so this goes to stderr directly.
    if let Err(e) = installed {
        eprintln!("tracing subscriber not installed: {}", e);
    }
}
