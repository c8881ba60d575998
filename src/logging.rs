use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. `level` applies to this crate only.
pub fn init(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(format!("claude_notifier={level}"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("claude_notifier=warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
