use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// Logs go to stderr; stdout carries only the JSON catalog.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
