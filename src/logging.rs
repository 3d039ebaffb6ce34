use std::io;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn configure_logging() {
    // Logs go to stderr so the JSON document owns stdout
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,web_request=warn,shape=warn")),
        );

    tracing_subscriber::Registry::default().with(stderr_log).init();
}
