use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Events go to stderr because stdout carries
/// the protocol.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("highlight_svg_mcp=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .with(filter)
        .init();
}
