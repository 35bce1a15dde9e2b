use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "UTILKIT_LOG";

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for tool output and the MCP stream.
/// The filter comes from `UTILKIT_LOG`, then `RUST_LOG`, then `default`.
pub fn init(default: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(default))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
