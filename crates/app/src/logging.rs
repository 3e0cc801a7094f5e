use tracing_subscriber::EnvFilter;

/// Used when neither `--log` nor `DAYMASTER_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,services=info,app=info";

/// Install the global tracing subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if `filter` is not a valid directive or a subscriber is
/// already installed.
pub fn enable_logging(filter: &str) -> Result<(), crate::RunError> {
    let env_filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
}
