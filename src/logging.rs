use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

// Filter for `directive`, or `info` plus the parse error when it is invalid.
fn build_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    }
}

/// Install a fmt subscriber filtered by `directive` (e.g. `"info"` or
/// `"vault_fallback=debug"`). Returns `false` if a global subscriber was
/// already set. An unparsable directive falls back to `info` and is reported
/// as a warning through the installed subscriber.
pub fn init(directive: &str) -> bool {
    let (filter, invalid) = build_filter(directive);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if let Some(e) = invalid {
        tracing::warn!(directive, error = %e, "invalid log filter, using `info`");
    }
    installed
}
