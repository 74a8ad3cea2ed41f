use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::logging::LogFormat;

/// Install the global subscriber for the binary. Logs go to stderr so
/// command output on stdout stays clean.
pub fn init_tracing(format: LogFormat, verbose: bool) {
    let default_filter = if verbose { "scorekeeper=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(base.with_ansi(false).json()).init(),
        LogFormat::Pretty => registry.with(base.without_time()).init(),
    }
}
