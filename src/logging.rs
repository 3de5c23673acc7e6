//! Structured logging bootstrap using `tracing`.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "MEDQA_LOG";

const DEFAULT_DIRECTIVES: &str = "warn,medqa_assistant=info,tower_http=info";

/// Install the global subscriber. Events go to stderr; stdout carries replies.
///
/// Source locations are only printed once the filter enables `debug`.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?;
    let directives = filter.to_string();
    let verbose = filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    tracing::debug!(%directives, "tracing initialised");
    Ok(())
}
