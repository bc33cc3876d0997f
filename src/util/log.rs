use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use tracing_subscriber::fmt::time::OffsetTime;

/// Where [`setup_log`] sends log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Truncated on setup.
    File(PathBuf),
}

/// Installs the global tracing subscriber. Fails if one is already installed.
pub fn setup_log(target: LogTarget) -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .with_source_location(true)
        .with_timer(timer);
    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .event_format(format)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let logfile = std::fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(&path)
                .with_context(|| format!("opening log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .event_format(format)
                .with_ansi(false)
                .with_writer(logfile)
                .try_init()
        }
    };
    result.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
