//! Tracing setup for the calculator binary.
//!
//! Stdout gets colored output when attached to a terminal and plain output
//! when piped; an optional append-mode log file gets the same records
//! without ANSI codes. `RUST_LOG` overrides the default `info` level unless
//! an explicit filter is passed on the command line.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Local wall-clock timestamps for log lines.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(
        &self,
        w: &mut Writer<'_>,
    ) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(spec) => {
            EnvFilter::try_new(spec).with_context(|| format!("invalid log level '{spec}'"))
        }
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Initializes logging. Call once at startup, before the window opens.
pub fn init(
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = make_filter(level)?;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_ansi(io::stdout().is_terminal());

    let file_layer = log_file
        .map(|path| {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Ok::<_, anyhow::Error>(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .boxed(),
            )
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}
