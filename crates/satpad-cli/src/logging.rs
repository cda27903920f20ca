//! Log output for the CLI
//!
//! Events are filtered by `RUST_LOG` when set, otherwise by the verbosity
//! flags. While the terminal keypad owns the screen, logs go to the log
//! file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use console::style;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Compact one-line event format: level marker, target, fields
#[derive(Debug, Clone, Copy)]
pub struct SatpadFormatter {
    color: bool,
}

impl SatpadFormatter {
    /// Creates a formatter
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

/// Marker printed before each event
#[must_use]
pub const fn level_marker(level: Level) -> &'static str {
    match level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

impl<S, N> FormatEvent<S, N> for SatpadFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let marker = style(level_marker(*meta.level())).force_styling(self.color);
        let marker = match *meta.level() {
            Level::TRACE => marker.dim(),
            Level::DEBUG => marker.blue(),
            Level::INFO => marker.green().bold(),
            Level::WARN => marker.yellow().bold(),
            Level::ERROR => marker.red().bold(),
        };
        let target = style(meta.target()).force_styling(self.color).dim();

        write!(writer, "{marker} {target} ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// With `screen_owned` set and no log file, nothing is installed so the
/// terminal UI is not overdrawn.
pub fn init(config: &CliConfig, screen_owned: bool) -> CliResult<()> {
    let result = match (&config.log_file, screen_owned) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .event_format(SatpadFormatter::new(false))
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, true) => return Ok(()),
        (None, false) => tracing_subscriber::fmt()
            .with_env_filter(filter(config))
            .event_format(SatpadFormatter::new(config.color.should_color()))
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}

fn open_log_file(path: &Path) -> CliResult<std::fs::File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
