//! Process-wide logging: a console layer on stderr and an optional log file,
//! both under one level filter that can be changed at runtime.

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, reload};

const DEFAULT_FILTER: &str = "info";

// ─── line format ─────────────────────────────────────────────────────────────

/// `<local time> <level> <target> <fields>`, colored on a terminal.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {}{:>5}\x1b[0m \x1b[36m{}\x1b[0m ",
                level_color(meta.level()),
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {} ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

// ─── log file ────────────────────────────────────────────────────────────────

/// Log file sink that can be opened after the subscriber is installed.
/// Output is dropped until a file is set.
#[derive(Clone, Default)]
struct LogFile(Arc<Mutex<Option<File>>>);

impl LogFile {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(
        &self,
        file: File,
    ) {
        *self.lock() = Some(file);
    }
}

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.lock())
    }
}

// ─── runtime controls ────────────────────────────────────────────────────────

type Reloader = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Controls {
    level: Reloader,
    console: Reloader,
    file: LogFile,
}

static CONTROLS: OnceLock<Controls> = OnceLock::new();

fn controls() -> Result<&'static Controls> {
    CONTROLS.get().context("logging not yet initialized")
}

fn reloader<S>(handle: reload::Handle<EnvFilter, S>) -> Reloader
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("log filter reload failed: {e}"))
    })
}

/// Replaces the level filter. Takes a bare level (`debug`) or any
/// `EnvFilter` directive (`avocado_gateway_http=trace`).
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;
    (controls()?.level)(filter)
}

/// Turns console output on or off. The log file is unaffected.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    let gate = if enabled { "trace" } else { "off" };
    (controls()?.console)(EnvFilter::new(gate))
}

/// Appends log output to `path`, replacing any file already in use.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let controls = controls()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;
    controls.file.replace(file);
    Ok(())
}

/// Installs the global subscriber. Later calls are ignored.
///
/// Console output goes to stderr so it never mixes with the form on stdout.
/// The level comes from `RUST_LOG`, or `info` when unset.
pub fn init_default_logging() {
    let file = LogFile::default();
    let (level_filter, level_handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    );
    let (console_gate, console_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let console = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(console_gate);
    let log_file = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(file.clone());

    let installed = tracing_subscriber::registry()
        .with(level_filter)
        .with(console)
        .with(log_file)
        .try_init();

    if installed.is_ok() {
        let _ = CONTROLS.set(Controls {
            level: reloader(level_handle),
            console: reloader(console_handle),
            file,
        });
    }
}
