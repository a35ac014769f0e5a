//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to a size-rotated file and
//! keeps the most recent lines in memory. `log` records are bridged in, so
//! crates using either facade end up in the same file.

mod ring;
mod rolling_file;

use std::fmt::Write as _;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

pub use ring::RingBuffer;
pub use rolling_file::RollingFile;

/// Logger tuning
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Rotate once the live file would exceed this many bytes
    pub max_file_bytes: u64,
    /// Rotated files kept next to the live one
    pub max_files: usize,
    /// Lines kept in memory for `recent_lines`
    pub buffer_lines: usize,
    /// Mirror every line to stderr
    pub echo_stderr: bool,
    pub level: tracing::Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_files: 5,
            buffer_lines: 500,
            echo_stderr: true,
            level: tracing::Level::INFO,
        }
    }
}

struct Sink {
    file: Mutex<RollingFile>,
    recent: Mutex<RingBuffer>,
    echo_stderr: bool,
}

impl Sink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        if self.echo_stderr {
            eprint!("{}", String::from_utf8_lossy(bytes));
        }
        if let Ok(mut recent) = self.recent.lock() {
            for line in String::from_utf8_lossy(bytes).lines() {
                if !line.is_empty() {
                    recent.push(line.to_string());
                }
            }
        }
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_bytes(bytes)?;
        file.flush()
    }
}

static SINK: OnceLock<Arc<Sink>> = OnceLock::new();

struct SinkWriter(Arc<Sink>);

impl io::Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct MakeSinkWriter(Arc<Sink>);

impl<'a> MakeWriter<'a> for MakeSinkWriter {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter(self.0.clone())
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(log_dir: impl AsRef<Path>, app_name: &str, config: LoggerConfig) -> Result<(), String> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, config.max_file_bytes, config.max_files)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    let sink = Arc::new(Sink {
        file: Mutex::new(file),
        recent: Mutex::new(RingBuffer::new(config.buffer_lines)),
        echo_stderr: config.echo_stderr,
    });
    SINK.set(sink.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    tracing_subscriber::fmt()
        .with_writer(MakeSinkWriter(sink))
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))
}

fn ensure_init() -> Result<(), String> {
    SINK.get().map(|_| ()).ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!(target: "app", "{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::warn!(target: "app", "{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!(target: "app", "{}", msg);
    Ok(())
}

/// Most recent lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    SINK.get()
        .and_then(|sink| sink.recent.lock().ok().map(|r| r.lines()))
        .unwrap_or_default()
}
