use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use anyhow::{Context, Result};

/// Optional log file shared by every writer the subscriber creates.
#[derive(Clone, Default)]
struct LogSink {
    file: Arc<Mutex<Option<File>>>,
}

/// Writes each formatted event to stderr and, when set, to the log file.
struct TeeWriter {
    sink: LogSink,
}

impl LogSink {
    fn replace(&self, file: Option<File>) {
        *self.file.lock().unwrap_or_else(|e| e.into_inner()) = file;
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogSink {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter { sink: self.clone() }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        let mut file = self.sink.file.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(file) = file.as_mut() {
            // A broken log file must not take stderr logging down with it.
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = self
            .sink
            .file
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_mut()
        {
            let _ = file.flush();
        }
        Ok(())
    }
}

static SINK: OnceLock<LogSink> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
/// Calling it more than once is harmless.
pub fn init() {
    let _ = tracing_log::LogTracer::init();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let sink = SINK.get_or_init(LogSink::default).clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(sink)
        .try_init();
}

/// Start appending log output to `path`, or stop with `None`.
pub fn set_log_file(path: Option<&Path>) -> Result<()> {
    let Some(sink) = SINK.get() else {
        return Ok(());
    };
    let file = match path {
        Some(path) => Some(open_log_file(path)?),
        None => None,
    };
    sink.replace(file);
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
