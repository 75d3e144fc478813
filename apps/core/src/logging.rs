//! Process-wide file logger.
//!
//! Stdout carries the single JSON response line, so every diagnostic,
//! panic messages included, goes to `<log_dir>/fakeflow.log` after [`init`].
//! Before `init` (or when logging is disabled) messages are dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Utc;

const LOG_FILE_NAME: &str = "fakeflow.log";
const ARCHIVE_PREFIX: &str = "fakeflow-";
const MAX_LOG_BYTES: u64 = 1_000_000;
const MAX_ARCHIVES: usize = 5;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static PANIC_HOOK: OnceLock<()> = OnceLock::new();

struct Logger {
    dir: PathBuf,
    sink: Mutex<Sink>,
}

struct Sink {
    file: File,
    written: u64,
}

impl Sink {
    fn open(dir: &Path) -> io::Result<Self> {
        let path = dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata().map(|meta| meta.len()).unwrap_or(0);
        Ok(Self { file, written })
    }
}

/// Opens the log file and installs the panic hook. Effective once per
/// process; later calls keep the first file.
pub fn init(log_dir: &Path) -> io::Result<()> {
    install_panic_hook();
    if LOGGER.get().is_some() {
        return Ok(());
    }

    fs::create_dir_all(log_dir)?;
    rotate_if_needed(&log_dir.join(LOG_FILE_NAME), log_dir)?;
    let sink = Sink::open(log_dir)?;

    let _ = LOGGER.set(Logger {
        dir: log_dir.to_path_buf(),
        sink: Mutex::new(sink),
    });
    Ok(())
}

/// Silences panic output without opening a log file.
pub fn init_silent() {
    install_panic_hook();
}

pub fn info(message: &str) {
    write_line("INFO", message);
}

pub fn warn(message: &str) {
    write_line("WARN", message);
}

pub fn error(message: &str) {
    write_line("ERROR", message);
}

fn write_line(level: &str, message: &str) {
    let Some(logger) = LOGGER.get() else {
        return;
    };
    let Ok(mut sink) = logger.sink.lock() else {
        return;
    };

    let line = format!("{} {level:<5} {message}\n", timestamp());
    if sink.written + line.len() as u64 > MAX_LOG_BYTES {
        if let Ok(fresh) = archive_and_reopen(&logger.dir) {
            *sink = fresh;
        }
    }
    if sink.file.write_all(line.as_bytes()).is_ok() {
        sink.written += line.len() as u64;
    }
    let _ = sink.file.flush();
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn archive_and_reopen(dir: &Path) -> io::Result<Sink> {
    archive(&dir.join(LOG_FILE_NAME), dir)?;
    Sink::open(dir)
}

fn rotate_if_needed(log_path: &Path, log_dir: &Path) -> io::Result<()> {
    match fs::metadata(log_path) {
        Ok(meta) if meta.len() >= MAX_LOG_BYTES => archive(log_path, log_dir),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

fn archive(log_path: &Path, log_dir: &Path) -> io::Result<()> {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
    fs::rename(log_path, log_dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log")))?;
    prune_old_archives(log_dir)
}

/// Archive names sort chronologically, so the oldest come first.
fn prune_old_archives(log_dir: &Path) -> io::Result<()> {
    let mut archives: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_archive(path))
        .collect();
    if archives.len() <= MAX_ARCHIVES {
        return Ok(());
    }

    archives.sort();
    let excess = archives.len() - MAX_ARCHIVES;
    for oldest in &archives[..excess] {
        let _ = fs::remove_file(oldest);
    }
    Ok(())
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}

// The default hook is not chained: panics are recorded only in the log.
fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|at| format!("{}:{}", at.file(), at.line()))
                .unwrap_or_else(|| "unknown".to_string());
            let payload = info.payload();
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .map(str::to_string)
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            error(&format!("panic at {location}: {message}"));
        }));
    });
}
