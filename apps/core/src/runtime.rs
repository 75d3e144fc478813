use std::io::Write;

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::{self, Config};
use crate::core_service::CoreService;
use crate::logging;
use crate::metadata::MetadataTable;
use crate::transport::handle_json;

#[derive(Debug)]
pub enum RuntimeError {
    Service(String),
    Output(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Output(error) => write!(f, "failed to write response: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

/// Entry point for one host invocation. `args` excludes the program name.
pub fn run(args: &[String]) -> Result<(), RuntimeError> {
    let plugin_dir = config::plugin_dir();
    let (config, config_error) = match config::load(&plugin_dir) {
        Ok(config) => (config, None),
        Err(error) => (Config::for_plugin_dir(&plugin_dir), Some(error)),
    };

    init_logging(&config);
    if let Some(error) = config_error {
        logging::warn(&format!("{error}; using default settings"));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(
        config,
        args.first().map(String::as_str),
        Box::new(SystemClipboard),
        &mut out,
    )
}

/// Everything after config and logging setup, with the clipboard and the
/// output stream supplied by the caller.
pub fn run_with(
    config: Config,
    payload: Option<&str>,
    clipboard: Box<dyn ClipboardWriter>,
    out: &mut dyn Write,
) -> Result<(), RuntimeError> {
    let metadata = MetadataTable::load_or_empty(&config.metadata_path);
    let mut service = CoreService::new(config, metadata, clipboard).map_err(RuntimeError::Service)?;

    // A missing argument decodes like any other malformed request.
    let payload = payload.unwrap_or_default();
    logging::info(&format!("request bytes={}", payload.len()));

    if let Some(line) = handle_json(&mut service, payload) {
        writeln!(out, "{line}")?;
        out.flush()?;
    }
    Ok(())
}

fn init_logging(config: &Config) {
    if !config.logging_enabled {
        logging::init_silent();
        return;
    }
    if logging::init(&config.log_dir).is_err() {
        logging::init_silent();
    }
}
