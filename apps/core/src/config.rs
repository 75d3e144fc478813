use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::generators::Locale;

pub const PLUGIN_DIR_ENV: &str = "FAKEFLOW_PLUGIN_DIR";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const METADATA_FILE_NAME: &str = "metadata.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub plugin_dir: PathBuf,
    pub metadata_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_dir: PathBuf,
    pub icon_path: String,
    pub action_keyword: String,
    pub default_locale: Locale,
    pub logging_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_plugin_dir(&std::env::temp_dir().join("fakeflow"))
    }
}

impl Config {
    pub fn for_plugin_dir(plugin_dir: &Path) -> Self {
        Self {
            plugin_dir: plugin_dir.to_path_buf(),
            metadata_path: plugin_dir.join(METADATA_FILE_NAME),
            settings_path: plugin_dir.join(SETTINGS_FILE_NAME),
            log_dir: plugin_dir.join("logs"),
            icon_path: "Images\\app.png".to_string(),
            action_keyword: "fake".to_string(),
            default_locale: Locale::En,
            logging_enabled: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "failed to read settings: {error}"),
            Self::Parse(error) => write!(f, "failed to parse settings: {error}"),
            Self::Invalid(error) => write!(f, "invalid settings: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    action_keyword: Option<String>,
    icon_path: Option<String>,
    default_locale: Option<String>,
    metadata_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    logging_enabled: Option<bool>,
}

/// Plugin directory: `FAKEFLOW_PLUGIN_DIR` when set, else the executable's
/// directory, else the working directory.
pub fn plugin_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(PLUGIN_DIR_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load(plugin_dir: &Path) -> Result<Config, ConfigError> {
    let mut config = Config::for_plugin_dir(plugin_dir);
    let raw = match std::fs::read_to_string(&config.settings_path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(config),
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let settings: SettingsFile =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    apply_settings(&mut config, settings)?;
    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

fn apply_settings(config: &mut Config, settings: SettingsFile) -> Result<(), ConfigError> {
    if let Some(keyword) = settings.action_keyword {
        config.action_keyword = keyword.trim().to_string();
    }
    if let Some(icon_path) = settings.icon_path {
        config.icon_path = icon_path;
    }
    if let Some(tag) = settings.default_locale {
        config.default_locale = Locale::parse(&tag)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown default_locale '{tag}'")))?;
    }
    if let Some(path) = settings.metadata_path {
        config.metadata_path = resolve(&config.plugin_dir, path);
    }
    if let Some(path) = settings.log_dir {
        config.log_dir = resolve(&config.plugin_dir, path);
    }
    if let Some(enabled) = settings.logging_enabled {
        config.logging_enabled = enabled;
    }
    Ok(())
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.action_keyword.trim().is_empty() {
        return Err("action_keyword is required".into());
    }

    if cfg.action_keyword.contains(char::is_whitespace) {
        return Err("action_keyword must be a single word".into());
    }

    if cfg.icon_path.trim().is_empty() {
        return Err("icon_path is required".into());
    }

    Ok(())
}
