use serde_json::Value;

use crate::clipboard::ClipboardWriter;
use crate::config::{validate, Config};
use crate::context_menu;
use crate::contract::{Method, PluginRequest, PluginResponse};
use crate::generators::Registry;
use crate::logging;
use crate::metadata::MetadataTable;
use crate::resolver::Resolver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    InvalidJson(String),
    UnknownMethod(String),
    InvalidParameters(String),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(error) => write!(f, "invalid request json: {error}"),
            Self::UnknownMethod(method) => write!(f, "unknown method: {method}"),
            Self::InvalidParameters(error) => write!(f, "invalid parameters: {error}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value.to_string())
    }
}

pub struct CoreService {
    config: Config,
    registry: Registry,
    metadata: MetadataTable,
    clipboard: Box<dyn ClipboardWriter>,
}

impl CoreService {
    pub fn new(
        config: Config,
        metadata: MetadataTable,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Result<Self, String> {
        validate(&config)?;
        Ok(Self {
            config,
            registry: Registry::new(),
            metadata,
            clipboard,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `Ok(None)` for requests that print nothing (`copy`).
    pub fn handle_request(
        &mut self,
        request: PluginRequest,
    ) -> Result<Option<PluginResponse>, RequestError> {
        let method = Method::parse(&request.method)
            .ok_or_else(|| RequestError::UnknownMethod(request.method.clone()))?;
        match method {
            Method::Query => {
                let query = string_parameter(&request.parameters, "query")?;
                Ok(Some(self.query(query).into()))
            }
            Method::ContextMenu => Ok(Some(self.context_menu(&request.parameters).into())),
            Method::Copy => {
                let text = string_parameter(&request.parameters, "copy")?;
                self.copy(text);
                Ok(None)
            }
        }
    }

    pub fn query(&self, query: &str) -> Vec<crate::model::ResultItem> {
        Resolver::new(&self.registry, &self.metadata, &self.config).resolve(query)
    }

    pub fn context_menu(&self, context_data: &[Value]) -> Vec<crate::model::ResultItem> {
        context_menu::format(context_data, &self.config.icon_path)
    }

    /// Best effort: failures are logged and otherwise ignored.
    pub fn copy(&mut self, text: &str) {
        match self.clipboard.write_text(text) {
            Ok(()) => logging::info(&format!("copied {} chars", text.chars().count())),
            Err(error) => logging::warn(&format!("clipboard write failed: {error}")),
        }
    }
}

/// First parameter as text. A missing parameter reads as empty.
fn string_parameter<'a>(parameters: &'a [Value], method: &str) -> Result<&'a str, RequestError> {
    match parameters.first() {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(RequestError::InvalidParameters(format!(
            "{method} expects a string parameter, got {other}"
        ))),
    }
}
