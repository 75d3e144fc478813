use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{ItemAction, ResultItem};

/// One host invocation: `{"method": "...", "parameters": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginRequest {
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Query,
    ContextMenu,
    Copy,
}

impl Method {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "query" => Some(Self::Query),
            "context_menu" => Some(Self::ContextMenu),
            "copy" => Some(Self::Copy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonRpcAction {
    pub method: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItemDto {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Subtitle")]
    pub subtitle: String,
    #[serde(rename = "JsonRPCAction")]
    pub json_rpc_action: JsonRpcAction,
    #[serde(rename = "ContextData")]
    pub context_data: Vec<String>,
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginResponse {
    pub result: Vec<ResultItemDto>,
}

impl From<ResultItem> for ResultItemDto {
    fn from(value: ResultItem) -> Self {
        let json_rpc_action = JsonRpcAction {
            method: value.action.method().to_string(),
            parameters: vec![value.action.parameter().to_string()],
        };
        Self {
            title: value.title,
            subtitle: value.subtitle,
            json_rpc_action,
            context_data: value.context_data,
            ico_path: value.icon_path,
        }
    }
}

impl From<Vec<ResultItem>> for PluginResponse {
    fn from(items: Vec<ResultItem>) -> Self {
        Self {
            result: items.into_iter().map(ResultItemDto::from).collect(),
        }
    }
}

impl ResultItemDto {
    /// Rebuilds the typed action; `None` for unknown methods or a parameter
    /// count other than one.
    pub fn action(&self) -> Option<ItemAction> {
        let [parameter] = self.json_rpc_action.parameters.as_slice() else {
            return None;
        };
        match self.json_rpc_action.method.as_str() {
            "change_query" => Some(ItemAction::ChangeQuery(parameter.clone())),
            "copy" => Some(ItemAction::Copy(parameter.clone())),
            _ => None,
        }
    }
}
