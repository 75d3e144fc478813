use crate::contract::{PluginRequest, PluginResponse};
use crate::core_service::{CoreService, RequestError};
use crate::logging;
use crate::model::{ItemAction, ResultItem};

pub fn handle_request(
    service: &mut CoreService,
    request: PluginRequest,
) -> Result<Option<PluginResponse>, RequestError> {
    service.handle_request(request)
}

/// Decodes one request and returns the line to print, if any. Request
/// errors become a single `Invalid request` item so the host still gets a
/// well-formed response.
pub fn handle_json(service: &mut CoreService, payload: &str) -> Option<String> {
    let outcome = serde_json::from_str::<PluginRequest>(payload)
        .map_err(RequestError::from)
        .and_then(|request| handle_request(service, request));

    let response = match outcome {
        Ok(Some(response)) => response,
        Ok(None) => return None,
        Err(error) => {
            logging::warn(&format!("rejected request: {error}"));
            invalid_request_response(&error, &service.config().icon_path)
        }
    };

    let encoded = serde_json::to_string(&response).expect("plugin response should serialize");
    Some(escape_non_ascii(&encoded))
}

fn invalid_request_response(error: &RequestError, icon_path: &str) -> PluginResponse {
    let message = error.to_string();
    vec![ResultItem::new(
        "Invalid request",
        message.clone(),
        ItemAction::Copy(message),
        icon_path,
    )]
    .into()
}

/// Escapes every code point >= 0x7F as `\uXXXX` UTF-16 units (lowercase
/// hex). Only string contents can hold such characters, so the result is
/// still valid JSON.
pub fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if (ch as u32) < 0x7F {
            escaped.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            escaped.push_str(&format!("\\u{unit:04x}"));
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_non_ascii;

    #[test]
    fn escapes_delete_and_non_ascii_as_utf16_units() {
        assert_eq!(escape_non_ascii("a\u{7f}"), "a\\u007f");
        assert_eq!(escape_non_ascii("é"), "\\u00e9");
        assert_eq!(escape_non_ascii("😀"), "\\ud83d\\ude00");
        assert_eq!(escape_non_ascii("plain"), "plain");
    }
}
