use serde_json::Value;

use crate::generators::value_to_text;
use crate::model::{ItemAction, ResultItem};

const PREVIEW_VALUES: usize = 3;
const JSON_PREVIEW_CHARS: usize = 50;

/// Unwraps one level of `[[...]]` nesting, never more.
pub fn unwrap_context_data(context_data: &[Value]) -> Vec<String> {
    let values = match context_data.first() {
        Some(Value::Array(inner)) => inner.as_slice(),
        _ => context_data,
    };
    values.iter().map(value_to_text).collect()
}

pub fn format(context_data: &[Value], icon_path: &str) -> Vec<ResultItem> {
    let data = unwrap_context_data(context_data);
    let json = serde_json::to_string(&data).unwrap_or_else(|_| "[]".to_string());

    let joined = |separator: &str| data.join(separator);
    let preview = |separator: &str| {
        let mut text = data
            .iter()
            .take(PREVIEW_VALUES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(separator);
        if data.len() > PREVIEW_VALUES {
            text.push_str("...");
        }
        text
    };

    let items = vec![
        ResultItem::new(
            "Copy Space Separated",
            preview(" "),
            ItemAction::Copy(joined(" ")),
            icon_path,
        ),
        ResultItem::new(
            "Copy Newline Separated",
            preview("\\n"),
            ItemAction::Copy(joined("\n")),
            icon_path,
        ),
        ResultItem::new(
            "Copy Comma Separated",
            preview(", "),
            ItemAction::Copy(joined(", ")),
            icon_path,
        ),
        ResultItem::new(
            "Copy JSON Formatted",
            json_preview(&json),
            ItemAction::Copy(json.clone()),
            icon_path,
        ),
    ];

    items
        .into_iter()
        .map(|item| item.with_context_data(data.clone()))
        .collect()
}

fn json_preview(json: &str) -> String {
    if json.chars().count() <= JSON_PREVIEW_CHARS {
        return json.to_string();
    }
    let mut preview: String = json.chars().take(JSON_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::{format, json_preview, unwrap_context_data};
    use serde_json::json;

    #[test]
    fn nested_context_data_is_unwrapped_once() {
        let data = [json!(["a", ["b"]])];
        assert_eq!(unwrap_context_data(&data), vec!["a", r#"["b"]"#]);
    }

    #[test]
    fn non_string_entries_are_stringified() {
        let data = [json!(1), json!(true), json!("x")];
        assert_eq!(unwrap_context_data(&data), vec!["1", "true", "x"]);
    }

    #[test]
    fn previews_mark_overflow_beyond_three_values() {
        let data = [json!("a"), json!("b"), json!("c"), json!("d")];
        let items = format(&data, "icon.png");
        assert_eq!(items[0].subtitle, "a b c...");
        assert_eq!(items[1].subtitle, "a\\nb\\nc...");
        assert_eq!(items[2].subtitle, "a, b, c...");
    }

    #[test]
    fn json_preview_appends_ellipsis_only_when_truncated() {
        assert_eq!(json_preview(r#"["a"]"#), r#"["a"]"#);
        let long = format!("[\"{}\"]", "x".repeat(60));
        let preview = json_preview(&long);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }
}
