use serde_json::Value;

use super::args;
use super::{value_to_text, CallArgs, GenContext, GenerateError, GeneratorFn, NamedArgs};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("arrayElement", array_element),
    ("arrayElements", array_elements),
    ("fake", fake_template),
    ("objectKey", object_key),
    ("objectValue", object_value),
    ("rangeToNumber", range_to_number),
    ("replaceSymbols", replace_symbols),
    ("shuffle", shuffle),
    ("slugify", slugify),
];

const MAX_TEMPLATE_PLACEHOLDERS: usize = 64;

fn required_array<'a>(
    call: CallArgs<'a>,
    index: usize,
    name: &str,
) -> Result<&'a Vec<Value>, GenerateError> {
    match call.positional(index) {
        None | Some(Value::Null) => Err(GenerateError::MissingArgument(name.to_string())),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(GenerateError::invalid(name, "expected a JSON array")),
    }
}

fn required_object<'a>(call: CallArgs<'a>, name: &str) -> Result<&'a NamedArgs, GenerateError> {
    match call.positional(0) {
        None | Some(Value::Null) => Err(GenerateError::MissingArgument(name.to_string())),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(GenerateError::invalid(name, "expected a JSON object")),
    }
}

fn required_text<'a>(call: CallArgs<'a>, name: &str) -> Result<&'a str, GenerateError> {
    args::text(call.positional(0), name)?
        .ok_or_else(|| GenerateError::MissingArgument(name.to_string()))
}

fn array_element(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let items = required_array(call, 0, "array")?;
    args::pick(items)
        .cloned()
        .ok_or_else(|| GenerateError::invalid("array", "must not be empty"))
}

fn array_elements(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let items = required_array(call, 0, "array")?;
    let count = match call.positional(1) {
        None | Some(Value::Null) => args::pick_inclusive(1, items.len().max(1) as i64) as usize,
        value => args::length(value, "count", 1)?,
    };
    let mut shuffled = items.clone();
    shuffle_in_place(&mut shuffled);
    shuffled.truncate(count.min(items.len()));
    Ok(Value::Array(shuffled))
}

fn shuffle(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let mut items = required_array(call, 0, "list")?.clone();
    shuffle_in_place(&mut items);
    Ok(Value::Array(items))
}

/// Fisher-Yates over the shared index picker.
fn shuffle_in_place(items: &mut [Value]) {
    for upper in (1..items.len()).rev() {
        let swap_with = args::pick_index(upper + 1);
        items.swap(upper, swap_with);
    }
}

fn slugify(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let text = required_text(call, "string")?;
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' || ch == '_' || ch == '~' {
            slug.push(ch);
        } else if ch.is_whitespace() {
            slug.push('-');
        }
    }
    Ok(Value::String(slug))
}

/// `#` becomes a digit, `?` an uppercase letter, `*` either.
fn replace_symbols(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let text = required_text(call, "string")?;
    let digits: Vec<char> = ('0'..='9').collect();
    let letters: Vec<char> = ('A'..='Z').collect();
    let either: Vec<char> = digits.iter().chain(letters.iter()).copied().collect();
    let replaced: String = text
        .chars()
        .map(|ch| match ch {
            '#' => args::random_chars(&digits, 1),
            '?' => args::random_chars(&letters, 1),
            '*' => args::random_chars(&either, 1),
            other => other.to_string(),
        })
        .collect();
    Ok(Value::String(replaced))
}

fn object_key(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let object = required_object(call, "object")?;
    let keys: Vec<&String> = object.keys().collect();
    args::pick(&keys)
        .map(|key| Value::String((*key).clone()))
        .ok_or_else(|| GenerateError::invalid("object", "must not be empty"))
}

fn object_value(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let object = required_object(call, "object")?;
    let values: Vec<&Value> = object.values().collect();
    args::pick(&values)
        .map(|value| (*value).clone())
        .ok_or_else(|| GenerateError::invalid("object", "must not be empty"))
}

fn range_to_number(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    match call.positional(0) {
        None | Some(Value::Null) => Err(GenerateError::MissingArgument("numberOrRange".to_string())),
        Some(Value::Number(number)) => Ok(Value::Number(number.clone())),
        Some(Value::Object(range)) => {
            let (min, max) = args::int_bounds(range.get("min"), range.get("max"), (0, 0))?;
            Ok(Value::from(args::pick_inclusive(min, max)))
        }
        Some(_) => Err(GenerateError::invalid(
            "numberOrRange",
            "expected a number or {\"min\", \"max\"}",
        )),
    }
}

/// Expands `{{category.module}}` placeholders through the registry.
fn fake_template(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let pattern = required_text(call, "pattern")?;
    let mut output = String::with_capacity(pattern.len());
    let mut rest = pattern;
    let mut expanded = 0usize;

    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            break;
        };
        expanded += 1;
        if expanded > MAX_TEMPLATE_PLACEHOLDERS {
            return Err(GenerateError::invalid(
                "pattern",
                format!("at most {MAX_TEMPLATE_PLACEHOLDERS} placeholders are allowed"),
            ));
        }

        output.push_str(&rest[..start]);
        let path = rest[start + 2..start + 2 + end].trim();
        let (category, module) = path.split_once('.').ok_or_else(|| {
            GenerateError::invalid("pattern", format!("'{path}' is not of the form category.module"))
        })?;
        if category == "helpers" && module == "fake" {
            return Err(GenerateError::invalid("pattern", "templates cannot nest helpers.fake"));
        }
        let value = ctx
            .registry
            .invoke(ctx.locale, category, module, &NamedArgs::new())?;
        output.push_str(&value_to_text(&value));
        rest = &rest[start + 2 + end + 2..];
    }

    output.push_str(rest);
    Ok(Value::String(output))
}
