use fake::uuid::UUIDv4;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("alpha", alpha),
    ("alphanumeric", alphanumeric),
    ("hexadecimal", hexadecimal),
    ("nanoid", nanoid),
    ("numeric", numeric),
    ("sample", sample),
    ("symbol", symbol),
    ("uuid", uuid),
];

const DIGITS: &str = "0123456789";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const NANOID_ALPHABET: &str =
    "useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    Upper,
    Lower,
    Mixed,
}

fn casing(call: CallArgs<'_>, default: Casing) -> Result<Casing, GenerateError> {
    match args::text(call.named("casing"), "casing")? {
        None => Ok(default),
        Some("upper") => Ok(Casing::Upper),
        Some("lower") => Ok(Casing::Lower),
        Some("mixed") => Ok(Casing::Mixed),
        Some(_) => Err(GenerateError::invalid(
            "casing",
            "expected 'upper', 'lower' or 'mixed'",
        )),
    }
}

fn letters(casing: Casing) -> String {
    match casing {
        Casing::Upper => UPPER.to_string(),
        Casing::Lower => LOWER.to_string(),
        Casing::Mixed => format!("{UPPER}{LOWER}"),
    }
}

/// Drops every character listed in the `exclude` arg from the alphabet.
fn alphabet(call: CallArgs<'_>, base: String) -> Result<Vec<char>, GenerateError> {
    let excluded: Vec<char> = match call.named("exclude") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(text)) => text.chars().collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(str::chars)
            .collect(),
        Some(_) => return Err(GenerateError::invalid("exclude", "expected text or a list")),
    };
    let chars: Vec<char> = base.chars().filter(|ch| !excluded.contains(ch)).collect();
    if chars.is_empty() {
        return Err(GenerateError::invalid("exclude", "excludes every character"));
    }
    Ok(chars)
}

fn alpha(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 1)?;
    let chars = alphabet(call, letters(casing(call, Casing::Mixed)?))?;
    Ok(Value::String(args::random_chars(&chars, length)))
}

fn alphanumeric(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 1)?;
    let base = format!("{}{DIGITS}", letters(casing(call, Casing::Mixed)?));
    let chars = alphabet(call, base)?;
    Ok(Value::String(args::random_chars(&chars, length)))
}

fn numeric(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 1)?;
    let leading_zeros =
        args::boolean(call.named("allowLeadingZeros"), "allowLeadingZeros")?.unwrap_or(true);
    let chars = alphabet(call, DIGITS.to_string())?;
    let mut value = String::with_capacity(length);
    if length > 0 && !leading_zeros {
        let first: Vec<char> = chars.iter().copied().filter(|ch| *ch != '0').collect();
        if first.is_empty() {
            return Err(GenerateError::invalid(
                "allowLeadingZeros",
                "no non-zero digit left to lead with",
            ));
        }
        value.push_str(&args::random_chars(&first, 1));
        value.push_str(&args::random_chars(&chars, length - 1));
    } else {
        value.push_str(&args::random_chars(&chars, length));
    }
    Ok(Value::String(value))
}

fn hexadecimal(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 1)?;
    let prefix = args::text(call.named("prefix"), "prefix")?.unwrap_or("0x");
    let digits = match casing(call, Casing::Mixed)? {
        Casing::Upper => "0123456789ABCDEF".to_string(),
        Casing::Lower => "0123456789abcdef".to_string(),
        Casing::Mixed => "0123456789abcdefABCDEF".to_string(),
    };
    let chars: Vec<char> = digits.chars().collect();
    Ok(Value::String(format!(
        "{prefix}{}",
        args::random_chars(&chars, length)
    )))
}

fn nanoid(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 21)?;
    let chars: Vec<char> = NANOID_ALPHABET.chars().collect();
    Ok(Value::String(args::random_chars(&chars, length)))
}

fn sample(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 10)?;
    let chars: Vec<char> = (33u8..=125).map(char::from).collect();
    Ok(Value::String(args::random_chars(&chars, length)))
}

fn symbol(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 1)?;
    let chars: Vec<char> = SYMBOLS.chars().collect();
    Ok(Value::String(args::random_chars(&chars, length)))
}

fn uuid(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: ::uuid::Uuid = UUIDv4.fake();
    Ok(Value::String(value.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::generators::{Locale, Registry};
    use serde_json::json;

    fn invoke(module: &str, args: serde_json::Value) -> String {
        let registry = Registry::new();
        registry
            .invoke(Locale::En, "string", module, args.as_object().unwrap())
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn alpha_respects_length_and_casing() {
        let value = invoke("alpha", json!({"length": 12, "casing": "upper"}));
        assert_eq!(value.len(), 12);
        assert!(value.chars().all(|ch| ch.is_ascii_uppercase()));
    }

    #[test]
    fn numeric_without_leading_zero() {
        for _ in 0..20 {
            let value = invoke("numeric", json!({"length": 6, "allowLeadingZeros": false}));
            assert_eq!(value.len(), 6);
            assert!(!value.starts_with('0'));
        }
    }

    #[test]
    fn exclude_removes_characters() {
        let value = invoke("alpha", json!({"length": 40, "casing": "lower", "exclude": "abc"}));
        assert!(!value.contains(['a', 'b', 'c']));
    }

    #[test]
    fn uuid_has_canonical_shape() {
        let value = invoke("uuid", json!({}));
        assert_eq!(value.len(), 36);
        assert_eq!(value.matches('-').count(), 4);
    }

    #[test]
    fn hexadecimal_uses_prefix() {
        let value = invoke("hexadecimal", json!({"length": 4, "prefix": "#", "casing": "lower"}));
        assert!(value.starts_with('#'));
        assert_eq!(value.len(), 5);
    }
}
