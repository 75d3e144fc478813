use serde_json::{Number, Value};

use crate::generators::{Locale, NamedArgs};

/// Bare tokens beyond this many are counted but not kept.
pub const MAX_POSITIONAL: usize = 2;

pub const MAX_REPEAT: usize = 1_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub locale: Locale,
    pub repeat: usize,
    pub named_args: NamedArgs,
    pub positional: Vec<String>,
    pub extra_positional: usize,
    pub trailing_space: bool,
}

impl Default for ParsedQuery {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            repeat: 1,
            named_args: NamedArgs::new(),
            positional: Vec::new(),
            extra_positional: 0,
            trailing_space: false,
        }
    }
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        Self::parse_with_locale(query, Locale::default())
    }

    /// `default_locale` applies when no `lang:` token is present.
    pub fn parse_with_locale(query: &str, default_locale: Locale) -> Self {
        let mut parsed = Self {
            locale: default_locale,
            trailing_space: query.ends_with(' '),
            ..Self::default()
        };

        for token in tokenize(query) {
            let Some((key, raw_value)) = token.split_once(':') else {
                if parsed.positional.len() < MAX_POSITIONAL {
                    parsed.positional.push(token);
                } else {
                    parsed.extra_positional += 1;
                }
                continue;
            };

            let value = strip_matching_quotes(raw_value);
            match key {
                "lang" => parsed.locale = Locale::from_tag_or_default(value),
                "repeat" => parsed.repeat = parse_repeat(value),
                _ => {
                    parsed.named_args.insert(key.to_string(), coerce_value(value));
                }
            }
        }

        parsed
    }

    pub fn category(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }

    pub fn module(&self) -> Option<&str> {
        self.positional.get(1).map(String::as_str)
    }
}

/// Splits on spaces outside quotes. Quote characters stay in the token and an
/// unmatched quote is ordinary content.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        if ch == ' ' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            index += 1;
            continue;
        }

        if ch == '"' || ch == '\'' {
            if let Some(offset) = chars[index + 1..].iter().position(|c| *c == ch) {
                let close = index + 1 + offset;
                current.extend(&chars[index..=close]);
                index = close + 1;
                continue;
            }
        }

        current.push(ch);
        index += 1;
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_repeat(value: &str) -> usize {
    match value.trim().parse::<i64>() {
        Ok(count) if count > 0 => (count as usize).min(MAX_REPEAT),
        _ => 1,
    }
}

/// Number, then `true`/`false`, then JSON for `{`/`[` values, then raw text.
pub fn coerce_value(value: &str) -> Value {
    if let Some(number) = parse_number(value) {
        return Value::Number(number);
    }
    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    let trimmed = value.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
            return parsed;
        }
    }

    Value::String(value.to_string())
}

fn parse_number(value: &str) -> Option<Number> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }
    // Rust also accepts "inf"/"nan" spellings; only plain decimal literals count.
    let looks_numeric = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return None;
    }
    let float = trimmed.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        return Some(Number::from(float as i64));
    }
    Number::from_f64(float)
}
