use fake::faker::color::raw as color;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("hsl", hsl),
    ("human", human),
    ("rgb", rgb),
];

fn human(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => color::Color(l).fake());
    Ok(Value::String(value))
}

fn rgb(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let include_alpha = args::boolean(call.named("includeAlpha"), "includeAlpha")?.unwrap_or(false);
    let value: String = match args::text(call.named("format"), "format")?.unwrap_or("hex") {
        "hex" => localized!(ctx.locale, l => color::HexColor(l).fake()),
        "css" if include_alpha => localized!(ctx.locale, l => color::RgbaColor(l).fake()),
        "css" => localized!(ctx.locale, l => color::RgbColor(l).fake()),
        _ => return Err(GenerateError::invalid("format", "expected 'hex' or 'css'")),
    };
    let casing = args::text(call.named("casing"), "casing")?.unwrap_or("lower");
    match casing {
        "lower" => Ok(Value::String(value.to_ascii_lowercase())),
        "upper" => Ok(Value::String(value.to_ascii_uppercase())),
        _ => Err(GenerateError::invalid("casing", "expected 'lower' or 'upper'")),
    }
}

fn hsl(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let include_alpha = args::boolean(call.named("includeAlpha"), "includeAlpha")?.unwrap_or(false);
    let value: String = if include_alpha {
        localized!(ctx.locale, l => color::HslaColor(l).fake())
    } else {
        localized!(ctx.locale, l => color::HslColor(l).fake())
    };
    Ok(Value::String(value))
}

#[cfg(test)]
mod tests {
    use crate::generators::{Locale, NamedArgs, Registry};

    #[test]
    fn default_rgb_is_lowercase_hex() {
        let registry = Registry::new();
        let value = registry
            .invoke(Locale::En, "color", "rgb", &NamedArgs::new())
            .unwrap();
        let text = value.as_str().unwrap();
        assert!(text.starts_with('#'), "{text}");
        assert_eq!(text, text.to_ascii_lowercase());
    }
}
