use fake::Fake;
use serde_json::Value;

use super::args;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("bigInt", big_int),
    ("binary", binary),
    ("float", float),
    ("hex", hex),
    ("int", int),
    ("octal", octal),
];

/// Largest integer a JSON consumer can round-trip through a double.
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

fn int(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let (min, max) = args::int_bounds(call.named("min"), call.named("max"), (0, MAX_SAFE_INTEGER))?;
    let multiple = args::int(call.named("multipleOf"), "multipleOf")?.unwrap_or(1);
    if multiple <= 0 {
        return Err(GenerateError::invalid("multipleOf", "must be positive"));
    }
    let low = ceil_div(min, multiple);
    let high = max.div_euclid(multiple);
    if low > high {
        return Err(GenerateError::invalid(
            "multipleOf",
            format!("no multiple of {multiple} between {min} and {max}"),
        ));
    }
    Ok(Value::from(args::pick_inclusive(low, high) * multiple))
}

fn float(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let (min, max) = args::float_bounds(call.named("min"), call.named("max"), (0.0, 1.0))?;
    let raw: f64 = (min..max).fake();
    let digits = args::int(call.named("fractionDigits"), "fractionDigits")?;
    let value = match digits {
        Some(digits) if !(0..=15).contains(&digits) => {
            return Err(GenerateError::invalid("fractionDigits", "must be between 0 and 15"))
        }
        Some(digits) => {
            let scale = 10f64.powi(digits as i32);
            ((raw * scale).floor() / scale).max(min)
        }
        None => raw,
    };
    Ok(serde_json::json!(value))
}

fn binary(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value = non_negative(call, 1)?;
    Ok(Value::String(format!("{value:b}")))
}

fn octal(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value = non_negative(call, 7)?;
    Ok(Value::String(format!("{value:o}")))
}

fn hex(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value = non_negative(call, 15)?;
    Ok(Value::String(format!("{value:x}")))
}

fn big_int(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: u64 = (0..u64::MAX).fake();
    Ok(Value::String(value.to_string()))
}

fn non_negative(call: CallArgs<'_>, default_max: i64) -> Result<i64, GenerateError> {
    let (min, max) = args::int_bounds(call.named("min"), call.named("max"), (0, default_max))?;
    if min < 0 {
        return Err(GenerateError::invalid("min", "must not be negative"));
    }
    Ok(args::pick_inclusive(min, max))
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

#[cfg(test)]
mod tests {
    use crate::generators::{Locale, Registry};
    use serde_json::json;

    fn invoke(module: &str, args: serde_json::Value) -> serde_json::Value {
        let registry = Registry::new();
        registry
            .invoke(Locale::En, "number", module, args.as_object().unwrap())
            .unwrap()
    }

    #[test]
    fn int_respects_bounds_and_multiple() {
        for _ in 0..50 {
            let value = invoke("int", json!({"min": -10, "max": 10, "multipleOf": 5}));
            let n = value.as_i64().unwrap();
            assert!((-10..=10).contains(&n));
            assert_eq!(n % 5, 0);
        }
    }

    #[test]
    fn int_with_equal_bounds_is_constant() {
        assert_eq!(invoke("int", json!({"min": 7, "max": 7})), json!(7));
    }

    #[test]
    fn float_truncates_fraction_digits() {
        let value = invoke("float", json!({"min": 1, "max": 2, "fractionDigits": 2}));
        let text = value.to_string();
        let decimals = text.split('.').nth(1).map(str::len).unwrap_or(0);
        assert!(decimals <= 2, "too many decimals: {text}");
    }

    #[test]
    fn hex_is_lowercase_hex_text() {
        let value = invoke("hex", json!({"min": 255, "max": 255}));
        assert_eq!(value, json!("ff"));
    }

    #[test]
    fn inverted_int_bounds_fail() {
        let registry = Registry::new();
        let args = json!({"min": 5, "max": 1});
        assert!(registry
            .invoke(Locale::En, "number", "int", args.as_object().unwrap())
            .is_err());
    }

    #[test]
    fn float_with_overflowing_width_fails() {
        let registry = Registry::new();
        let args = json!({"min": -1e308, "max": 1e308});
        let err = registry
            .invoke(Locale::En, "number", "float", args.as_object().unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("too wide"), "{err}");
    }
}
