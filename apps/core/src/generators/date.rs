use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

use super::args;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("anytime", anytime),
    ("between", between),
    ("birthdate", birthdate),
    ("future", future),
    ("month", month),
    ("past", past),
    ("recent", recent),
    ("soon", soon),
    ("weekday", weekday),
];

const DAY_MS: i64 = 86_400_000;
const YEAR_MS: i64 = 365 * DAY_MS;
const MAX_SPAN_YEARS: i64 = 10_000;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn past(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let reference = reference_ms(call)?;
    let span = span_ms(call.named("years"), "years", 1, YEAR_MS)?;
    between_ms(offset(reference, -span)?, offset(reference, -1)?)
}

fn future(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let reference = reference_ms(call)?;
    let span = span_ms(call.named("years"), "years", 1, YEAR_MS)?;
    between_ms(offset(reference, 1)?, offset(reference, span)?)
}

fn recent(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let reference = reference_ms(call)?;
    let span = span_ms(call.named("days"), "days", 1, DAY_MS)?;
    between_ms(offset(reference, -span)?, offset(reference, -1)?)
}

fn soon(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let reference = reference_ms(call)?;
    let span = span_ms(call.named("days"), "days", 1, DAY_MS)?;
    between_ms(offset(reference, 1)?, offset(reference, span)?)
}

fn anytime(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let reference = reference_ms(call)?;
    between_ms(offset(reference, -YEAR_MS)?, offset(reference, YEAR_MS)?)
}

fn between(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let from = required_date(call.named("from"), "from")?;
    let to = required_date(call.named("to"), "to")?;
    if from > to {
        return Err(GenerateError::invalid("to", "must not be earlier than 'from'"));
    }
    between_ms(from, to)
}

fn birthdate(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let (min_age, max_age) = args::int_bounds(call.named("min"), call.named("max"), (18, 80))?;
    if min_age < 0 || max_age > 200 {
        return Err(GenerateError::invalid("max", "ages must lie within 0..200"));
    }
    let reference = reference_ms(call)?;
    let earliest = offset(reference, DAY_MS - (max_age + 1) * YEAR_MS)?;
    let latest = offset(reference, -min_age * YEAR_MS)?;
    let value = pick_ms(earliest, latest)?;
    Ok(Value::String(value.format("%Y-%m-%d").to_string()))
}

fn month(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    calendar_name(call, &MONTHS)
}

fn weekday(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    calendar_name(call, &WEEKDAYS)
}

fn calendar_name(call: CallArgs<'_>, names: &[&str]) -> Result<Value, GenerateError> {
    let abbreviated = args::boolean(call.named("abbreviated"), "abbreviated")?.unwrap_or(false);
    let name = args::pick(names).copied().unwrap_or_default();
    let value: String = if abbreviated {
        name.chars().take(3).collect()
    } else {
        name.to_string()
    };
    Ok(Value::String(value))
}

fn reference_ms(call: CallArgs<'_>) -> Result<i64, GenerateError> {
    match call.named("refDate") {
        None | Some(Value::Null) => Ok(Utc::now().timestamp_millis()),
        value => required_date(value, "refDate"),
    }
}

/// `reference + delta`, or an error when the sum leaves the `i64` range.
fn offset(reference: i64, delta: i64) -> Result<i64, GenerateError> {
    reference
        .checked_add(delta)
        .ok_or_else(|| GenerateError::invalid("refDate", "date out of range"))
}

fn span_ms(
    value: Option<&Value>,
    name: &str,
    default: i64,
    unit_ms: i64,
) -> Result<i64, GenerateError> {
    let amount = args::int(value, name)?.unwrap_or(default);
    if amount <= 0 {
        return Err(GenerateError::invalid(name, "must be positive"));
    }
    amount
        .checked_mul(unit_ms)
        .filter(|span| *span <= MAX_SPAN_YEARS * YEAR_MS)
        .ok_or_else(|| {
            GenerateError::invalid(name, format!("span must not exceed {MAX_SPAN_YEARS} years"))
        })
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` dates, or epoch milliseconds.
pub(super) fn required_date(value: Option<&Value>, name: &str) -> Result<i64, GenerateError> {
    match value {
        None | Some(Value::Null) => Err(GenerateError::MissingArgument(name.to_string())),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| GenerateError::invalid(name, "expected epoch milliseconds")),
        Some(Value::String(text)) => parse_date_text(text)
            .map(|date| date.timestamp_millis())
            .ok_or_else(|| GenerateError::invalid(name, format!("unrecognized date '{text}'"))),
        Some(_) => Err(GenerateError::invalid(name, "expected a date")),
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

fn pick_ms(from: i64, to: i64) -> Result<DateTime<Utc>, GenerateError> {
    let ms = args::pick_inclusive(from.min(to), to.max(from));
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| GenerateError::invalid("refDate", "date out of range"))
}

fn between_ms(from: i64, to: i64) -> Result<Value, GenerateError> {
    let value = pick_ms(from, to)?;
    Ok(Value::String(
        value.to_rfc3339_opts(SecondsFormat::Millis, true),
    ))
}

#[cfg(test)]
mod tests {
    use super::required_date;
    use crate::generators::{Locale, Registry};
    use serde_json::json;

    fn invoke(module: &str, args: serde_json::Value) -> String {
        let registry = Registry::new();
        registry
            .invoke(Locale::En, "date", module, args.as_object().unwrap())
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn between_stays_inside_window() {
        for _ in 0..20 {
            let value = invoke("between", json!({"from": "2020-01-01", "to": "2020-01-02"}));
            assert!(value.starts_with("2020-01-0"), "{value}");
            assert!(value.ends_with('Z'));
        }
    }

    #[test]
    fn past_precedes_reference_date() {
        let value = invoke("past", json!({"refDate": "2000-06-15T00:00:00Z", "years": 1}));
        assert!(value.starts_with("1999") || value.starts_with("2000"), "{value}");
    }

    #[test]
    fn birthdate_is_plain_date() {
        let value = invoke("birthdate", json!({"min": 30, "max": 30, "refDate": "2020-01-01"}));
        assert_eq!(value.len(), 10);
        assert!(value.starts_with("1989") || value.starts_with("1990"), "{value}");
    }

    #[test]
    fn missing_between_bounds_fail() {
        let registry = Registry::new();
        let err = registry
            .invoke(Locale::En, "date", "between", json!({"from": "2020-01-01"}).as_object().unwrap())
            .unwrap_err();
        assert_eq!(err.to_string(), "missing required argument 'to'");
    }

    #[test]
    fn dates_parse_from_rfc3339_and_plain_forms() {
        assert_eq!(required_date(Some(&json!("1970-01-02")), "d").unwrap(), 86_400_000);
        assert_eq!(
            required_date(Some(&json!("1970-01-01T00:00:01Z")), "d").unwrap(),
            1_000
        );
        assert!(required_date(Some(&json!("soon")), "d").is_err());
    }

    #[test]
    fn extreme_reference_dates_fail_instead_of_overflowing() {
        let registry = Registry::new();
        for module in ["past", "recent", "anytime", "birthdate"] {
            let args = json!({"refDate": -9_223_372_036_854_775_807i64});
            let err = registry
                .invoke(Locale::En, "date", module, args.as_object().unwrap())
                .unwrap_err();
            assert_eq!(err.to_string(), "invalid argument 'refDate': date out of range");
        }
        for module in ["future", "soon"] {
            let args = json!({"refDate": i64::MAX});
            let err = registry
                .invoke(Locale::En, "date", module, args.as_object().unwrap())
                .unwrap_err();
            assert_eq!(err.to_string(), "invalid argument 'refDate': date out of range");
        }
    }

    #[test]
    fn abbreviated_weekday_has_three_letters() {
        let value = invoke("weekday", json!({"abbreviated": true}));
        assert_eq!(value.len(), 3);
    }
}
