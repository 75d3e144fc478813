use fake::Fake;
use serde_json::Value;

use super::GenerateError;

/// Lengths above this are rejected so one query cannot allocate unbounded text.
pub(super) const MAX_LENGTH: usize = 10_000;

pub(super) fn int(value: Option<&Value>, name: &str) -> Result<Option<i64>, GenerateError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
            .map(Some)
            .ok_or_else(|| GenerateError::invalid(name, "expected an integer")),
        Some(_) => Err(GenerateError::invalid(name, "expected an integer")),
    }
}

pub(super) fn float(value: Option<&Value>, name: &str) -> Result<Option<f64>, GenerateError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| GenerateError::invalid(name, "expected a number")),
        Some(_) => Err(GenerateError::invalid(name, "expected a number")),
    }
}

pub(super) fn boolean(value: Option<&Value>, name: &str) -> Result<Option<bool>, GenerateError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(GenerateError::invalid(name, "expected true or false")),
    }
}

pub(super) fn text<'a>(value: Option<&'a Value>, name: &str) -> Result<Option<&'a str>, GenerateError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(_) => Err(GenerateError::invalid(name, "expected text")),
    }
}

pub(super) fn length(
    value: Option<&Value>,
    name: &str,
    default: usize,
) -> Result<usize, GenerateError> {
    let Some(raw) = int(value, name)? else {
        return Ok(default);
    };
    if raw < 0 {
        return Err(GenerateError::invalid(name, "must not be negative"));
    }
    let length = raw as usize;
    if length > MAX_LENGTH {
        return Err(GenerateError::invalid(
            name,
            format!("must be at most {MAX_LENGTH}"),
        ));
    }
    Ok(length)
}

/// Resolves an inclusive `min..=max` pair, rejecting inverted bounds.
pub(super) fn int_bounds(
    min: Option<&Value>,
    max: Option<&Value>,
    default: (i64, i64),
) -> Result<(i64, i64), GenerateError> {
    let min = int(min, "min")?.unwrap_or(default.0);
    let max = int(max, "max")?.unwrap_or(default.1);
    if min > max {
        return Err(GenerateError::invalid(
            "max",
            format!("max {max} is less than min {min}"),
        ));
    }
    Ok((min, max))
}

/// Resolves a half-open `min..max` float range whose width is finite.
pub(super) fn float_bounds(
    min: Option<&Value>,
    max: Option<&Value>,
    default: (f64, f64),
) -> Result<(f64, f64), GenerateError> {
    let min = float(min, "min")?.unwrap_or(default.0);
    let max = float(max, "max")?.unwrap_or(default.1);
    if min >= max {
        return Err(GenerateError::invalid(
            "max",
            format!("max {max} must be greater than min {min}"),
        ));
    }
    if !(max - min).is_finite() {
        return Err(GenerateError::invalid(
            "max",
            format!("range {min}..{max} is too wide"),
        ));
    }
    Ok((min, max))
}

/// A count given either as `count` or as a `min`/`max` pair.
pub(super) fn count_range(
    count: Option<&Value>,
    min: Option<&Value>,
    max: Option<&Value>,
    default: usize,
) -> Result<usize, GenerateError> {
    if count.is_some() {
        return length(count, "count", default);
    }
    if min.is_none() && max.is_none() {
        return Ok(default);
    }
    let (low, high) = int_bounds(min, max, (default as i64, default as i64))?;
    if low < 0 {
        return Err(GenerateError::invalid("min", "must not be negative"));
    }
    if high as usize > MAX_LENGTH {
        return Err(GenerateError::invalid(
            "max",
            format!("must be at most {MAX_LENGTH}"),
        ));
    }
    Ok(pick_inclusive(low, high) as usize)
}

pub(super) fn pick_inclusive(min: i64, max: i64) -> i64 {
    (min..=max).fake::<i64>()
}

/// Uniform index into a non-empty collection of `len` elements.
pub(super) fn pick_index(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    (0..len).fake::<usize>()
}

pub(super) fn pick<'a, T>(items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(pick_index(items.len()))
}

/// `length` characters drawn uniformly from `alphabet`.
pub(super) fn random_chars(alphabet: &[char], length: usize) -> String {
    (0..length)
        .filter_map(|_| pick(alphabet).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{count_range, float_bounds, int, int_bounds, length};
    use serde_json::json;

    #[test]
    fn integers_accept_whole_floats_only() {
        assert_eq!(int(Some(&json!(4.0)), "n").unwrap(), Some(4));
        assert!(int(Some(&json!(4.5)), "n").is_err());
        assert!(int(Some(&json!("4")), "n").is_err());
        assert_eq!(int(None, "n").unwrap(), None);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = int_bounds(Some(&json!(10)), Some(&json!(2)), (0, 100)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument 'max': max 2 is less than min 10"
        );
    }

    #[test]
    fn float_bounds_reject_infinite_width() {
        let err = float_bounds(Some(&json!(-1e308)), Some(&json!(1e308)), (0.0, 1.0)).unwrap_err();
        assert!(err.to_string().starts_with("invalid argument 'max'"), "{err}");
        assert!(float_bounds(Some(&json!(2.0)), Some(&json!(2.0)), (0.0, 1.0)).is_err());
        assert_eq!(float_bounds(None, None, (0.0, 1.0)).unwrap(), (0.0, 1.0));
    }

    #[test]
    fn length_caps_large_values() {
        assert!(length(Some(&json!(1_000_000)), "length", 1).is_err());
        assert!(length(Some(&json!(-1)), "length", 1).is_err());
        assert_eq!(length(None, "length", 7).unwrap(), 7);
    }

    #[test]
    fn count_range_stays_within_bounds() {
        for _ in 0..50 {
            let n = count_range(None, Some(&json!(2)), Some(&json!(4)), 3).unwrap();
            assert!((2..=4).contains(&n));
        }
        assert_eq!(count_range(Some(&json!(5)), None, None, 3).unwrap(), 5);
    }
}
