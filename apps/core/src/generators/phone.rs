use fake::faker::phone_number::raw as phone;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("cellNumber", cell_number),
    ("imei", imei),
    ("number", number),
];

fn number(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let style = args::text(call.named("style"), "style")?.unwrap_or("human");
    let formatted: String = localized!(ctx.locale, l => phone::PhoneNumber(l).fake());
    let value = match style {
        "human" => formatted,
        "national" => formatted.chars().filter(char::is_ascii_digit).collect(),
        _ => {
            return Err(GenerateError::invalid(
                "style",
                "expected 'human' or 'national'",
            ))
        }
    };
    Ok(Value::String(value))
}

fn cell_number(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => phone::CellNumber(l).fake());
    Ok(Value::String(value))
}

/// 14 random digits plus a Luhn check digit, grouped like a printed IMEI.
fn imei(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let mut digits: Vec<u32> = (0..14).map(|_| args::pick_inclusive(0, 9) as u32).collect();
    digits.push(luhn_check_digit(&digits));
    let text: String = digits
        .iter()
        .filter_map(|digit| char::from_digit(*digit, 10))
        .collect();
    Ok(Value::String(format!(
        "{}-{}-{}-{}",
        &text[0..2],
        &text[2..8],
        &text[8..14],
        &text[14..]
    )))
}

pub(super) fn luhn_check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(index, digit)| {
            if index % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                *digit
            }
        })
        .sum();
    (10 - sum % 10) % 10
}
