use fake::faker::creditcard::raw as creditcard;
use fake::faker::currency::raw as currency;
use fake::faker::finance::raw as finance;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("accountNumber", account_number),
    ("amount", amount),
    ("bic", bic),
    ("creditCardCVV", credit_card_cvv),
    ("creditCardNumber", credit_card_number),
    ("currencyCode", currency_code),
    ("currencyName", currency_name),
    ("currencySymbol", currency_symbol),
    ("pin", pin),
    ("routingNumber", routing_number),
];

fn currency_code(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => currency::CurrencyCode(l).fake());
    Ok(Value::String(value))
}

fn currency_name(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => currency::CurrencyName(l).fake());
    Ok(Value::String(value))
}

fn currency_symbol(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => currency::CurrencySymbol(l).fake());
    Ok(Value::String(value))
}

fn credit_card_number(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => creditcard::CreditCardNumber(l).fake());
    Ok(Value::String(value))
}

fn credit_card_cvv(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    Ok(Value::String(digits(3)))
}

fn bic(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => finance::Bic(l).fake());
    Ok(Value::String(value))
}

/// Decimal text like `"482.17"`, optionally prefixed with a symbol.
fn amount(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let (min, max) = args::float_bounds(call.named("min"), call.named("max"), (0.0, 1000.0))?;
    let decimals = args::length(call.named("dec"), "dec", 2)?.min(10);
    let symbol = args::text(call.named("symbol"), "symbol")?.unwrap_or("");
    let raw: f64 = (min..max).fake();
    Ok(Value::String(format!("{symbol}{raw:.decimals$}")))
}

fn account_number(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 8)?;
    Ok(Value::String(digits(length)))
}

fn pin(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 4)?;
    if length == 0 {
        return Err(GenerateError::invalid("length", "must be at least 1"));
    }
    Ok(Value::String(digits(length)))
}

/// Eight random digits plus the ABA checksum digit.
fn routing_number(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let payload: Vec<u32> = (0..8).map(|_| args::pick_inclusive(0, 9) as u32).collect();
    let weights = [3, 7, 1, 3, 7, 1, 3, 7];
    let sum: u32 = payload.iter().zip(weights).map(|(d, w)| d * w).sum();
    let check = (10 - sum % 10) % 10;
    let text: String = payload
        .iter()
        .chain(std::iter::once(&check))
        .filter_map(|digit| char::from_digit(*digit, 10))
        .collect();
    Ok(Value::String(text))
}

fn digits(length: usize) -> String {
    let chars: Vec<char> = ('0'..='9').collect();
    args::random_chars(&chars, length)
}

#[cfg(test)]
mod tests {
    use crate::generators::{Locale, NamedArgs, Registry};
    use serde_json::json;

    #[test]
    fn amount_formats_requested_decimals_and_symbol() {
        let registry = Registry::new();
        let args = json!({"min": 5, "max": 6, "dec": 3, "symbol": "$"});
        let value = registry
            .invoke(Locale::En, "finance", "amount", args.as_object().unwrap())
            .unwrap();
        let text = value.as_str().unwrap();
        assert!(text.starts_with("$5.") || text == "$6.000", "{text}");
        assert_eq!(text.split('.').nth(1).map(str::len), Some(3));
    }

    #[test]
    fn amount_with_overflowing_width_fails() {
        let registry = Registry::new();
        let args = json!({"min": -1e308, "max": 1e308});
        let err = registry
            .invoke(Locale::En, "finance", "amount", args.as_object().unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("too wide"), "{err}");
    }

    #[test]
    fn routing_number_passes_checksum() {
        let registry = Registry::new();
        let value = registry
            .invoke(Locale::En, "finance", "routingNumber", &NamedArgs::new())
            .unwrap();
        let digits: Vec<u32> = value
            .as_str()
            .unwrap()
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .collect();
        assert_eq!(digits.len(), 9);
        let weights = [3, 7, 1, 3, 7, 1, 3, 7, 1];
        let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
        assert_eq!(sum % 10, 0);
    }
}
