use fake::faker::address::raw as address;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("buildingNumber", building_number),
    ("city", city),
    ("country", country),
    ("countryCode", country_code),
    ("latitude", latitude),
    ("longitude", longitude),
    ("secondaryAddress", secondary_address),
    ("state", state),
    ("street", street),
    ("streetAddress", street_address),
    ("timeZone", time_zone),
    ("zipCode", zip_code),
];

fn building_number(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::BuildingNumber(l).fake());
    Ok(Value::String(value))
}

fn city(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::CityName(l).fake());
    Ok(Value::String(value))
}

fn country(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::CountryName(l).fake());
    Ok(Value::String(value))
}

fn country_code(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::CountryCode(l).fake());
    Ok(Value::String(value))
}

fn state(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let abbreviated = args::boolean(call.named("abbreviated"), "abbreviated")?.unwrap_or(false);
    let value: String = if abbreviated {
        localized!(ctx.locale, l => address::StateAbbr(l).fake())
    } else {
        localized!(ctx.locale, l => address::StateName(l).fake())
    };
    Ok(Value::String(value))
}

fn street(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::StreetName(l).fake());
    Ok(Value::String(value))
}

fn street_address(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let full = args::boolean(call.named("useFullAddress"), "useFullAddress")?.unwrap_or(false);
    let number: String = localized!(ctx.locale, l => address::BuildingNumber(l).fake());
    let street: String = localized!(ctx.locale, l => address::StreetName(l).fake());
    let mut value = format!("{number} {street}");
    if full {
        let secondary: String = localized!(ctx.locale, l => address::SecondaryAddress(l).fake());
        value.push(' ');
        value.push_str(&secondary);
    }
    Ok(Value::String(value))
}

fn secondary_address(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::SecondaryAddress(l).fake());
    Ok(Value::String(value))
}

fn time_zone(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::TimeZone(l).fake());
    Ok(Value::String(value))
}

fn zip_code(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => address::ZipCode(l).fake());
    Ok(Value::String(value))
}

fn latitude(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    coordinate(call, -90.0, 90.0)
}

fn longitude(_ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    coordinate(call, -180.0, 180.0)
}

fn coordinate(call: CallArgs<'_>, low: f64, high: f64) -> Result<Value, GenerateError> {
    let (min, max) = args::float_bounds(call.named("min"), call.named("max"), (low, high))?;
    if min < low || max > high {
        return Err(GenerateError::invalid(
            "min",
            format!("bounds must lie within {low}..{high}"),
        ));
    }
    let precision = args::length(call.named("precision"), "precision", 4)?.min(10);
    let raw: f64 = (min..max).fake();
    let scale = 10f64.powi(precision as i32);
    Ok(serde_json::json!((raw * scale).round() / scale))
}
