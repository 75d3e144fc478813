use fake::faker::boolean::raw as boolean;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[("boolean", datatype_boolean)];

fn datatype_boolean(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let probability = args::float(call.named("probability"), "probability")?.unwrap_or(0.5);
    if !(0.0..=1.0).contains(&probability) {
        return Err(GenerateError::invalid("probability", "must be between 0 and 1"));
    }
    let ratio = (probability * 100.0).round() as u8;
    let value: bool = localized!(ctx.locale, l => boolean::Boolean(l, ratio).fake());
    Ok(Value::Bool(value))
}
