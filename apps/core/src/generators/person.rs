use fake::faker::job::raw as job;
use fake::faker::name::raw as name;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn, Locale};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("firstName", first_name),
    ("fullName", full_name),
    ("jobArea", job_area),
    ("jobDescriptor", job_descriptor),
    ("jobTitle", job_title),
    ("jobType", job_type),
    ("lastName", last_name),
    ("prefix", prefix),
    ("sex", sex),
    ("suffix", suffix),
];

const SEXES: [&str; 2] = ["female", "male"];
const FEMALE_PREFIXES: [&str; 4] = ["Mrs.", "Ms.", "Miss", "Dr."];
const MALE_PREFIXES: [&str; 2] = ["Mr.", "Dr."];
pub(super) const FEMALE_FIRST_NAMES: [&str; 16] = [
    "Abigail", "Amelia", "Charlotte", "Chloe", "Eleanor", "Emily", "Grace", "Hannah", "Isabella",
    "Lily", "Madison", "Olivia", "Scarlett", "Sophia", "Victoria", "Zoe",
];
pub(super) const MALE_FIRST_NAMES: [&str; 16] = [
    "Benjamin", "Caleb", "Daniel", "Ethan", "Gabriel", "Henry", "Isaac", "Jack", "James", "Liam",
    "Lucas", "Mason", "Noah", "Oliver", "Samuel", "William",
];

fn first_name(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    Ok(Value::String(gendered_first_name(ctx, parse_sex(call)?)))
}

/// `sex` is validated on last names too, so every name path rejects the same input.
fn last_name(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    parse_sex(call)?;
    let value: String = localized!(ctx.locale, l => name::LastName(l).fake());
    Ok(Value::String(value))
}

fn full_name(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let sex = parse_sex(call)?;
    let first = args::text(call.named("firstName"), "firstName")?;
    let last = args::text(call.named("lastName"), "lastName")?;
    if first.is_none() && last.is_none() && sex.is_none() {
        let value: String = localized!(ctx.locale, l => name::Name(l).fake());
        return Ok(Value::String(value));
    }
    let first = match first {
        Some(first) => first.to_string(),
        None => gendered_first_name(ctx, sex),
    };
    let last = match last {
        Some(last) => last.to_string(),
        None => localized!(ctx.locale, l => name::LastName(l).fake()),
    };
    Ok(Value::String(format!("{first} {last}")))
}

/// English has built-in gendered pools. Other locales draw from their
/// single `fake` pool whatever `sex` says.
fn gendered_first_name(ctx: &GenContext<'_>, sex: Option<&str>) -> String {
    let pool: &[&str] = match (ctx.locale, sex) {
        (Locale::En, Some("female")) => &FEMALE_FIRST_NAMES,
        (Locale::En, Some(_)) => &MALE_FIRST_NAMES,
        _ => &[],
    };
    match args::pick(pool) {
        Some(name) => (*name).to_string(),
        None => localized!(ctx.locale, l => name::FirstName(l).fake()),
    }
}

fn prefix(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value = match parse_sex(call)? {
        Some("female") => args::pick(&FEMALE_PREFIXES).copied().unwrap_or("Ms.").to_string(),
        Some(_) => args::pick(&MALE_PREFIXES).copied().unwrap_or("Mr.").to_string(),
        None => localized!(ctx.locale, l => name::Title(l).fake()),
    };
    Ok(Value::String(value))
}

fn suffix(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => name::Suffix(l).fake());
    Ok(Value::String(value))
}

fn sex(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value = args::pick(&SEXES).copied().unwrap_or("female");
    Ok(Value::String(value.to_string()))
}

fn job_title(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => job::Title(l).fake());
    Ok(Value::String(value))
}

fn job_area(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => job::Field(l).fake());
    Ok(Value::String(value))
}

fn job_type(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => job::Position(l).fake());
    Ok(Value::String(value))
}

fn job_descriptor(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => job::Seniority(l).fake());
    Ok(Value::String(value))
}

fn parse_sex(call: CallArgs<'_>) -> Result<Option<&'static str>, GenerateError> {
    let Some(raw) = args::text(call.named("sex"), "sex")? else {
        return Ok(None);
    };
    SEXES
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(raw))
        .copied()
        .map(Some)
        .ok_or_else(|| GenerateError::invalid("sex", "expected 'female' or 'male'"))
}

#[cfg(test)]
mod tests {
    use super::{FEMALE_FIRST_NAMES, MALE_FIRST_NAMES};
    use crate::generators::{Locale, NamedArgs, Registry};
    use serde_json::json;

    #[test]
    fn gendered_prefix_uses_matching_titles() {
        let registry = Registry::new();
        let args = json!({"sex": "male"}).as_object().cloned().unwrap();
        for _ in 0..20 {
            let value = registry.invoke(Locale::En, "person", "prefix", &args).unwrap();
            assert!(["Mr.", "Dr."].contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn unknown_sex_is_rejected() {
        let registry = Registry::new();
        let args = json!({"sex": "robot"}).as_object().cloned().unwrap();
        let err = registry
            .invoke(Locale::En, "person", "prefix", &args)
            .unwrap_err();
        assert!(err.to_string().contains("sex"));
    }

    #[test]
    fn first_name_draws_from_the_requested_sex() {
        let registry = Registry::new();
        let args = json!({"sex": "female"}).as_object().cloned().unwrap();
        for _ in 0..20 {
            let value = registry.invoke(Locale::En, "person", "firstName", &args).unwrap();
            assert!(FEMALE_FIRST_NAMES.contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn every_name_generator_rejects_unknown_sex() {
        let registry = Registry::new();
        let args = json!({"sex": "robot"}).as_object().cloned().unwrap();
        for module in ["firstName", "lastName", "fullName", "prefix"] {
            let err = registry
                .invoke(Locale::En, "person", module, &args)
                .unwrap_err();
            assert_eq!(err.to_string(), "invalid argument 'sex': expected 'female' or 'male'");
        }
    }

    #[test]
    fn full_name_with_sex_uses_gendered_first_name() {
        let registry = Registry::new();
        let args = json!({"sex": "male", "lastName": "Lovelace"}).as_object().cloned().unwrap();
        let value = registry.invoke(Locale::En, "person", "fullName", &args).unwrap();
        let (first, last) = value.as_str().unwrap().split_once(' ').unwrap();
        assert!(MALE_FIRST_NAMES.contains(&first), "{first}");
        assert_eq!(last, "Lovelace");
    }

    #[test]
    fn localized_names_generate_for_every_locale() {
        let registry = Registry::new();
        for locale in [Locale::En, Locale::FrFr, Locale::ZhCn, Locale::JaJp, Locale::PtBr] {
            let value = registry
                .invoke(locale, "person", "firstName", &NamedArgs::new())
                .unwrap();
            assert!(!value.as_str().unwrap().is_empty());
        }
    }
}
