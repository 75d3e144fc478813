use fake::faker::internet::raw as internet;
use fake::faker::lorem::raw as lorem;
use fake::faker::name::raw as name;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("domainName", domain_name),
    ("domainSuffix", domain_suffix),
    ("domainWord", domain_word),
    ("email", email),
    ("exampleEmail", example_email),
    ("ip", ip),
    ("ipv4", ipv4),
    ("ipv6", ipv6),
    ("mac", mac),
    ("password", password),
    ("port", port),
    ("url", url),
    ("userAgent", user_agent),
    ("username", username),
];

fn email(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let first = args::text(call.named("firstName"), "firstName")?;
    let last = args::text(call.named("lastName"), "lastName")?;
    let provider = args::text(call.named("provider"), "provider")?;
    if first.is_none() && last.is_none() && provider.is_none() {
        let value: String = localized!(ctx.locale, l => internet::FreeEmail(l).fake());
        return Ok(Value::String(value));
    }

    let first = match first {
        Some(first) => first.to_string(),
        None => localized!(ctx.locale, l => name::FirstName(l).fake()),
    };
    let last = match last {
        Some(last) => last.to_string(),
        None => localized!(ctx.locale, l => name::LastName(l).fake()),
    };
    let provider = match provider {
        Some(provider) => provider.to_string(),
        None => localized!(ctx.locale, l => internet::FreeEmailProvider(l).fake()),
    };
    let local = format!("{}.{}", email_part(&first), email_part(&last));
    Ok(Value::String(format!("{local}@{provider}")))
}

fn example_email(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::SafeEmail(l).fake());
    Ok(Value::String(value))
}

fn username(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::Username(l).fake());
    Ok(Value::String(value))
}

fn password(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let length = args::length(call.named("length"), "length", 15)?;
    if length == 0 {
        return Err(GenerateError::invalid("length", "must be at least 1"));
    }
    let value: String =
        localized!(ctx.locale, l => internet::Password(l, length..length + 1).fake());
    Ok(Value::String(value))
}

fn ip(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::IP(l).fake());
    Ok(Value::String(value))
}

fn ipv4(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::IPv4(l).fake());
    Ok(Value::String(value))
}

fn ipv6(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::IPv6(l).fake());
    Ok(Value::String(value))
}

fn mac(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::MACAddress(l).fake());
    Ok(Value::String(value.to_ascii_lowercase()))
}

fn user_agent(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::UserAgent(l).fake());
    Ok(Value::String(value))
}

fn domain_suffix(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => internet::DomainSuffix(l).fake());
    Ok(Value::String(value))
}

fn domain_word(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    Ok(Value::String(ascii_domain_word()))
}

fn domain_name(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    Ok(Value::String(build_domain_name(ctx)))
}

fn url(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let protocol = args::text(call.named("protocol"), "protocol")?.unwrap_or("https");
    if !matches!(protocol, "http" | "https") {
        return Err(GenerateError::invalid("protocol", "expected 'http' or 'https'"));
    }
    let trailing = args::boolean(call.named("appendSlash"), "appendSlash")?.unwrap_or(false);
    let slash = if trailing { "/" } else { "" };
    Ok(Value::String(format!(
        "{protocol}://{}{slash}",
        build_domain_name(ctx)
    )))
}

fn port(_ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    Ok(Value::from(args::pick_inclusive(0, 65_535)))
}

// Domain words come from the English lorem list so hosts stay ASCII for
// every locale.
fn ascii_domain_word() -> String {
    let word: String = lorem::Word(fake::locales::EN).fake();
    word.to_ascii_lowercase()
}

fn build_domain_name(ctx: &GenContext<'_>) -> String {
    let suffix: String = localized!(ctx.locale, l => internet::DomainSuffix(l).fake());
    format!("{}.{suffix}", ascii_domain_word())
}

fn email_part(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_alphanumeric() || matches!(ch, '.' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::generators::{Locale, NamedArgs, Registry};
    use serde_json::json;

    #[test]
    fn email_honors_name_and_provider_overrides() {
        let registry = Registry::new();
        let args = json!({"firstName": "Ada", "lastName": "Lovelace", "provider": "example.dev"})
            .as_object()
            .cloned()
            .unwrap();
        let value = registry.invoke(Locale::En, "internet", "email", &args).unwrap();
        assert_eq!(value, json!("ada.lovelace@example.dev"));
    }

    #[test]
    fn password_respects_length() {
        let registry = Registry::new();
        let args = json!({"length": 24}).as_object().cloned().unwrap();
        let value = registry
            .invoke(Locale::En, "internet", "password", &args)
            .unwrap();
        assert_eq!(value.as_str().unwrap().chars().count(), 24);
    }

    #[test]
    fn url_rejects_unknown_protocol() {
        let registry = Registry::new();
        let args = json!({"protocol": "gopher"}).as_object().cloned().unwrap();
        assert!(registry.invoke(Locale::En, "internet", "url", &args).is_err());
    }

    #[test]
    fn port_is_a_number_in_range() {
        let registry = Registry::new();
        let value = registry
            .invoke(Locale::En, "internet", "port", &NamedArgs::new())
            .unwrap();
        let port = value.as_i64().unwrap();
        assert!((0..=65_535).contains(&port));
    }
}
