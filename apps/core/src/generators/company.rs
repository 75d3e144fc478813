use fake::faker::company::raw as company;
use fake::Fake;
use serde_json::Value;

use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("buzzAdjective", buzz_adjective),
    ("buzzNoun", buzz_noun),
    ("buzzPhrase", buzz_phrase),
    ("buzzVerb", buzz_verb),
    ("catchPhrase", catch_phrase),
    ("catchPhraseAdjective", catch_phrase_adjective),
    ("catchPhraseDescriptor", catch_phrase_descriptor),
    ("catchPhraseNoun", catch_phrase_noun),
    ("industry", industry),
    ("name", name),
];

fn name(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::CompanyName(l).fake());
    Ok(Value::String(value))
}

fn catch_phrase(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let (adjective, descriptor, noun): (String, String, String) = localized!(ctx.locale, l => (
        company::Buzzword(l).fake(),
        company::BuzzwordMiddle(l).fake(),
        company::BuzzwordTail(l).fake(),
    ));
    Ok(Value::String(format!("{adjective} {descriptor} {noun}")))
}

fn catch_phrase_adjective(
    ctx: &GenContext<'_>,
    _args: CallArgs<'_>,
) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::Buzzword(l).fake());
    Ok(Value::String(value))
}

fn catch_phrase_descriptor(
    ctx: &GenContext<'_>,
    _args: CallArgs<'_>,
) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::BuzzwordMiddle(l).fake());
    Ok(Value::String(value))
}

fn catch_phrase_noun(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::BuzzwordTail(l).fake());
    Ok(Value::String(value))
}

fn buzz_phrase(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::Bs(l).fake());
    Ok(Value::String(value))
}

fn buzz_verb(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::BsVerb(l).fake());
    Ok(Value::String(value))
}

fn buzz_adjective(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::BsAdj(l).fake());
    Ok(Value::String(value))
}

fn buzz_noun(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::BsNoun(l).fake());
    Ok(Value::String(value))
}

fn industry(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => company::Industry(l).fake());
    Ok(Value::String(value))
}
