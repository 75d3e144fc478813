use fake::faker::lorem::raw as lorem;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("lines", lines),
    ("paragraph", paragraph),
    ("paragraphs", paragraphs),
    ("sentence", sentence),
    ("sentences", sentences),
    ("slug", slug),
    ("text", text),
    ("word", word),
    ("words", words),
];

fn word(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => lorem::Word(l).fake());
    Ok(Value::String(value))
}

fn words(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?;
    Ok(Value::String(word_list(ctx, count).join(" ")))
}

fn slug(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?;
    Ok(Value::String(word_list(ctx, count).join("-")))
}

fn sentence(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 6)?.max(1);
    let value: String = localized!(ctx.locale, l => lorem::Sentence(l, count..count + 1).fake());
    Ok(Value::String(value))
}

fn sentences(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?;
    Ok(Value::String(sentence_list(ctx, count).join(" ")))
}

fn lines(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?;
    Ok(Value::String(sentence_list(ctx, count).join("\n")))
}

fn paragraph(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?.max(1);
    let value: String = localized!(ctx.locale, l => lorem::Paragraph(l, count..count + 1).fake());
    Ok(Value::String(value))
}

fn paragraphs(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let count = counted(call, 3)?;
    if count == 0 {
        return Ok(Value::String(String::new()));
    }
    let values: Vec<String> =
        localized!(ctx.locale, l => lorem::Paragraphs(l, count..count + 1).fake());
    Ok(Value::String(values.join("\n")))
}

fn text(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => lorem::Paragraph(l, 2..5).fake());
    Ok(Value::String(value))
}

fn counted(call: CallArgs<'_>, default: usize) -> Result<usize, GenerateError> {
    args::count_range(
        call.named("count"),
        call.named("min"),
        call.named("max"),
        default,
    )
}

fn word_list(ctx: &GenContext<'_>, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    localized!(ctx.locale, l => lorem::Words(l, count..count + 1).fake())
}

fn sentence_list(ctx: &GenContext<'_>, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    localized!(ctx.locale, l => lorem::Sentences(l, count..count + 1).fake())
}
