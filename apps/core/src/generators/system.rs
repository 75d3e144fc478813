use fake::faker::filesystem::raw as filesystem;
use fake::faker::lorem::raw as lorem;
use fake::Fake;
use serde_json::Value;

use super::args;
use super::locale::localized;
use super::{CallArgs, GenContext, GenerateError, GeneratorFn};

pub(super) const MODULES: &[(&str, GeneratorFn)] = &[
    ("commonFileName", common_file_name),
    ("directoryPath", directory_path),
    ("fileExt", file_ext),
    ("fileName", file_name),
    ("filePath", file_path),
    ("mimeType", mime_type),
    ("semver", semver),
];

fn file_name(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::FileName(l).fake());
    Ok(Value::String(value))
}

fn common_file_name(ctx: &GenContext<'_>, call: CallArgs<'_>) -> Result<Value, GenerateError> {
    let extension = match args::text(call.named("extension"), "extension")? {
        Some(extension) => extension.trim_start_matches('.').to_string(),
        None => localized!(ctx.locale, l => filesystem::FileExtension(l).fake()),
    };
    let words: Vec<String> = lorem::Words(fake::locales::EN, 1..3).fake();
    Ok(Value::String(format!(
        "{}.{extension}",
        words.join("_").to_ascii_lowercase()
    )))
}

fn file_ext(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::FileExtension(l).fake());
    Ok(Value::String(value))
}

fn file_path(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::FilePath(l).fake());
    Ok(Value::String(value))
}

fn directory_path(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::DirPath(l).fake());
    Ok(Value::String(value))
}

fn mime_type(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::MimeType(l).fake());
    Ok(Value::String(value))
}

fn semver(ctx: &GenContext<'_>, _args: CallArgs<'_>) -> Result<Value, GenerateError> {
    let value: String = localized!(ctx.locale, l => filesystem::Semver(l).fake());
    Ok(Value::String(value))
}
