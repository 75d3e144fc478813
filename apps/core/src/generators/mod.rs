//! Adapter layer over the `fake` crate.
//!
//! Every generator is declared up front under a two-level
//! `category -> module` namespace. Nothing is discovered at runtime: the
//! registry is the complete callable surface.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde_json::Value;

mod args;
mod color;
mod company;
mod datatype;
mod date;
mod finance;
mod helpers;
mod internet;
mod locale;
mod location;
mod lorem;
mod number;
mod person;
mod phone;
mod string;
mod system;

pub use locale::Locale;

pub type NamedArgs = serde_json::Map<String, Value>;

pub type GeneratorFn = fn(&GenContext<'_>, CallArgs<'_>) -> Result<Value, GenerateError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    InvalidArgument { name: String, reason: String },
    MissingArgument(String),
    UnknownGenerator(String),
    Panicked { path: String, message: String },
}

impl GenerateError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { name, reason } => {
                write!(f, "invalid argument '{name}': {reason}")
            }
            Self::MissingArgument(name) => write!(f, "missing required argument '{name}'"),
            Self::UnknownGenerator(path) => write!(f, "unknown generator '{path}'"),
            Self::Panicked { path, message } => {
                write!(f, "generator '{path}' failed unexpectedly: {message}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Arguments as a generator receives them.
#[derive(Debug, Clone, Copy)]
pub enum CallArgs<'a> {
    Named(&'a NamedArgs),
    Positional(&'a [Option<Value>]),
}

impl<'a> CallArgs<'a> {
    pub fn named(&self, key: &str) -> Option<&'a Value> {
        match *self {
            CallArgs::Named(map) => map.get(key),
            CallArgs::Positional(_) => None,
        }
    }

    pub fn positional(&self, index: usize) -> Option<&'a Value> {
        match *self {
            CallArgs::Positional(values) => values.get(index).and_then(Option::as_ref),
            CallArgs::Named(_) => None,
        }
    }
}

pub struct GenContext<'a> {
    pub locale: Locale,
    pub registry: &'a Registry,
}

/// Exceptions to the default "one named-argument map" calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    Named,
    Positional(&'static [&'static str]),
    NameOrder,
}

const CONVENTIONS: &[((&str, &str), CallingConvention)] = &[
    (("person", "fullName"), CallingConvention::NameOrder),
    (("helpers", "arrayElement"), CallingConvention::Positional(&["array"])),
    (
        ("helpers", "arrayElements"),
        CallingConvention::Positional(&["array", "count"]),
    ),
    (("helpers", "shuffle"), CallingConvention::Positional(&["list"])),
    (("helpers", "slugify"), CallingConvention::Positional(&["string"])),
    (("helpers", "replaceSymbols"), CallingConvention::Positional(&["string"])),
    (("helpers", "objectKey"), CallingConvention::Positional(&["object"])),
    (("helpers", "objectValue"), CallingConvention::Positional(&["object"])),
    (
        ("helpers", "rangeToNumber"),
        CallingConvention::Positional(&["numberOrRange"]),
    ),
    (("helpers", "fake"), CallingConvention::Positional(&["pattern"])),
];

pub fn calling_convention(category: &str, module: &str) -> CallingConvention {
    CONVENTIONS
        .iter()
        .find(|((cat, module_name), _)| *cat == category && *module_name == module)
        .map(|(_, convention)| *convention)
        .unwrap_or(CallingConvention::Named)
}

pub struct Registry {
    categories: BTreeMap<&'static str, BTreeMap<&'static str, GeneratorFn>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let declared: [(&'static str, &'static [(&'static str, GeneratorFn)]); 14] = [
            ("color", color::MODULES),
            ("company", company::MODULES),
            ("datatype", datatype::MODULES),
            ("date", date::MODULES),
            ("finance", finance::MODULES),
            ("helpers", helpers::MODULES),
            ("internet", internet::MODULES),
            ("location", location::MODULES),
            ("lorem", lorem::MODULES),
            ("number", number::MODULES),
            ("person", person::MODULES),
            ("phone", phone::MODULES),
            ("string", string::MODULES),
            ("system", system::MODULES),
        ];

        let categories = declared
            .iter()
            .map(|(name, modules)| (*name, modules.iter().copied().collect()))
            .collect();
        Self { categories }
    }

    /// Category names in storage order (byte-wise, not case-folded).
    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.keys().copied().collect()
    }

    pub fn module_names(&self, category: &str) -> Option<Vec<&'static str>> {
        self.categories
            .get(category)
            .map(|modules| modules.keys().copied().collect())
    }

    pub fn generator(&self, category: &str, module: &str) -> Option<GeneratorFn> {
        self.categories.get(category)?.get(module).copied()
    }

    /// Calls one generator with exactly the arguments given, bypassing
    /// calling-convention overrides.
    pub fn call(
        &self,
        locale: Locale,
        category: &str,
        module: &str,
        args: CallArgs<'_>,
    ) -> Result<Value, GenerateError> {
        let generator = self
            .generator(category, module)
            .ok_or_else(|| GenerateError::UnknownGenerator(format!("{category}.{module}")))?;
        let ctx = GenContext {
            locale,
            registry: self,
        };
        generator(&ctx, args)
    }

    /// Calls a generator the way a query does: named args by default, with
    /// the overrides from [`calling_convention`] applied.
    pub fn invoke(
        &self,
        locale: Locale,
        category: &str,
        module: &str,
        named: &NamedArgs,
    ) -> Result<Value, GenerateError> {
        match calling_convention(category, module) {
            CallingConvention::Named => self.call(locale, category, module, CallArgs::Named(named)),
            CallingConvention::Positional(names) => {
                let values: Vec<Option<Value>> =
                    names.iter().map(|name| named.get(*name).cloned()).collect();
                self.call(locale, category, module, CallArgs::Positional(&values))
            }
            CallingConvention::NameOrder => {
                if wants_last_first(named) {
                    let last = self.call(locale, category, "lastName", CallArgs::Named(named))?;
                    let first = self.call(locale, category, "firstName", CallArgs::Named(named))?;
                    Ok(Value::String(format!(
                        "{} {}",
                        value_to_text(&last),
                        value_to_text(&first)
                    )))
                } else {
                    self.call(locale, category, module, CallArgs::Named(named))
                }
            }
        }
    }
}

fn wants_last_first(named: &NamedArgs) -> bool {
    let order = ["nameOrder", "order"]
        .iter()
        .filter_map(|key| named.get(*key))
        .find(|value| !is_empty_value(value));
    matches!(order, Some(Value::String(order)) if order == "last-first" || order == "lf")
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Composite values become JSON text; strings are used verbatim.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
