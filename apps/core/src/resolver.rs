//! Query navigation: categories, then modules, then generated rows.
//!
//! | positional tokens              | state            |
//! |--------------------------------|------------------|
//! | none                           | list categories  |
//! | one, still being typed         | filter categories|
//! | one + trailing space, or two   | list modules     |
//! | category and module resolved   | generate         |

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value;

use crate::config::Config;
use crate::generators::{value_to_text, GenerateError, Locale, Registry};
use crate::logging;
use crate::metadata::MetadataTable;
use crate::model::{fold_case, sort_folded, starts_with_folded, ItemAction, ResultItem};
use crate::query_dsl::ParsedQuery;

/// Every generation query offers this many alternative rows.
pub const ROW_COUNT: usize = 5;

pub struct Resolver<'a> {
    registry: &'a Registry,
    metadata: &'a MetadataTable,
    keyword: &'a str,
    icon_path: &'a str,
    default_locale: Locale,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, metadata: &'a MetadataTable, config: &'a Config) -> Self {
        Self {
            registry,
            metadata,
            keyword: &config.action_keyword,
            icon_path: &config.icon_path,
            default_locale: config.default_locale,
        }
    }

    pub fn resolve(&self, query: &str) -> Vec<ResultItem> {
        let parsed = ParsedQuery::parse_with_locale(query, self.default_locale);
        match (parsed.category(), parsed.module()) {
            (None, _) => self.list_categories(""),
            (Some(category), None) if !parsed.trailing_space && parsed.extra_positional == 0 => {
                self.filter_categories(category, &parsed)
            }
            (Some(category), module) => self.list_modules(category, module, &parsed),
        }
    }

    fn list_categories(&self, prefix: &str) -> Vec<ResultItem> {
        let mut names: Vec<&str> = self
            .registry
            .category_names()
            .into_iter()
            .filter(|name| starts_with_folded(name, prefix))
            .collect();
        sort_folded(&mut names);

        names
            .into_iter()
            .map(|name| {
                ResultItem::new(
                    name,
                    format!("Browse {name} modules"),
                    ItemAction::ChangeQuery(format!("{} {name} ", self.keyword)),
                    self.icon_path,
                )
            })
            .collect()
    }

    fn filter_categories(&self, token: &str, parsed: &ParsedQuery) -> Vec<ResultItem> {
        let folded = fold_case(token);
        let exact = self
            .registry
            .category_names()
            .into_iter()
            .find(|name| fold_case(name) == folded);
        if let Some(category) = exact {
            return self.list_modules(category, None, parsed);
        }

        let items = self.list_categories(token);
        if items.is_empty() {
            return vec![self.category_not_found(token)];
        }
        items
    }

    fn list_modules(
        &self,
        category: &str,
        module: Option<&str>,
        parsed: &ParsedQuery,
    ) -> Vec<ResultItem> {
        let Some(mut modules) = self.registry.module_names(category) else {
            return vec![self.category_not_found(category)];
        };

        let filter = module.unwrap_or("");
        if let Some(requested) = module {
            let folded = fold_case(requested);
            if let Some(exact) = modules.iter().find(|name| fold_case(name) == folded) {
                return self.generate(category, exact, parsed);
            }
        }

        modules.retain(|name| starts_with_folded(name, filter));
        if modules.is_empty() {
            return vec![self.function_not_found(category, filter)];
        }
        sort_folded(&mut modules);

        modules
            .into_iter()
            .map(|name| {
                let subtitle = self
                    .metadata
                    .get(category, name)
                    .and_then(|meta| meta.subtitle())
                    .unwrap_or_else(|| format!("Generate {category}.{name}"));
                ResultItem::new(
                    name,
                    subtitle,
                    ItemAction::ChangeQuery(format!("{} {category} {name} ", self.keyword)),
                    self.icon_path,
                )
            })
            .collect()
    }

    /// [`ROW_COUNT`] rows of `repeat` values each. Any failure replaces the
    /// whole result with one informational item.
    pub fn generate(&self, category: &str, module: &str, parsed: &ParsedQuery) -> Vec<ResultItem> {
        let mut rows = Vec::with_capacity(ROW_COUNT);
        for _ in 0..ROW_COUNT {
            let mut values = Vec::with_capacity(parsed.repeat);
            for _ in 0..parsed.repeat {
                let outcome = guard_panics(category, module, || {
                    self.registry
                        .invoke(parsed.locale, category, module, &parsed.named_args)
                });
                match outcome {
                    Ok(value) => values.push(value_to_text(&value)),
                    Err(error) => {
                        logging::warn(&format!("generate {category}.{module} failed: {error}"));
                        return vec![self.generation_error(&error)];
                    }
                }
            }
            rows.push(self.row_item(category, module, values));
        }
        rows
    }

    fn row_item(&self, category: &str, module: &str, values: Vec<String>) -> ResultItem {
        let item = match values.as_slice() {
            [single] => ResultItem::new(
                single.clone(),
                format!("Copy to clipboard ({category}.{module})"),
                ItemAction::Copy(single.clone()),
                self.icon_path,
            ),
            _ => {
                let first = values.first().map(String::as_str).unwrap_or_default();
                ResultItem::new(
                    format!("{first}... (+{} more)", values.len().saturating_sub(1)),
                    format!(
                        "Generated {} values. Enter to copy (newline separated).",
                        values.len()
                    ),
                    ItemAction::Copy(values.join("\n")),
                    self.icon_path,
                )
            }
        };
        item.with_context_data(values)
    }

    fn category_not_found(&self, category: &str) -> ResultItem {
        ResultItem::new(
            "Category not found",
            format!("Category '{category}' does not exist"),
            ItemAction::ChangeQuery(format!("{} ", self.keyword)),
            self.icon_path,
        )
    }

    fn function_not_found(&self, category: &str, module: &str) -> ResultItem {
        ResultItem::new(
            "Function not found",
            format!("'{category}.{module}' is not a valid generator"),
            ItemAction::ChangeQuery(format!("{} {category} ", self.keyword)),
            self.icon_path,
        )
    }

    fn generation_error(&self, error: &GenerateError) -> ResultItem {
        let message = error.to_string();
        ResultItem::new(
            "Error generating data",
            message.clone(),
            ItemAction::Copy(message),
            self.icon_path,
        )
    }
}

/// Turns a panicking generator into an ordinary generation failure. The
/// panic hook has already logged the location by the time this returns.
fn guard_panics(
    category: &str,
    module: &str,
    call: impl FnOnce() -> Result<Value, GenerateError>,
) -> Result<Value, GenerateError> {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Err(GenerateError::Panicked {
            path: format!("{category}.{module}"),
            message,
        })
    })
}
