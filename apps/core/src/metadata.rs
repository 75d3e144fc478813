use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::logging;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModuleMetadata {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl ModuleMetadata {
    /// `description`, then ` | Params: a, b` when params are known.
    pub fn subtitle(&self) -> Option<String> {
        if self.description.is_empty() && self.params.is_empty() {
            return None;
        }
        let mut subtitle = self.description.clone();
        if !self.params.is_empty() {
            subtitle.push_str(" | Params: ");
            subtitle.push_str(&self.params.join(", "));
        }
        Some(subtitle)
    }
}

type RawTable = BTreeMap<String, BTreeMap<String, ModuleMetadata>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataTable {
    entries: RawTable,
}

impl MetadataTable {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut entries: RawTable =
            json5::from_str(raw).map_err(|e| format!("failed to parse metadata: {e}"))?;
        for modules in entries.values_mut() {
            for meta in modules.values_mut() {
                dedupe_in_place(&mut meta.params);
            }
        }
        Ok(Self { entries })
    }

    /// Missing or malformed files give an empty table.
    pub fn load_or_empty(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                logging::warn(&format!(
                    "metadata unavailable at {}: {error}",
                    path.display()
                ));
                return Self::default();
            }
        };
        match Self::parse(&raw) {
            Ok(table) => {
                logging::info(&format!(
                    "metadata loaded categories={} path={}",
                    table.entries.len(),
                    path.display()
                ));
                table
            }
            Err(error) => {
                logging::warn(&format!("{error} ({})", path.display()));
                Self::default()
            }
        }
    }

    pub fn get(&self, category: &str, module: &str) -> Option<&ModuleMetadata> {
        self.entries.get(category)?.get(module)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn dedupe_in_place(params: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    params.retain(|param| seen.insert(param.clone()));
}

#[cfg(test)]
mod tests {
    use super::{MetadataTable, ModuleMetadata};

    #[test]
    fn params_are_deduplicated_in_first_seen_order() {
        let table = MetadataTable::parse(
            r#"{ person: { firstName: { description: "A first name", params: ["sex", "locale", "sex"] } } }"#,
        )
        .unwrap();
        let meta = table.get("person", "firstName").unwrap();
        assert_eq!(meta.params, ["sex", "locale"]);
    }

    #[test]
    fn subtitle_appends_params_when_known() {
        let meta = ModuleMetadata {
            description: "Generates a word".into(),
            params: vec!["length".into(), "strategy".into()],
        };
        assert_eq!(
            meta.subtitle().as_deref(),
            Some("Generates a word | Params: length, strategy")
        );
        assert_eq!(ModuleMetadata::default().subtitle(), None);
    }

    #[test]
    fn malformed_metadata_is_an_error() {
        assert!(MetadataTable::parse("{ person: ").is_err());
    }
}
