#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Replace the launcher query with this text.
    ChangeQuery(String),
    /// Write this text to the clipboard.
    Copy(String),
}

impl ItemAction {
    pub fn method(&self) -> &'static str {
        match self {
            Self::ChangeQuery(_) => "change_query",
            Self::Copy(_) => "copy",
        }
    }

    pub fn parameter(&self) -> &str {
        match self {
            Self::ChangeQuery(text) | Self::Copy(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub action: ItemAction,
    pub context_data: Vec<String>,
    pub icon_path: String,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, action: ItemAction, icon_path: &str) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            action,
            context_data: Vec::new(),
            icon_path: icon_path.to_string(),
        }
    }

    pub fn with_context_data(mut self, context_data: Vec<String>) -> Self {
        self.context_data = context_data;
        self
    }
}

/// Lowercased form used for every user-facing name comparison.
pub fn fold_case(input: &str) -> String {
    input.chars().flat_map(|c| c.to_lowercase()).collect()
}

pub fn starts_with_folded(name: &str, prefix: &str) -> bool {
    fold_case(name).starts_with(&fold_case(prefix))
}

/// Case-insensitive ascending order, ties broken byte-wise for stability.
pub fn sort_folded(names: &mut [&str]) {
    names.sort_by(|a, b| fold_case(a).cmp(&fold_case(b)).then_with(|| a.cmp(b)));
}

#[cfg(test)]
mod tests {
    use super::{sort_folded, starts_with_folded, ItemAction};

    #[test]
    fn folded_sort_ignores_case() {
        let mut names = vec!["phone", "Person", "color"];
        sort_folded(&mut names);
        assert_eq!(names, ["color", "Person", "phone"]);
    }

    #[test]
    fn prefix_match_ignores_case() {
        assert!(starts_with_folded("firstName", "FIRST"));
        assert!(starts_with_folded("firstName", ""));
        assert!(!starts_with_folded("firstName", "last"));
    }

    #[test]
    fn action_exposes_wire_method() {
        assert_eq!(ItemAction::Copy("x".into()).method(), "copy");
        assert_eq!(ItemAction::ChangeQuery("fake ".into()).parameter(), "fake ");
    }
}
