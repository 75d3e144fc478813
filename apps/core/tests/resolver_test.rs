use fakeflow_core::config::Config;
use fakeflow_core::generators::Registry;
use fakeflow_core::metadata::MetadataTable;
use fakeflow_core::model::{ItemAction, ResultItem};
use fakeflow_core::resolver::{Resolver, ROW_COUNT};

fn resolve_with(metadata: &MetadataTable, query: &str) -> Vec<ResultItem> {
    let registry = Registry::new();
    let config = Config::default();
    Resolver::new(&registry, metadata, &config).resolve(query)
}

fn resolve(query: &str) -> Vec<ResultItem> {
    resolve_with(&MetadataTable::default(), query)
}

fn titles(items: &[ResultItem]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn empty_query_lists_every_category_sorted() {
    let items = resolve("");
    let registry = Registry::new();
    assert_eq!(items.len(), registry.category_names().len());

    let names = titles(&items);
    let mut sorted = names.clone();
    sorted.sort_by_key(|name| name.to_lowercase());
    assert_eq!(names, sorted);

    for item in &items {
        assert_eq!(
            item.action,
            ItemAction::ChangeQuery(format!("fake {} ", item.title))
        );
        assert_eq!(item.subtitle, format!("Browse {} modules", item.title));
        assert!(item.context_data.is_empty());
    }
}

#[test]
fn partial_category_filters_by_prefix() {
    let items = resolve("p");
    assert_eq!(titles(&items), vec!["person", "phone"]);

    let items = resolve("PER");
    assert_eq!(titles(&items), vec!["person"]);
    assert_eq!(items[0].action, ItemAction::ChangeQuery("fake person ".into()));
}

#[test]
fn exact_category_lists_its_modules() {
    let items = resolve("person");
    assert!(titles(&items).contains(&"firstName"));
    assert!(titles(&items).contains(&"fullName"));
    let first_name = items.iter().find(|item| item.title == "firstName").unwrap();
    assert_eq!(
        first_name.action,
        ItemAction::ChangeQuery("fake person firstName ".into())
    );
    assert_eq!(first_name.subtitle, "Generate person.firstName");
}

#[test]
fn unknown_category_resets_to_keyword_prompt() {
    for query in ["xyz", "xyz ", "xyz abc"] {
        let items = resolve(query);
        assert_eq!(items.len(), 1, "{query}");
        assert_eq!(items[0].title, "Category not found");
        assert_eq!(items[0].action, ItemAction::ChangeQuery("fake ".into()));
    }
}

#[test]
fn category_lookup_after_space_is_case_sensitive() {
    let items = resolve("Person ");
    assert_eq!(titles(&items), vec!["Category not found"]);
}

#[test]
fn module_prefix_filters_case_insensitively() {
    let items = resolve("person JOB");
    assert_eq!(
        titles(&items),
        vec!["jobArea", "jobDescriptor", "jobTitle", "jobType"]
    );
}

#[test]
fn module_subtitles_come_from_metadata() {
    let metadata = MetadataTable::parse(
        r#"{"person": {"firstName": {"description": "Returns a first name", "params": ["sex"]}}}"#,
    )
    .unwrap();
    let items = resolve_with(&metadata, "person first");
    assert_eq!(items[0].subtitle, "Returns a first name | Params: sex");
}

#[test]
fn generation_always_returns_five_rows_of_repeat_values() {
    for repeat in [1, 2, 7] {
        let items = resolve(&format!("person firstName repeat:{repeat}"));
        assert_eq!(items.len(), ROW_COUNT);
        for item in &items {
            assert_eq!(item.context_data.len(), repeat);
        }
    }
}

#[test]
fn single_value_row_copies_that_value() {
    let items = resolve("string uuid");
    for item in &items {
        assert_eq!(item.context_data.len(), 1);
        assert_eq!(item.title, item.context_data[0]);
        assert_eq!(item.subtitle, "Copy to clipboard (string.uuid)");
        assert_eq!(item.action, ItemAction::Copy(item.title.clone()));
    }
}

#[test]
fn module_match_is_case_insensitive() {
    let items = resolve("person FIRSTNAME");
    assert_eq!(items.len(), ROW_COUNT);
    assert!(matches!(items[0].action, ItemAction::Copy(_)));
}

#[test]
fn last_first_order_swaps_names() {
    let items = resolve("person fullName order:last-first sex:female");
    assert_eq!(items.len(), ROW_COUNT);
    for item in &items {
        assert!(item.title.split(' ').count() >= 2, "{}", item.title);
    }
}

#[test]
fn last_first_order_forwards_arguments_to_name_generators() {
    let items = resolve("person fullName order:lf sex:robot");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Error generating data");
    assert_eq!(
        items[0].subtitle,
        "invalid argument 'sex': expected 'female' or 'male'"
    );
}

#[test]
fn first_name_rejects_unknown_sex() {
    let items = resolve("person firstName sex:robot");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Error generating data");
}

#[test]
fn overflowing_bounds_yield_error_items() {
    for query in [
        "number float min:-1e308 max:1e308",
        "finance amount min:-1e308 max:1e308",
        "date past refDate:-9223372036854775807",
        "date birthdate refDate:-9223372036854775807",
    ] {
        let items = resolve(query);
        assert_eq!(items.len(), 1, "{query}");
        assert_eq!(items[0].title, "Error generating data", "{query}");
    }
}

#[test]
fn composite_values_are_json_text() {
    let items = resolve(r#"helpers arrayElements array:["a","b","c"] count:2"#);
    assert_eq!(items.len(), ROW_COUNT);
    let parsed: Vec<String> = serde_json::from_str(&items[0].title).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn invalid_arguments_surface_as_error_item() {
    let items = resolve("string alpha length:-3");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Error generating data");
    assert_eq!(
        items[0].subtitle,
        "invalid argument 'length': must not be negative"
    );
}

#[test]
fn configured_keyword_prefixes_follow_up_queries() {
    let registry = Registry::new();
    let metadata = MetadataTable::default();
    let config = Config {
        action_keyword: "fk".into(),
        ..Config::default()
    };
    let items = Resolver::new(&registry, &metadata, &config).resolve("phone ");
    assert!(items
        .iter()
        .all(|item| item.action.parameter().starts_with("fk phone ")));
}
