//! Tests for option bindings and the registry.
//!
//! These tests drive the registry with headless controls against an
//! in-memory store.

use std::{cell::RefCell, rc::Rc};

use crate::{
    binding::{
        Binding, BindingScope, ChoiceCell, ChoiceControl, Choices, OptionRegistry, PathKind,
        TextCell, TextControl, ToggleCell, ToggleControl,
    },
    config::{OptionValue, OptionsStore, ScopeKey, TypeHint},
};

fn numeric_registry(store: &OptionsStore) -> (OptionRegistry, TextCell) {
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let entry = TextCell::default();
    registry.bind(
        "workbench:UndoEntries",
        Binding::numeric(Rc::new(entry.clone()), 1, 500),
    );
    registry.show_all(store);
    (registry, entry)
}

#[test]
fn test_numeric_binding_clamps_low_values() {
    let store = OptionsStore::in_memory();
    let (registry, entry) = numeric_registry(&store);

    entry.set_text("0");
    registry.update_all(&store);
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "1");
}

#[test]
fn test_numeric_binding_clamps_high_values() {
    let store = OptionsStore::in_memory();
    let (registry, entry) = numeric_registry(&store);

    entry.set_text("1000");
    registry.update_all(&store);
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "500");
}

#[test]
fn test_numeric_binding_treats_garbage_as_zero() {
    let store = OptionsStore::in_memory();
    let (registry, entry) = numeric_registry(&store);

    entry.set_text("lots");
    registry.update_all(&store);
    assert_eq!(
        store.raw_value(&ScopeKey::Global, "workbench:UndoEntries"),
        Some(OptionValue::Int(1))
    );

    entry.set_text("42 entries");
    registry.update_all(&store);
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "42");
}

#[test]
fn test_numeric_binding_ignores_non_ascii_digits() {
    let store = OptionsStore::in_memory();
    let (registry, entry) = numeric_registry(&store);

    entry.set_text("\u{663}");
    registry.update_all(&store);
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "1");
}

#[test]
fn test_choices_parse() {
    let choices = Choices::parse("A:1,B:2");
    assert_eq!(choices.labels(), ["A".to_string(), "B".to_string()]);
    assert_eq!(choices.values(), ["1".to_string(), "2".to_string()]);
    assert_eq!(choices.default_value(), "1");

    let bare = Choices::parse("InnoDB,MyISAM");
    assert_eq!(bare.labels(), bare.values());

    let colon_value = Choices::parse("--:--,#:#,Time:10:30");
    assert_eq!(colon_value.value_at(2), Some("10:30"));

    let empty = Choices::parse("");
    assert!(empty.is_empty());
    assert_eq!(empty.default_value(), "");
}

#[test]
fn test_choices_lookup_from_store() {
    let store = OptionsStore::in_memory();
    let choices =
        Choices::parse_or_lookup("", "db.mysql.Table:tableEngine", &store, &ScopeKey::Global);
    assert_eq!(choices.len(), 5);
    assert_eq!(choices.position("MyISAM"), Some(1));

    let explicit = Choices::parse_or_lookup("X:1", "db.mysql.Table:tableEngine", &store, &ScopeKey::Global);
    assert_eq!(explicit.len(), 1);
}

#[test]
fn test_selector_binding_stores_selected_value() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let selector = ChoiceCell::default();
    registry.bind(
        "Selection",
        Binding::selector(Rc::new(selector.clone()), Choices::parse("A:1,B:2"), false),
    );
    assert_eq!(selector.items(), vec!["A".to_string(), "B".to_string()]);

    selector.set_selected(Some(1));
    registry.update_all(&store);
    assert_eq!(store.get(&ScopeKey::Global, "Selection"), "2");
}

#[test]
fn test_selector_binding_falls_back_to_default() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let selector = ChoiceCell::default();
    registry.bind(
        "Selection",
        Binding::selector(Rc::new(selector.clone()), Choices::parse("A:1,B:2"), true),
    );

    registry.show_all(&store);
    assert_eq!(selector.selected(), None);

    registry.update_all(&store);
    assert_eq!(
        store.raw_value(&ScopeKey::Global, "Selection"),
        Some(OptionValue::Int(1))
    );
}

#[test]
fn test_selector_show_selects_stored_value() {
    let store = OptionsStore::in_memory();
    store.set(&ScopeKey::Global, "Selection", "2", TypeHint::Integer);
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let selector = ChoiceCell::default();
    registry.bind(
        "Selection",
        Binding::selector(Rc::new(selector.clone()), Choices::parse("A:1,B:2"), true),
    );

    registry.show_all(&store);
    assert_eq!(selector.selected(), Some(1));

    store.set(&ScopeKey::Global, "Selection", "3", TypeHint::Integer);
    registry.show_all(&store);
    assert_eq!(selector.selected(), None);
}

#[test]
fn test_checkbox_binding_encodes_flags() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let check = ToggleCell::default();
    registry.bind("SqlIdentifiersCS", Binding::checkbox(Rc::new(check.clone())));

    registry.show_all(&store);
    assert!(check.is_active());

    check.set_active(false);
    registry.update_all(&store);
    assert_eq!(
        store.raw_value(&ScopeKey::Global, "SqlIdentifiersCS"),
        Some(OptionValue::Int(0))
    );

    store.set(&ScopeKey::Global, "SqlIdentifiersCS", "7", TypeHint::Any);
    registry.show_all(&store);
    assert!(check.is_active());

    store.set(&ScopeKey::Global, "SqlIdentifiersCS", "\u{663}", TypeHint::Any);
    registry.show_all(&store);
    assert!(!check.is_active());
}

#[test]
fn test_text_and_path_bindings_store_strings() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let schema = TextCell::default();
    let dump = TextCell::default();
    registry.bind("workbench:InternalSchema", Binding::text(Rc::new(schema.clone())));
    registry.bind(
        "mysqldump",
        Binding::path(Rc::new(dump.clone()), PathKind::File),
    );

    schema.set_text("123");
    dump.set_text("/usr/bin/mysqldump");
    registry.update_all(&store);

    assert_eq!(
        store.raw_value(&ScopeKey::Global, "workbench:InternalSchema"),
        Some(OptionValue::Str("123".to_string()))
    );
    assert_eq!(store.get(&ScopeKey::Global, "mysqldump"), "/usr/bin/mysqldump");
}

#[test]
fn test_numeric_text_binding_keeps_integer_type() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let entry = TextCell::default();
    registry.bind(
        "DbSqlEditor:KeepAliveInterval",
        Binding::numeric_text(Rc::new(entry.clone())),
    );

    registry.show_all(&store);
    assert_eq!(entry.text(), "600");
    registry.update_all(&store);
    assert_eq!(
        store.raw_value(&ScopeKey::Global, "DbSqlEditor:KeepAliveInterval"),
        Some(OptionValue::Int(600))
    );
}

#[test]
fn test_show_then_update_round_trip() {
    let store = OptionsStore::in_memory();
    let context = ScopeKey::context("doc");
    store.set(&context, "SqlDelimiter", "//", TypeHint::String);
    store.set(&context, "db.ForeignKey:updateRule", "CASCADE", TypeHint::Any);

    let mut registry = OptionRegistry::new(context.clone());
    registry.bind("SqlDelimiter", Binding::text(Rc::new(TextCell::default())));
    registry.bind(
        "workbench:UndoEntries",
        Binding::numeric(Rc::new(TextCell::default()), 1, 500),
    );
    registry.bind(
        "SqlIdentifiersCS",
        Binding::checkbox(Rc::new(ToggleCell::default())),
    );
    registry.bind(
        "db.ForeignKey:updateRule",
        Binding::selector(
            Rc::new(ChoiceCell::default()),
            Choices::parse_or_lookup("", "db.ForeignKey:updateRule", &store, &context),
            false,
        ),
    );
    registry.bind(
        "workbench:AutoSaveModelInterval",
        Binding::selector(
            Rc::new(ChoiceCell::default()),
            Choices::parse("disable:0,10 seconds:10,1 minute:60"),
            true,
        ),
    );

    let before: Vec<String> = registry.keys().map(|key| store.get(&context, key)).collect();

    registry.show_all(&store);
    registry.update_all(&store);
    let after: Vec<String> = registry.keys().map(|key| store.get(&context, key)).collect();
    assert_eq!(before, after);

    registry.show_all(&store);
    registry.update_all(&store);
    let again: Vec<String> = registry.keys().map(|key| store.get(&context, key)).collect();
    assert_eq!(after, again);
}

#[test]
fn test_use_global_defaults_suppresses_context_writes() {
    let store = OptionsStore::in_memory();
    let context = ScopeKey::context("doc");
    store.set(&context, "SqlDelimiter", "//", TypeHint::String);

    let mut registry = OptionRegistry::new(context.clone());
    let delimiter = TextCell::default();
    let undo = TextCell::default();
    registry.bind("SqlDelimiter", Binding::text(Rc::new(delimiter.clone())));
    registry.bind(
        "workbench:UndoEntries",
        Binding::numeric(Rc::new(undo.clone()), 1, 500),
    );
    registry.show_all(&store);

    let keys_before = store.keys(&context);
    store.set_use_global_defaults("doc", true);
    let snapshot = store.snapshot();

    delimiter.set_text(";;");
    undo.set_text("3");
    assert_eq!(registry.update_all(&store), 0);

    assert_eq!(store.snapshot(), snapshot);
    assert_eq!(
        store.raw_value(&context, "SqlDelimiter"),
        Some(OptionValue::Str("//".to_string()))
    );
    assert_eq!(store.raw_value(&context, "workbench:UndoEntries"), None);
    assert_eq!(store.keys(&context).len(), keys_before.len() + 1);
}

#[test]
fn test_global_bindings_apply_while_suppressed() {
    let store = OptionsStore::in_memory();
    let context = ScopeKey::context("doc");
    store.set_use_global_defaults("doc", true);

    let mut registry = OptionRegistry::new(context.clone());
    let colors = TextCell::default();
    let delimiter = TextCell::default();
    let handle = registry.bind_global(
        "workbench.model.Figure:ColorList",
        Binding::text(Rc::new(colors.clone())),
    );
    registry.bind("SqlDelimiter", Binding::text(Rc::new(delimiter.clone())));
    assert_eq!(registry.get(handle).unwrap().scope(), BindingScope::Global);

    colors.set_text("#FFFFFF");
    delimiter.set_text(";;");
    assert_eq!(registry.update_all(&store), 1);

    assert_eq!(
        store.get(&ScopeKey::Global, "workbench.model.Figure:ColorList"),
        "#FFFFFF"
    );
    assert_eq!(store.raw_value(&context, "workbench.model.Figure:ColorList"), None);
    assert_eq!(store.raw_value(&context, "SqlDelimiter"), None);
}

#[test]
fn test_show_is_not_suppressed() {
    let store = OptionsStore::in_memory();
    let context = ScopeKey::context("doc");
    store.set_use_global_defaults("doc", true);

    let mut registry = OptionRegistry::new(context);
    let delimiter = TextCell::default();
    registry.bind("SqlDelimiter", Binding::text(Rc::new(delimiter.clone())));

    registry.show_all(&store);
    assert_eq!(delimiter.text(), "$$");
}

#[test]
fn test_show_all_visits_in_registration_order() {
    let store = OptionsStore::in_memory();
    let visits = Rc::new(RefCell::new(Vec::new()));
    let mut registry = OptionRegistry::new(ScopeKey::Global);

    for name in ["c", "a", "b"] {
        let shown = visits.clone();
        let updated = visits.clone();
        registry.bind(
            name,
            Binding::from_fns(
                move |_, _| shown.borrow_mut().push(format!("show {name}")),
                move |_, _| updated.borrow_mut().push(format!("update {name}")),
            ),
        );
    }

    registry.show_all(&store);
    registry.update_all(&store);
    assert_eq!(
        *visits.borrow(),
        vec![
            "show c", "show a", "show b", "update c", "update a", "update b"
        ]
    );
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
}

#[test]
fn test_custom_binding_receives_registry_scope() {
    let store = OptionsStore::in_memory();
    let seen = Rc::new(RefCell::new(None));
    let mut registry = OptionRegistry::new(ScopeKey::context("doc"));

    let recorder = seen.clone();
    registry.bind(
        "custom",
        Binding::from_fns(
            move |_, scope| *recorder.borrow_mut() = Some(scope.clone()),
            |_, _| {},
        ),
    );
    registry.show_all(&store);

    assert_eq!(*seen.borrow(), Some(ScopeKey::context("doc")));
}

#[test]
fn test_single_binding_show_and_update() {
    let store = OptionsStore::in_memory();
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let first = TextCell::default();
    let second = TextCell::default();
    let handle = registry.bind("SqlMode", Binding::text(Rc::new(first.clone())));
    registry.bind("SqlDelimiter", Binding::text(Rc::new(second.clone())));

    registry.show(handle, &store);
    assert_eq!(first.text(), "");
    assert_eq!(second.text(), "");

    first.set_text("ANSI");
    registry.update(handle, &store);
    assert_eq!(store.get(&ScopeKey::Global, "SqlMode"), "ANSI");
    assert_eq!(store.get(&ScopeKey::Global, "SqlDelimiter"), "$$");
}

#[test]
fn test_clear_releases_all_bindings() {
    let mut registry = OptionRegistry::new(ScopeKey::Global);
    let control = Rc::new(TextCell::default());
    registry.bind("SqlMode", Binding::text(control.clone()));
    assert_eq!(Rc::strong_count(&control), 2);
    assert_eq!(registry.len(), 1);

    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(Rc::strong_count(&control), 1);
}

#[test]
fn test_binding_debug_names_variant() {
    let binding = Binding::numeric(Rc::new(TextCell::default()), 1, 500);
    assert_eq!(binding.kind(), "numeric");
    assert_eq!(format!("{binding:?}"), "Numeric { min: 1, max: 500 }");
}
