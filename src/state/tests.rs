use std::{
    cell::Cell,
    fs::{remove_dir_all, write},
    rc::Rc,
    sync::Arc,
};

use tempfile::tempdir;

use crate::{
    binding::{Binding, TextCell, TextControl, ToggleCell, ToggleControl, link_toggles},
    config::{OptionValue, OptionsStore, ScopeKey, TypeHint, fonts::font_set},
    error::PreferencesError,
    state::{PreferencesEvent, PreferencesNotifier, PreferencesSession},
};

const TITLE_FONT: &str = "workbench.physical.TableFigure:TitleFont";

fn context_session(store: &Arc<OptionsStore>) -> (PreferencesSession, Rc<TextCell>) {
    let session = PreferencesSession::new(
        store.clone(),
        ScopeKey::context("model-1"),
        PreferencesNotifier::new(),
    );
    let delimiter = Rc::new(TextCell::default());
    session.bind("SqlDelimiter", Binding::text(delimiter.clone()));
    (session, delimiter)
}

#[test]
fn test_update_values_writes_context_scope() {
    let store = Arc::new(OptionsStore::in_memory());
    let (session, delimiter) = context_session(&store);

    session.show_values();
    assert_eq!(delimiter.text(), "$$");

    delimiter.set_text("//");
    session.update_values().unwrap();

    let scope = ScopeKey::context("model-1");
    assert_eq!(store.get(&scope, "SqlDelimiter"), "//");
    assert_eq!(store.get(&ScopeKey::Global, "SqlDelimiter"), "$$");
    assert!(!store.uses_global_defaults(&scope));
}

#[test]
fn test_toggle_is_written_before_bindings() {
    let store = Arc::new(OptionsStore::in_memory());
    let (session, delimiter) = context_session(&store);
    let scope = ScopeKey::context("model-1");

    session.show_values();
    delimiter.set_text("//");
    session.set_use_global(true);
    session.update_values().unwrap();

    assert!(store.uses_global_defaults(&scope));
    assert_eq!(store.raw_value(&scope, "SqlDelimiter"), None);

    session.set_use_global(false);
    session.update_values().unwrap();
    assert!(!store.uses_global_defaults(&scope));
    assert_eq!(store.get(&scope, "SqlDelimiter"), "//");
}

#[test]
fn test_toggle_change_is_not_stored_until_update() {
    let store = Arc::new(OptionsStore::in_memory());
    let (session, _) = context_session(&store);

    session.set_use_global(true);
    assert!(session.uses_global());
    assert!(!store.uses_global_defaults(&ScopeKey::context("model-1")));

    session.show_values();
    assert!(!session.uses_global());
}

#[test]
fn test_show_is_not_suppressed_by_toggle() {
    let store = Arc::new(OptionsStore::in_memory());
    let scope = ScopeKey::context("model-1");
    store.set(&scope, "SqlDelimiter", "//", TypeHint::String);
    store.set_use_global_defaults("model-1", true);

    let (session, delimiter) = context_session(&store);
    assert!(session.uses_global());
    session.show_values();
    assert_eq!(delimiter.text(), "$$");
}

#[test]
fn test_global_session_edits_fonts() {
    let store = Arc::new(OptionsStore::in_memory());
    let session = PreferencesSession::new(
        store.clone(),
        ScopeKey::Global,
        PreferencesNotifier::new(),
    );
    session.show_values();
    assert!(!session.fonts().rows().is_empty());

    assert!(session.set_font(TITLE_FONT, "Serif Bold 14"));
    assert!(!session.set_font("workbench.physical.Unknown", "Serif 9"));
    session.update_values().unwrap();
    assert_eq!(
        store.raw_value(&ScopeKey::Global, TITLE_FONT),
        Some(OptionValue::Str("Serif Bold 14".to_string()))
    );
}

#[test]
fn test_apply_font_preset() {
    let store = Arc::new(OptionsStore::in_memory());
    let session = PreferencesSession::new(
        store.clone(),
        ScopeKey::Global,
        PreferencesNotifier::new(),
    );
    session.show_values();

    session.apply_font_preset("ja").unwrap();
    let japanese = font_set("ja").unwrap();
    assert_eq!(session.fonts().value(TITLE_FONT), Some(japanese.object_title));

    assert!(matches!(
        session.apply_font_preset("xx"),
        Err(PreferencesError::InvalidOption { .. })
    ));
}

#[test]
fn test_context_session_leaves_fonts_alone() {
    let store = Arc::new(OptionsStore::in_memory());
    let before = store.get(&ScopeKey::Global, TITLE_FONT);
    let (session, _) = context_session(&store);

    session.show_values();
    assert!(session.fonts().rows().is_empty());
    session.update_values().unwrap();
    assert_eq!(store.get(&ScopeKey::Global, TITLE_FONT), before);
}

#[test]
fn test_lifecycle_notifications() {
    let notifier = PreferencesNotifier::new();
    let events = notifier.subscribe();
    let store = Arc::new(OptionsStore::in_memory());
    let session = PreferencesSession::new(store, ScopeKey::Global, notifier);

    session.announce_will_open();
    session.ok().unwrap();
    session.cancel();

    let received: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert_eq!(
        received,
        vec![
            PreferencesEvent::Created {
                scope: ScopeKey::Global
            },
            PreferencesEvent::WillOpen {
                scope: ScopeKey::Global
            },
            PreferencesEvent::DidClose {
                scope: ScopeKey::Global,
                saved: true
            },
        ]
    );
    assert!(session.is_closed());
}

#[test]
fn test_cancel_discards_edits() {
    let store = Arc::new(OptionsStore::in_memory());
    let (session, delimiter) = context_session(&store);
    let events = session.notifier().subscribe();

    session.announce_will_open();
    delimiter.set_text("//");
    session.cancel();
    session.ok().unwrap();

    assert_eq!(delimiter.text(), "$$");
    assert_eq!(store.raw_value(&ScopeKey::context("model-1"), "SqlDelimiter"), None);
    assert!(matches!(events.try_recv(), Ok(PreferencesEvent::WillOpen { .. })));
    assert!(matches!(
        events.try_recv(),
        Ok(PreferencesEvent::DidClose { saved: false, .. })
    ));
    assert!(events.try_recv().is_err());
}

#[test]
fn test_ok_persists_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefsform").join("options.json");
    let store = Arc::new(OptionsStore::with_config_path(path.clone()).unwrap());
    let session = PreferencesSession::new(
        store,
        ScopeKey::Global,
        PreferencesNotifier::new(),
    );
    let undo = Rc::new(TextCell::default());
    session.bind("workbench:UndoEntries", Binding::numeric(undo.clone(), 1, 500));

    session.announce_will_open();
    undo.set_text("9000");
    session.ok().unwrap();

    let reloaded = OptionsStore::with_config_path(path).unwrap();
    assert_eq!(reloaded.get(&ScopeKey::Global, "workbench:UndoEntries"), "500");
}

#[test]
fn test_global_binding_in_context_session() {
    let store = Arc::new(OptionsStore::in_memory());
    let (session, _) = context_session(&store);
    let snapshots = Rc::new(ToggleCell::default());
    session.bind_global(
        "workbench:SaveSQLWorkspaceOnClose",
        Binding::checkbox(snapshots.clone()),
    );

    session.show_values();
    snapshots.set_active(false);
    session.set_use_global(true);
    session.update_values().unwrap();

    assert_eq!(
        store.raw_value(&ScopeKey::Global, "workbench:SaveSQLWorkspaceOnClose"),
        Some(OptionValue::Int(0))
    );
}

#[test]
fn test_failed_save_rolls_back_store() {
    let dir = tempdir().unwrap();
    let options_dir = dir.path().join("prefsform");
    let store = Arc::new(OptionsStore::with_config_path(options_dir.join("options.json")).unwrap());
    let session = PreferencesSession::new(
        store.clone(),
        ScopeKey::Global,
        PreferencesNotifier::new(),
    );
    let undo = Rc::new(TextCell::default());
    session.bind("workbench:UndoEntries", Binding::numeric(undo.clone(), 1, 500));

    // A file where the options directory should be makes every write fail.
    remove_dir_all(&options_dir).unwrap();
    write(&options_dir, "").unwrap();

    session.announce_will_open();
    undo.set_text("42");
    assert!(matches!(session.ok(), Err(PreferencesError::Store(_))));
    assert!(!session.is_closed());
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "250");

    session.cancel();
    assert_eq!(undo.text(), "250");
    assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "250");
}

#[test]
fn test_show_values_marks_programmatic_changes() {
    let store = Arc::new(OptionsStore::in_memory());
    store.set(&ScopeKey::Global, "workbench:SaveSQLWorkspaceOnClose", "1", TypeHint::Integer);
    store.set(&ScopeKey::Global, "DbSqlEditor:DiscardUnsavedQueryTabs", "0", TypeHint::Integer);
    let session = Rc::new(PreferencesSession::new(
        store,
        ScopeKey::Global,
        PreferencesNotifier::new(),
    ));

    let save_workspace = Rc::new(ToggleCell::default());
    let discard_unsaved = Rc::new(ToggleCell::default());
    session.bind(
        "workbench:SaveSQLWorkspaceOnClose",
        Binding::checkbox(save_workspace.clone()),
    );

    // Mirrors a change handler on the source row that links the target
    // only for user edits.
    let seen_while_showing = Rc::new(Cell::new(false));
    let weak = Rc::downgrade(&session);
    let (source, target, seen) = (
        save_workspace.clone(),
        discard_unsaved.clone(),
        seen_while_showing.clone(),
    );
    session.bind(
        "workbench:SaveSQLWorkspaceOnClose",
        Binding::from_fns(
            move |_, _| {
                let Some(session) = weak.upgrade() else {
                    return;
                };
                seen.set(session.is_showing());
                if !session.is_showing() {
                    link_toggles(&*source, &*target, true, true);
                }
            },
            |_, _| {},
        ),
    );
    session.bind(
        "DbSqlEditor:DiscardUnsavedQueryTabs",
        Binding::checkbox(discard_unsaved.clone()),
    );

    session.show_values();

    assert!(seen_while_showing.get());
    assert!(!session.is_showing());
    assert!(save_workspace.is_active());
    assert!(!discard_unsaved.is_active());
    assert!(discard_unsaved.is_enabled());
}
