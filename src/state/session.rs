//! Non-visual state of one preferences dialog.
//!
//! A session is opened either for the global scope or for a single context
//! (for example a model document). It owns the option registry, the font
//! table and the "use global defaults" toggle, and it announces its
//! lifecycle through a [`PreferencesNotifier`].

use std::{
    cell::{Cell, Ref, RefCell},
    sync::Arc,
};

use tracing::{debug, info, warn};

use crate::{
    binding::{Binding, OptionHandle, OptionRegistry},
    config::{FontTable, OptionsStore, ScopeKey, fonts::font_set},
    error::PreferencesError,
    state::events::{PreferencesEvent, PreferencesNotifier},
};

/// Preferences session over a shared options store.
#[derive(Debug)]
pub struct PreferencesSession {
    /// Options store the session reads from and writes to.
    store: Arc<OptionsStore>,
    /// Bindings of every control shown by the dialog.
    registry: RefCell<OptionRegistry>,
    /// Pending value of the context's "use global defaults" flag.
    use_global: Cell<bool>,
    /// Figure fonts, edited in global mode only.
    fonts: RefCell<FontTable>,
    /// Lifecycle event fan-out.
    notifier: PreferencesNotifier,
    /// Whether `ok` or `cancel` already ran since the last open.
    closed: Cell<bool>,
    /// Set while stored values are pulled into the controls.
    showing: Cell<bool>,
}

impl PreferencesSession {
    /// Creates a session for `scope` and announces it.
    ///
    /// # Arguments
    ///
    /// * `store` - Shared options store
    /// * `scope` - Global scope or the context being edited
    /// * `notifier` - Receives the session's lifecycle events
    ///
    /// # Returns
    ///
    /// A new `PreferencesSession` with an empty registry.
    pub fn new(store: Arc<OptionsStore>, scope: ScopeKey, notifier: PreferencesNotifier) -> Self {
        debug!("PreferencesSession: created for {:?}", scope);
        let use_global = store.uses_global_defaults(&scope);
        notifier.broadcast(&PreferencesEvent::Created {
            scope: scope.clone(),
        });

        Self {
            store,
            registry: RefCell::new(OptionRegistry::new(scope)),
            use_global: Cell::new(use_global),
            fonts: RefCell::new(FontTable::default()),
            notifier,
            closed: Cell::new(false),
            showing: Cell::new(false),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<OptionsStore> {
        &self.store
    }

    #[must_use]
    pub fn notifier(&self) -> &PreferencesNotifier {
        &self.notifier
    }

    /// Scope of the session.
    #[must_use]
    pub fn scope(&self) -> ScopeKey {
        self.registry.borrow().scope().clone()
    }

    /// Whether the session edits the global scope.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.registry.borrow().scope().is_global()
    }

    /// Registers a binding in the session scope.
    pub fn bind(&self, key: impl Into<String>, binding: Binding) -> OptionHandle {
        self.registry.borrow_mut().bind(key, binding)
    }

    /// Registers a binding that always targets the global scope.
    pub fn bind_global(&self, key: impl Into<String>, binding: Binding) -> OptionHandle {
        self.registry.borrow_mut().bind_global(key, binding)
    }

    #[must_use]
    pub fn registry(&self) -> Ref<'_, OptionRegistry> {
        self.registry.borrow()
    }

    /// Pulls every stored value into the controls.
    ///
    /// In global mode the font table is reloaded. In context mode the
    /// pending toggle is reset to the stored flag.
    pub fn show_values(&self) {
        let registry = self.registry.borrow();
        self.showing.set(true);
        registry.show_all(&self.store);
        self.showing.set(false);

        match registry.scope() {
            ScopeKey::Global => *self.fonts.borrow_mut() = FontTable::load(&self.store),
            ScopeKey::Context(_) => {
                let use_global = self.store.uses_global_defaults(registry.scope());
                self.use_global.set(use_global);
            }
        }
    }

    /// Writes every control's value into the store and saves it.
    ///
    /// In context mode the toggle is written first, so the registry sees
    /// the new flag when it decides whether to skip session bindings.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Store` if the store cannot be saved. The
    /// in-memory store is rolled back to its previous contents in that case.
    pub fn update_values(&self) -> Result<(), PreferencesError> {
        let registry = self.registry.borrow();
        let previous = self.store.snapshot();

        if let Some(id) = registry.scope().context_id() {
            self.store
                .set_use_global_defaults(id, self.use_global.get());
        }

        let written = registry.update_all(&self.store);

        if registry.scope().is_global() {
            self.fonts.borrow().update(&self.store);
        }

        if let Err(e) = self.store.save() {
            warn!("Rolling back unsaved preferences for {:?}: {}", registry.scope(), e);
            self.store.restore(previous);
            return Err(e.into());
        }

        info!(
            "Preferences for {:?} saved ({} options written)",
            registry.scope(),
            written
        );
        Ok(())
    }

    /// Toggles "use global defaults". Takes effect on `update_values`.
    pub fn set_use_global(&self, use_global: bool) {
        debug!("PreferencesSession: use global defaults -> {}", use_global);
        self.use_global.set(use_global);
    }

    #[must_use]
    pub fn uses_global(&self) -> bool {
        self.use_global.get()
    }

    #[must_use]
    pub fn fonts(&self) -> Ref<'_, FontTable> {
        self.fonts.borrow()
    }

    /// Changes one listed font.
    ///
    /// # Returns
    ///
    /// `false` when `key` is not a listed font option.
    pub fn set_font(&self, key: &str, value: &str) -> bool {
        self.fonts.borrow_mut().set_font(key, value)
    }

    /// Applies the font set of the locale `tag` to the listed fonts.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::InvalidOption` for an unknown tag.
    pub fn apply_font_preset(&self, tag: &str) -> Result<(), PreferencesError> {
        let set = font_set(tag).ok_or_else(|| PreferencesError::InvalidOption {
            key: "font preset".to_string(),
            reason: format!("unknown locale tag {tag:?}"),
        })?;

        debug!("PreferencesSession: applying font set {}", set.name);
        self.fonts.borrow_mut().apply_preset(set);
        Ok(())
    }

    /// Shows the stored values and announces that the dialog opens.
    pub fn announce_will_open(&self) {
        self.closed.set(false);
        self.show_values();
        self.notifier.broadcast(&PreferencesEvent::WillOpen {
            scope: self.scope(),
        });
    }

    /// Applies the values and closes the session.
    ///
    /// Does nothing if the session is already closed.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Store` if the store cannot be saved. The
    /// session stays open in that case.
    pub fn ok(&self) -> Result<(), PreferencesError> {
        if self.closed.get() {
            return Ok(());
        }

        self.update_values()?;
        self.close(true);
        Ok(())
    }

    /// Discards pending edits and closes the session without saving.
    ///
    /// Does nothing if the session is already closed.
    pub fn cancel(&self) {
        if self.closed.get() {
            return;
        }

        self.show_values();
        self.close(false);
    }

    /// Whether stored values are being shown. Control change handlers use
    /// this to tell user edits from programmatic ones.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.showing.get()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    fn close(&self, saved: bool) {
        self.closed.set(true);
        self.notifier.broadcast(&PreferencesEvent::DidClose {
            scope: self.scope(),
            saved,
        });
    }
}
