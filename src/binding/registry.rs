//! Ordered registry of option bindings.
//!
//! The registry is owned by a preferences session. Bindings are appended as
//! their controls are created and are only ever released together, when
//! the registry is cleared or dropped.

use tracing::debug;

use crate::{
    binding::option::Binding,
    config::{OptionsStore, ScopeKey},
};

static GLOBAL_SCOPE: ScopeKey = ScopeKey::Global;

/// Which scope a binding reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingScope {
    /// The scope of the owning registry. Writes are suppressed while that
    /// scope uses global defaults.
    #[default]
    Session,
    /// Always the global scope, never suppressed.
    Global,
}

/// Handle to a registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionHandle(usize);

impl OptionHandle {
    /// Registration index of the binding.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A binding registered under a store key.
#[derive(Debug)]
pub struct OptionEntry {
    key: String,
    binding: Binding,
    scope: BindingScope,
}

impl OptionEntry {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    #[must_use]
    pub fn scope(&self) -> BindingScope {
        self.scope
    }
}

/// Bindings of one preferences session, in registration order.
#[derive(Debug)]
pub struct OptionRegistry {
    scope: ScopeKey,
    entries: Vec<OptionEntry>,
}

impl OptionRegistry {
    /// Creates an empty registry for `scope`.
    #[must_use]
    pub fn new(scope: ScopeKey) -> Self {
        Self {
            scope,
            entries: Vec::new(),
        }
    }

    /// Scope session bindings read and write.
    #[must_use]
    pub fn scope(&self) -> &ScopeKey {
        &self.scope
    }

    /// Registers a binding for `key` in the session scope.
    pub fn bind(&mut self, key: impl Into<String>, binding: Binding) -> OptionHandle {
        self.push(key.into(), binding, BindingScope::Session)
    }

    /// Registers a binding for `key` in the global scope.
    pub fn bind_global(&mut self, key: impl Into<String>, binding: Binding) -> OptionHandle {
        self.push(key.into(), binding, BindingScope::Global)
    }

    fn push(&mut self, key: String, binding: Binding, scope: BindingScope) -> OptionHandle {
        debug!(
            "OptionRegistry: binding {} option {} ({:?})",
            binding.kind(),
            key,
            scope
        );
        self.entries.push(OptionEntry {
            key,
            binding,
            scope,
        });
        OptionHandle(self.entries.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, handle: OptionHandle) -> Option<&OptionEntry> {
        self.entries.get(handle.0)
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(OptionEntry::key)
    }

    fn entry_scope<'a>(&'a self, entry: &OptionEntry) -> &'a ScopeKey {
        match entry.scope {
            BindingScope::Session => &self.scope,
            BindingScope::Global => &GLOBAL_SCOPE,
        }
    }

    /// Shows a single binding.
    pub fn show(&self, handle: OptionHandle, store: &OptionsStore) {
        if let Some(entry) = self.get(handle) {
            entry
                .binding
                .show(&entry.key, store, self.entry_scope(entry));
        }
    }

    /// Updates a single binding, unconditionally.
    pub fn update(&self, handle: OptionHandle, store: &OptionsStore) {
        if let Some(entry) = self.get(handle) {
            entry
                .binding
                .update(&entry.key, store, self.entry_scope(entry));
        }
    }

    /// Pulls every option from the store into its control, in registration
    /// order. Never suppressed by the "use global defaults" flag.
    pub fn show_all(&self, store: &OptionsStore) {
        debug!("OptionRegistry: showing {} options", self.entries.len());
        for entry in &self.entries {
            entry
                .binding
                .show(&entry.key, store, self.entry_scope(entry));
        }
    }

    /// Pushes every control's value into the store, in registration order.
    ///
    /// While the registry's scope uses global defaults, session bindings
    /// are skipped and only global bindings are written.
    ///
    /// # Returns
    ///
    /// The number of bindings written.
    pub fn update_all(&self, store: &OptionsStore) -> usize {
        let suppressed = store.uses_global_defaults(&self.scope);
        let mut written = 0;

        for entry in &self.entries {
            if suppressed && entry.scope == BindingScope::Session {
                continue;
            }
            entry
                .binding
                .update(&entry.key, store, self.entry_scope(entry));
            written += 1;
        }

        debug!(
            "OptionRegistry: updated {} of {} options (suppressed: {})",
            written,
            self.entries.len(),
            suppressed
        );
        written
    }

    /// Releases every binding.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
