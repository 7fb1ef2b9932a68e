//! Scoped option store with XDG Base Directory compliance.
//!
//! The store keeps a global scope and any number of per-context scopes
//! (one per open document). A context overrides the global scope unless its
//! `useglobal` flag is set, in which case reads resolve against the global
//! scope only.

use std::{
    collections::BTreeMap,
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::{Path, PathBuf},
};

use {
    parking_lot::RwLock,
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::config::{
    defaults::default_options,
    value::{OptionValue, TypeHint, parse_leading_int},
};

/// Per-context key holding the "use global defaults" flag.
pub const USE_GLOBAL_KEY: &str = "useglobal";

/// Error type for store persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the options file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize options.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
}

/// Identifies the namespace an option is read from or written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// Application-wide options.
    Global,
    /// Options of a single context, e.g. one document.
    Context(String),
}

impl ScopeKey {
    /// Scope of the context with the given id.
    pub fn context(id: impl Into<String>) -> Self {
        Self::Context(id.into())
    }

    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// The context id, if this is a context scope.
    #[must_use]
    pub fn context_id(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Context(id) => Some(id),
        }
    }
}

/// Serializable contents of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredOptions {
    /// Global scope.
    #[serde(default)]
    pub global: BTreeMap<String, OptionValue>,
    /// Per-context scopes keyed by context id.
    #[serde(default)]
    pub contexts: BTreeMap<String, BTreeMap<String, OptionValue>>,
}

impl StoredOptions {
    fn seed_defaults(&mut self) {
        for (key, value) in default_options() {
            self.global.entry(key.to_string()).or_insert(value);
        }
    }

    fn context_uses_global(&self, id: &str) -> bool {
        self.contexts
            .get(id)
            .and_then(|options| options.get(USE_GLOBAL_KEY))
            .is_some_and(is_true)
    }
}

fn is_true(value: &OptionValue) -> bool {
    value
        .as_int()
        .unwrap_or_else(|| parse_leading_int(&value.to_string()))
        != 0
}

/// Handles loading, saving, and scoped lookup of options.
#[derive(Debug)]
pub struct OptionsStore {
    /// Thread-safe option storage.
    options: RwLock<StoredOptions>,
    /// Path to the options file, `None` for a store that is never persisted.
    config_path: Option<PathBuf>,
}

impl OptionsStore {
    /// Creates a store backed by the default options file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the options file exists but cannot be read.
    pub fn new() -> Result<Self, StoreError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a store backed by a custom options file (for testing).
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the options file
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory cannot be created or the file
    /// cannot be read or parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let mut options: StoredOptions = if config_path.exists() {
            debug!("Loading options from existing file: {:?}", config_path);
            from_str(&read_to_string(&config_path)?)?
        } else {
            debug!("Creating new default options file: {:?}", config_path);
            StoredOptions::default()
        };
        options.seed_defaults();

        Ok(Self {
            options: RwLock::new(options),
            config_path: Some(config_path),
        })
    }

    /// Creates a store that lives only in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        let mut options = StoredOptions::default();
        options.seed_defaults();

        Self {
            options: RwLock::new(options),
            config_path: None,
        }
    }

    /// Gets the options file path, if the store is persisted.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Reads an option as a string.
    ///
    /// Missing keys yield an empty string. A context scope that uses global
    /// defaults reads from the global scope; otherwise context values
    /// override global ones.
    #[must_use]
    pub fn get(&self, scope: &ScopeKey, name: &str) -> String {
        let options = self.options.read();

        let value = match scope {
            ScopeKey::Global => options.global.get(name),
            ScopeKey::Context(id) if options.context_uses_global(id) => options.global.get(name),
            ScopeKey::Context(id) => options
                .contexts
                .get(id)
                .and_then(|context| context.get(name))
                .or_else(|| options.global.get(name)),
        };

        value.map(ToString::to_string).unwrap_or_default()
    }

    /// Writes an option into exactly the given scope.
    pub fn set(&self, scope: &ScopeKey, name: &str, value: &str, hint: TypeHint) {
        let value = OptionValue::coerce(value, hint);
        let mut options = self.options.write();

        let target = match scope {
            ScopeKey::Global => &mut options.global,
            ScopeKey::Context(id) => options.contexts.entry(id.clone()).or_default(),
        };
        target.insert(name.to_string(), value);
    }

    /// Reads the value stored in exactly the given scope, without fallback.
    #[must_use]
    pub fn raw_value(&self, scope: &ScopeKey, name: &str) -> Option<OptionValue> {
        let options = self.options.read();

        match scope {
            ScopeKey::Global => options.global.get(name).cloned(),
            ScopeKey::Context(id) => options
                .contexts
                .get(id)
                .and_then(|context| context.get(name))
                .cloned(),
        }
    }

    /// Keys stored in exactly the given scope, sorted.
    #[must_use]
    pub fn keys(&self, scope: &ScopeKey) -> Vec<String> {
        let options = self.options.read();

        match scope {
            ScopeKey::Global => options.global.keys().cloned().collect(),
            ScopeKey::Context(id) => options
                .contexts
                .get(id)
                .map(|context| context.keys().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Whether writes to `scope` are currently suppressed in favor of the
    /// global defaults. Always `false` for the global scope.
    #[must_use]
    pub fn uses_global_defaults(&self, scope: &ScopeKey) -> bool {
        match scope {
            ScopeKey::Global => false,
            ScopeKey::Context(id) => self.options.read().context_uses_global(id),
        }
    }

    /// Sets the "use global defaults" flag of a context.
    pub fn set_use_global_defaults(&self, context_id: &str, use_global: bool) {
        debug!(
            "OptionsStore: context {} use global defaults: {}",
            context_id, use_global
        );
        self.set(
            &ScopeKey::context(context_id),
            USE_GLOBAL_KEY,
            if use_global { "1" } else { "0" },
            TypeHint::Integer,
        );
    }

    /// Snapshot of the whole store.
    #[must_use]
    pub fn snapshot(&self) -> StoredOptions {
        self.options.read().clone()
    }

    /// Replaces the whole store with `options`, typically an earlier
    /// [`snapshot`](Self::snapshot). Nothing is written to disk.
    pub fn restore(&self, options: StoredOptions) {
        *self.options.write() = options;
    }

    /// Saves the options to disk. A no-op for in-memory stores.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the options cannot be serialized or written.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(config_path) = &self.config_path else {
            return Ok(());
        };

        debug!("Saving options to file: {:?}", config_path);
        let contents = to_string_pretty(&*self.options.read())?;
        write(config_path, contents)?;
        Ok(())
    }
}

/// Path of the options file under the XDG config directory.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("prefsform");
    config_dir.push("options.json");
    config_dir
}

/// Uses `XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind::NotFound};

    use tempfile::TempDir;

    use crate::config::{
        OptionValue, TypeHint,
        store::{OptionsStore, ScopeKey, StoreError, USE_GLOBAL_KEY},
    };

    #[test]
    fn test_missing_key_reads_empty() {
        let store = OptionsStore::in_memory();
        assert_eq!(store.get(&ScopeKey::Global, "NoSuchOption"), "");
        assert_eq!(store.get(&ScopeKey::context("doc"), "NoSuchOption"), "");
        assert_eq!(store.raw_value(&ScopeKey::Global, "NoSuchOption"), None);
    }

    #[test]
    fn test_defaults_seeded() {
        let store = OptionsStore::in_memory();
        assert_eq!(store.get(&ScopeKey::Global, "workbench:UndoEntries"), "250");
        assert_eq!(
            store.get(&ScopeKey::Global, "@db.ForeignKey:updateRule/Items"),
            "NO ACTION,CASCADE,SET NULL,RESTRICT"
        );
    }

    #[test]
    fn test_context_overrides_global() {
        let store = OptionsStore::in_memory();
        let context = ScopeKey::context("doc");

        assert_eq!(store.get(&context, "SqlDelimiter"), "$$");

        store.set(&context, "SqlDelimiter", "//", TypeHint::String);
        assert_eq!(store.get(&context, "SqlDelimiter"), "//");
        assert_eq!(store.get(&ScopeKey::Global, "SqlDelimiter"), "$$");
    }

    #[test]
    fn test_use_global_defaults_redirects_reads() {
        let store = OptionsStore::in_memory();
        let context = ScopeKey::context("doc");
        store.set(&context, "SqlDelimiter", "//", TypeHint::String);

        assert!(!store.uses_global_defaults(&context));
        store.set_use_global_defaults("doc", true);
        assert!(store.uses_global_defaults(&context));
        assert_eq!(store.get(&context, "SqlDelimiter"), "$$");
        assert_eq!(
            store.raw_value(&context, USE_GLOBAL_KEY),
            Some(OptionValue::Int(1))
        );

        store.set_use_global_defaults("doc", false);
        assert_eq!(store.get(&context, "SqlDelimiter"), "//");
        assert!(!store.uses_global_defaults(&ScopeKey::Global));
    }

    #[test]
    fn test_keys_per_scope() {
        let store = OptionsStore::in_memory();
        let context = ScopeKey::context("doc");
        assert!(store.keys(&context).is_empty());

        store.set(&context, "b", "1", TypeHint::Any);
        store.set(&context, "a", "x", TypeHint::Any);
        assert_eq!(store.keys(&context), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_persistence_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("options.json");

        let store = OptionsStore::with_config_path(path.clone()).unwrap();
        store.set(&ScopeKey::Global, "workbench:UndoEntries", "42", TypeHint::Integer);
        store.set(&ScopeKey::context("doc"), "SqlMode", "ANSI", TypeHint::String);
        store.set_use_global_defaults("doc", true);
        store.save().unwrap();

        let reloaded = OptionsStore::with_config_path(path).unwrap();
        assert_eq!(reloaded.snapshot(), store.snapshot());
        assert_eq!(
            reloaded.raw_value(&ScopeKey::Global, "workbench:UndoEntries"),
            Some(OptionValue::Int(42))
        );
        assert!(reloaded.uses_global_defaults(&ScopeKey::context("doc")));
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let store = OptionsStore::in_memory();
        assert!(store.config_path().is_none());
        assert!(store.save().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = OptionsStore::with_config_path(path);
        assert!(matches!(result, Err(StoreError::SerializationError(_))));
    }

    #[test]
    fn test_store_error_display() {
        let io_error = Error::new(NotFound, "File not found");
        let store_error = StoreError::IoError(io_error);
        assert!(store_error.to_string().contains("IO error"));
    }
}
