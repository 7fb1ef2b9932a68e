//! Target server version of a model.
//!
//! The version is kept per context under [`CATALOG_VERSION_KEY`] and edited
//! as free text. Input is normalized to `major.minor` or
//! `major.minor.release` before it is stored.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    rc::Rc,
    str::FromStr,
};

use tracing::warn;

use crate::{
    binding::{CustomOption, TextControl},
    config::{OptionsStore, ScopeKey, TypeHint},
    error::PreferencesError,
};

/// Store key of a context's target version.
pub const CATALOG_VERSION_KEY: &str = "CatalogVersion";

/// Global option used when a context has no target version yet.
pub const DEFAULT_VERSION_KEY: &str = "DefaultTargetMySQLVersion";

/// Parsed `major.minor[.release]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetVersion {
    pub major: u32,
    pub minor: u32,
    pub release: Option<u32>,
}

impl FromStr for TargetVersion {
    type Err = PreferencesError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PreferencesError::InvalidOption {
            key: CATALOG_VERSION_KEY.to_string(),
            reason: format!("{reason} in {text:?}"),
        };

        let parts = text
            .trim()
            .split('.')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid("expected numeric components"))?;

        match parts.as_slice() {
            [major, minor] => Ok(Self {
                major: *major,
                minor: *minor,
                release: None,
            }),
            [major, minor, release] => Ok(Self {
                major: *major,
                minor: *minor,
                release: Some(*release),
            }),
            _ => Err(invalid("expected major.minor or major.minor.release")),
        }
    }
}

impl Display for TargetVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.release {
            Some(release) => write!(f, "{}.{}.{}", self.major, self.minor, release),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Custom binding for the target version entry.
pub struct TargetVersionOption {
    control: Rc<dyn TextControl>,
}

impl TargetVersionOption {
    pub fn new(control: Rc<dyn TextControl>) -> Self {
        Self { control }
    }
}

impl CustomOption for TargetVersionOption {
    fn show_value(&self, store: &OptionsStore, scope: &ScopeKey) {
        let mut stored = store.get(scope, CATALOG_VERSION_KEY);
        if stored.is_empty() {
            stored = store.get(&ScopeKey::Global, DEFAULT_VERSION_KEY);
        }

        match stored.parse::<TargetVersion>() {
            Ok(version) => self.control.set_text(&version.to_string()),
            Err(_) => self.control.set_text(&stored),
        }
    }

    fn update_value(&self, store: &OptionsStore, scope: &ScopeKey) {
        match self.control.text().parse::<TargetVersion>() {
            Ok(version) => {
                store.set(
                    scope,
                    CATALOG_VERSION_KEY,
                    &version.to_string(),
                    TypeHint::String,
                );
            }
            Err(e) => warn!("Keeping previous target version: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        binding::{Binding, OptionRegistry, TextCell, TextControl},
        config::{OptionValue, OptionsStore, ScopeKey, TypeHint},
        state::version::{CATALOG_VERSION_KEY, TargetVersion, TargetVersionOption},
    };

    #[test]
    fn test_parse_and_normalize() {
        let version: TargetVersion = " 5.07 ".parse().unwrap();
        assert_eq!(version.to_string(), "5.7");

        let version: TargetVersion = "8.0.32".parse().unwrap();
        assert_eq!(version.release, Some(32));
        assert_eq!(version.to_string(), "8.0.32");
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for text in ["", "8", "8.x", "1.2.3.4", "-1.0"] {
            assert!(text.parse::<TargetVersion>().is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_version_ordering() {
        let old: TargetVersion = "5.6".parse().unwrap();
        let new: TargetVersion = "5.7.1".parse().unwrap();
        assert!(old < new);
    }

    fn version_registry(control: &Rc<TextCell>) -> OptionRegistry {
        let mut registry = OptionRegistry::new(ScopeKey::context("model-1"));
        registry.bind(
            CATALOG_VERSION_KEY,
            Binding::custom(TargetVersionOption::new(control.clone())),
        );
        registry
    }

    #[test]
    fn test_show_falls_back_to_default_target_version() {
        let store = OptionsStore::in_memory();
        let control = Rc::new(TextCell::default());
        let registry = version_registry(&control);

        registry.show_all(&store);
        assert_eq!(control.text(), "5.6");
    }

    #[test]
    fn test_update_stores_normalized_version() {
        let store = OptionsStore::in_memory();
        let control = Rc::new(TextCell::default());
        let registry = version_registry(&control);

        control.set_text("8.00.1");
        registry.update_all(&store);
        assert_eq!(
            store.raw_value(registry.scope(), CATALOG_VERSION_KEY),
            Some(OptionValue::Str("8.0.1".to_string()))
        );
    }

    #[test]
    fn test_invalid_input_keeps_stored_version() {
        let store = OptionsStore::in_memory();
        let scope = ScopeKey::context("model-1");
        store.set(&scope, CATALOG_VERSION_KEY, "5.7", TypeHint::String);

        let control = Rc::new(TextCell::default());
        let registry = version_registry(&control);
        registry.show_all(&store);
        control.set_text("five point seven");
        registry.update_all(&store);

        assert_eq!(store.get(&scope, CATALOG_VERSION_KEY), "5.7");
    }
}
