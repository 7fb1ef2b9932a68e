//! Binding variants and their read/write behavior.
//!
//! Each variant carries the control handle and whatever it needs to coerce
//! values between the control and the store, so a single `show`/`update`
//! implementation per variant covers every option of that kind.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    rc::Rc,
};

use crate::{
    binding::control::{ChoiceControl, TextControl, ToggleControl},
    config::{
        OptionsStore, ScopeKey, TypeHint, defaults::items_key, value::parse_leading_int,
    },
};

/// What a path option points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// Labels and stored values of a selector, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    labels: Vec<String>,
    values: Vec<String>,
}

impl Choices {
    /// Parses a choice spec such as `"disable:0,1 minute:60"`.
    ///
    /// Items are separated by `,`. An item is `label:value`, split at the
    /// first `:`, or a bare value that doubles as its label.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut choices = Self::default();
        if spec.is_empty() {
            return choices;
        }

        for item in spec.split(',') {
            let (label, value) = item.split_once(':').unwrap_or((item, item));
            choices.labels.push(label.to_string());
            choices.values.push(value.to_string());
        }
        choices
    }

    /// Uses `spec` when given, otherwise the list stored under
    /// `@<option>/Items`.
    #[must_use]
    pub fn parse_or_lookup(spec: &str, option: &str, store: &OptionsStore, scope: &ScopeKey) -> Self {
        if spec.is_empty() {
            Self::parse(&store.get(scope, &items_key(option)))
        } else {
            Self::parse(spec)
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Position of the choice storing `value`.
    #[must_use]
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|candidate| candidate == value)
    }

    /// Stored value at `index`.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// First stored value, or empty when there are no choices.
    #[must_use]
    pub fn default_value(&self) -> &str {
        self.values.first().map_or("", String::as_str)
    }
}

/// Option with hand-written show/update logic.
pub trait CustomOption {
    /// Pulls the current value from the store into the control.
    fn show_value(&self, store: &OptionsStore, scope: &ScopeKey);
    /// Pushes the control's value into the store.
    fn update_value(&self, store: &OptionsStore, scope: &ScopeKey);
}

/// Custom option built from a pair of closures.
pub struct FnOption<S, U> {
    show: S,
    update: U,
}

impl<S, U> CustomOption for FnOption<S, U>
where
    S: Fn(&OptionsStore, &ScopeKey),
    U: Fn(&OptionsStore, &ScopeKey),
{
    fn show_value(&self, store: &OptionsStore, scope: &ScopeKey) {
        (self.show)(store, scope);
    }

    fn update_value(&self, store: &OptionsStore, scope: &ScopeKey) {
        (self.update)(store, scope);
    }
}

/// Association between a control and one store key.
pub enum Binding {
    /// Free text. `hint` is `String` for plain entries and `Any` for
    /// entries that usually hold numbers.
    Text {
        control: Rc<dyn TextControl>,
        hint: TypeHint,
    },
    /// Integer entry clamped into `[min, max]` on update.
    Numeric {
        control: Rc<dyn TextControl>,
        min: i64,
        max: i64,
    },
    /// Boolean stored as `1`/`0`.
    Checkbox { control: Rc<dyn ToggleControl> },
    /// One of a fixed list of stored values.
    Selector {
        control: Rc<dyn ChoiceControl>,
        choices: Choices,
        default: String,
        as_number: bool,
    },
    /// File or directory path.
    Path {
        control: Rc<dyn TextControl>,
        kind: PathKind,
    },
    /// Anything else.
    Custom(Box<dyn CustomOption>),
}

impl Binding {
    /// Plain text entry.
    pub fn text(control: Rc<dyn TextControl>) -> Self {
        Self::Text {
            control,
            hint: TypeHint::String,
        }
    }

    /// Text entry whose value is stored as a number when it parses as one.
    pub fn numeric_text(control: Rc<dyn TextControl>) -> Self {
        Self::Text {
            control,
            hint: TypeHint::Any,
        }
    }

    pub fn numeric(control: Rc<dyn TextControl>, min: i64, max: i64) -> Self {
        Self::Numeric { control, min, max }
    }

    pub fn checkbox(control: Rc<dyn ToggleControl>) -> Self {
        Self::Checkbox { control }
    }

    /// Selector over `choices`, defaulting to the first stored value. The
    /// control's items are replaced with the choice labels.
    pub fn selector(control: Rc<dyn ChoiceControl>, choices: Choices, as_number: bool) -> Self {
        control.set_items(choices.labels());
        let default = choices.default_value().to_string();
        Self::Selector {
            control,
            choices,
            default,
            as_number,
        }
    }

    pub fn path(control: Rc<dyn TextControl>, kind: PathKind) -> Self {
        Self::Path { control, kind }
    }

    pub fn custom(option: impl CustomOption + 'static) -> Self {
        Self::Custom(Box::new(option))
    }

    /// Custom binding from a read closure and a write closure.
    pub fn from_fns<S, U>(show: S, update: U) -> Self
    where
        S: Fn(&OptionsStore, &ScopeKey) + 'static,
        U: Fn(&OptionsStore, &ScopeKey) + 'static,
    {
        Self::custom(FnOption { show, update })
    }

    /// Pulls the value of `key` from the store into the control.
    pub fn show(&self, key: &str, store: &OptionsStore, scope: &ScopeKey) {
        match self {
            Self::Text { control, .. }
            | Self::Numeric { control, .. }
            | Self::Path { control, .. } => control.set_text(&store.get(scope, key)),
            Self::Checkbox { control } => {
                control.set_active(parse_leading_int(&store.get(scope, key)) != 0);
            }
            Self::Selector {
                control, choices, ..
            } => control.set_selected(choices.position(&store.get(scope, key))),
            Self::Custom(option) => option.show_value(store, scope),
        }
    }

    /// Pushes the control's value into `key`.
    pub fn update(&self, key: &str, store: &OptionsStore, scope: &ScopeKey) {
        match self {
            Self::Text { control, hint } => store.set(scope, key, &control.text(), *hint),
            Self::Numeric { control, min, max } => {
                let value = parse_leading_int(&control.text()).max(*min).min(*max);
                store.set(scope, key, &value.to_string(), TypeHint::Integer);
            }
            Self::Path { control, .. } => {
                store.set(scope, key, &control.text(), TypeHint::String);
            }
            Self::Checkbox { control } => {
                let value = if control.is_active() { "1" } else { "0" };
                store.set(scope, key, value, TypeHint::Integer);
            }
            Self::Selector {
                control,
                choices,
                default,
                as_number,
            } => {
                let value = control
                    .selected()
                    .and_then(|index| choices.value_at(index))
                    .unwrap_or(default.as_str());
                let hint = if *as_number {
                    TypeHint::Integer
                } else {
                    TypeHint::Any
                };
                store.set(scope, key, value, hint);
            }
            Self::Custom(option) => option.update_value(store, scope),
        }
    }

    /// Variant name, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Numeric { .. } => "numeric",
            Self::Checkbox { .. } => "checkbox",
            Self::Selector { .. } => "selector",
            Self::Path { .. } => "path",
            Self::Custom(_) => "custom",
        }
    }
}

impl Debug for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Text { hint, .. } => f.debug_struct("Text").field("hint", hint).finish(),
            Self::Numeric { min, max, .. } => f
                .debug_struct("Numeric")
                .field("min", min)
                .field("max", max)
                .finish(),
            Self::Checkbox { .. } => f.write_str("Checkbox"),
            Self::Selector {
                choices,
                default,
                as_number,
                ..
            } => f
                .debug_struct("Selector")
                .field("choices", choices)
                .field("default", default)
                .field("as_number", as_number)
                .finish(),
            Self::Path { kind, .. } => f.debug_struct("Path").field("kind", kind).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}
