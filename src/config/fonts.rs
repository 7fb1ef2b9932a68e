//! Per-locale font presets for diagram figures.
//!
//! Font sets are immutable static data keyed by locale tag. Applying a set
//! assigns its faces to the figure font options listed in the global scope.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    store::{OptionsStore, ScopeKey},
    value::TypeHint,
};

/// Builds a font set whose five faces share one family.
macro_rules! font_set {
    ($tag:literal, $name:literal, $family:literal) => {
        FontSet {
            tag: $tag,
            name: $name,
            object_title: concat!($family, " Bold 12"),
            object_section: concat!($family, " Bold 11"),
            object_item: concat!($family, " 11"),
            layer_title: concat!($family, " 11"),
            note: concat!($family, " 11"),
        }
    };
}

/// Font faces used by diagram figures for one script family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    /// Locale tag the set is keyed by.
    pub tag: &'static str,
    /// Name shown in the preset selector.
    pub name: &'static str,
    /// Figure title font.
    pub object_title: &'static str,
    /// Figure section font.
    pub object_section: &'static str,
    /// Figure item font.
    pub object_item: &'static str,
    /// Layer title font.
    pub layer_title: &'static str,
    /// Note text font.
    pub note: &'static str,
}

#[cfg(target_os = "windows")]
static FONT_SETS: [FontSet; 5] = [
    font_set!("en", "Default (Western)", "Tahoma"),
    font_set!("ja", "Japanese", "Arial Unicode MS"),
    font_set!("ko", "Korean", "Arial Unicode MS"),
    font_set!("zh-Hans", "Simplified Chinese", "Arial Unicode MS"),
    font_set!("ru", "Cyrillic", "Tahoma"),
];

#[cfg(target_os = "macos")]
static FONT_SETS: [FontSet; 5] = [
    font_set!("en", "Default (Western)", "Lucida Grande"),
    font_set!("ja", "Japanese", "Osaka"),
    font_set!("ko", "Korean", "AppleGothic"),
    font_set!("zh-Hans", "Simplified Chinese", "SimHei"),
    font_set!("ru", "Cyrillic", "Lucida Grande"),
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
static FONT_SETS: [FontSet; 5] = [
    font_set!("en", "Default (Western)", "Helvetica"),
    font_set!("ja", "Japanese", "VL Gothic"),
    font_set!("ko", "Korean", "WenQuanYi Zen Hei"),
    font_set!("zh-Hans", "Simplified Chinese", "WenQuanYi Zen Hei"),
    font_set!("ru", "Cyrillic", "Helvetica"),
];

impl FontSet {
    /// Option keys paired with the face this set assigns to them.
    #[must_use]
    pub fn assignments(&self) -> [(&'static str, &'static str); 9] {
        [
            ("workbench.physical.TableFigure:TitleFont", self.object_title),
            ("workbench.physical.TableFigure:SectionFont", self.object_section),
            ("workbench.physical.TableFigure:ItemsFont", self.object_item),
            ("workbench.physical.ViewFigure:TitleFont", self.object_title),
            ("workbench.physical.RoutineGroupFigure:TitleFont", self.object_title),
            ("workbench.physical.RoutineGroupFigure:ItemsFont", self.object_item),
            ("workbench.physical.Connection:CaptionFont", self.object_item),
            ("workbench.physical.Layer:TitleFont", self.layer_title),
            ("workbench.model.NoteFigure:TextFont", self.note),
        ]
    }
}

/// All font sets, default first.
#[must_use]
pub fn font_sets() -> &'static [FontSet] {
    &FONT_SETS
}

/// The Western font set.
#[must_use]
pub fn default_font_set() -> &'static FontSet {
    &FONT_SETS[0]
}

/// Looks up a font set by locale tag.
#[must_use]
pub fn font_set(tag: &str) -> Option<&'static FontSet> {
    FONT_SETS.iter().find(|set| set.tag == tag)
}

/// `workbench.<area>.<Figure>[...]:<Part>Font`
static FONT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^workbench\.[^.:]*\.([^.:]*)[^:]*:(.*)Font$").expect("font key pattern is valid")
});

/// One editable row of the font table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOption {
    /// Store key of the option.
    pub key: String,
    /// Human readable location, e.g. `Table Figure Title`.
    pub caption: String,
    /// Font description.
    pub value: String,
}

/// Font options of the global scope, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontTable {
    rows: Vec<FontOption>,
}

impl FontTable {
    /// Lists every figure font option stored in the global scope.
    #[must_use]
    pub fn load(store: &OptionsStore) -> Self {
        let rows = store
            .keys(&ScopeKey::Global)
            .into_iter()
            .filter_map(|key| {
                let caption = font_caption(&key)?;
                let value = store.get(&ScopeKey::Global, &key);
                Some(FontOption {
                    key,
                    caption,
                    value,
                })
            })
            .collect();

        Self { rows }
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[FontOption] {
        &self.rows
    }

    /// Current value of `key`, if it is listed.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.as_str())
    }

    /// Changes a listed font. Unlisted keys are ignored.
    pub fn set_font(&mut self, key: &str, value: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.key == key) {
            Some(row) => {
                row.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Assigns the faces of `set` to the listed options.
    pub fn apply_preset(&mut self, set: &FontSet) {
        for (key, face) in set.assignments() {
            self.set_font(key, face);
        }
    }

    /// Writes every row back to the global scope.
    pub fn update(&self, store: &OptionsStore) {
        for row in &self.rows {
            store.set(
                &ScopeKey::Global,
                &row.key,
                &row.value,
                TypeHint::String,
            );
        }
    }
}

/// Caption for a figure font key, or `None` for other keys.
#[must_use]
pub fn font_caption(key: &str) -> Option<String> {
    let captures = FONT_KEY.captures(key)?;
    let figure = captures[1].replace("NoteFigure", "TextFigure");

    Some(format!("{} {}", separate_camel_words(&figure), &captures[2]))
}

fn separate_camel_words(word: &str) -> String {
    let mut result = String::with_capacity(word.len() + 4);
    for c in word.chars() {
        if !result.is_empty() && c.is_ascii_uppercase() {
            result.push(' ');
        }
        result.push(c);
    }
    result
}
