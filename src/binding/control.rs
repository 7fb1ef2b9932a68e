//! Control abstractions the bindings read from and write to.
//!
//! A binding only needs to move a string, a flag, or a selection index in
//! and out of a control. The traits here describe exactly that, so the same
//! binding code drives Libadwaita rows and the headless controls below.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// A control holding free text (entries, path pickers, text areas).
pub trait TextControl {
    /// Current text of the control.
    fn text(&self) -> String;
    /// Replaces the text of the control.
    fn set_text(&self, value: &str);
}

/// A control holding an on/off state.
pub trait ToggleControl {
    fn is_active(&self) -> bool;
    fn set_active(&self, active: bool);
    /// Enables or disables user interaction. Controls without such a notion
    /// ignore it.
    fn set_enabled(&self, _enabled: bool) {}
}

/// A control presenting a list of labels with at most one selected.
pub trait ChoiceControl {
    /// Replaces the displayed labels and clears the selection.
    fn set_items(&self, labels: &[String]);
    /// Selected position, `None` when nothing is selected.
    fn selected(&self) -> Option<usize>;
    /// Selects a position, or clears the selection with `None`.
    fn set_selected(&self, index: Option<usize>);
}

/// Headless text control.
#[derive(Debug, Clone, Default)]
pub struct TextCell {
    value: Rc<RefCell<String>>,
}

impl TextCell {
    pub fn new(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(value.to_string())),
        }
    }
}

impl TextControl for TextCell {
    fn text(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_text(&self, value: &str) {
        value.clone_into(&mut self.value.borrow_mut());
    }
}

/// Headless toggle control.
#[derive(Debug, Clone)]
pub struct ToggleCell {
    active: Rc<Cell<bool>>,
    enabled: Rc<Cell<bool>>,
}

impl Default for ToggleCell {
    fn default() -> Self {
        Self {
            active: Rc::new(Cell::new(false)),
            enabled: Rc::new(Cell::new(true)),
        }
    }
}

impl ToggleCell {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl ToggleControl for ToggleCell {
    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

/// Headless choice control.
#[derive(Debug, Clone, Default)]
pub struct ChoiceCell {
    items: Rc<RefCell<Vec<String>>>,
    selected: Rc<Cell<Option<usize>>>,
}

impl ChoiceCell {
    /// Labels currently displayed.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }
}

impl ChoiceControl for ChoiceCell {
    fn set_items(&self, labels: &[String]) {
        *self.items.borrow_mut() = labels.to_vec();
        self.selected.set(None);
    }

    fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    fn set_selected(&self, index: Option<usize>) {
        let len = self.items.borrow().len();
        self.selected.set(index.filter(|index| *index < len));
    }
}

/// Keeps `target` consistent with `source` after `source` changed.
///
/// While `source` is active, `target` is forced to `!same_value` and its
/// enabled state becomes `!disable_on_active`. Once `source` is inactive
/// again, `target` keeps its value and its enabled state becomes
/// `disable_on_active`.
pub fn link_toggles(
    source: &dyn ToggleControl,
    target: &dyn ToggleControl,
    same_value: bool,
    disable_on_active: bool,
) {
    if source.is_active() {
        target.set_active(!same_value);
        target.set_enabled(!disable_on_active);
    } else {
        target.set_enabled(disable_on_active);
    }
}
