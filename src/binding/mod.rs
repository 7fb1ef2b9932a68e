//! Generic option binding between controls and the options store.
//!
//! A binding couples one control with one store key and knows how to show
//! the stored value in the control and how to write the control's value
//! back. The registry runs those operations over every bound option of a
//! preferences session.

#[cfg(test)]
mod tests;

pub mod control;
pub mod option;
pub mod registry;

pub use {
    control::{
        ChoiceCell, ChoiceControl, TextCell, TextControl, ToggleCell, ToggleControl, link_toggles,
    },
    option::{Binding, Choices, CustomOption, PathKind},
    registry::{BindingScope, OptionEntry, OptionHandle, OptionRegistry},
};
