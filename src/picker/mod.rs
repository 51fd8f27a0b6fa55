//! Picker widgets: image picker, color picker and their building blocks

mod color;
mod color_picker;
mod color_widgets;
mod image_picker;
mod layout;
pub mod style;

pub use color::*;
pub use color_picker::*;
pub use color_widgets::*;
pub use image_picker::*;
pub use layout::*;
pub use style::{Chooser, ColorPickerStyle, PickerStyle, StyleSet};
