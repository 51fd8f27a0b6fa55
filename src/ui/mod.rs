//! Immediate-mode UI primitives shared by the pickers
//!
//! Design principles:
//! - Immediate mode: widgets are drawn and hit-tested in the same call
//! - Simple rectangle-based layout
//! - Rendering goes through the [`Surface`] trait; macroquad is one backend

mod rect;
mod input;
mod icons;
mod surface;
mod text_layout;
mod widgets;
mod actions;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use rect::*;
pub use input::*;
pub use icons::*;
pub use surface::*;
pub use text_layout::*;
pub use widgets::*;
pub use actions::*;
