//! Picker widgets for immediate-mode config menus
//!
//! - [`picker`]: the image picker (bounded index with arrows and a label) and
//!   the color picker (swatch, RGB sliders, HSV/HSL wheels)
//! - [`host`]: the contract a config menu implements to show them
//! - [`ui`]: geometry, pointer state, drawing surface and icon buttons
//! - [`demo`]: a small form and example options used by the demo binary
//!
//! Every widget follows the same lifecycle: `reset` loads the committed
//! value into a working copy, `draw` renders and handles input once per
//! frame, `save_changes` writes the working copy back.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod demo;
pub mod host;
pub mod picker;
pub mod ui;
