//! Demo window content: a small config form with example options

mod config;
mod example;
mod form;

pub use config::*;
pub use example::*;
pub use form::*;
