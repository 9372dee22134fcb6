//! `spinbox` - a clamped numeric input control
//!
//! A small desktop control: a numeric text field with `-`/`+` buttons whose
//! value is kept inside a configurable inclusive range. The editable state
//! and all mutation rules live in [`controller::ValueController`]; the Slint
//! front end in the binary wires the widgets to it and observers back to the
//! widgets.
//!
//! Text entries are screened by [`validate::is_numeric_text`] before they
//! can touch the value; anything non-numeric is discarded and the display is
//! reset.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use error::{Result, SpinboxError};
