//! Value controller module
//!
//! Holds the editable state behind the numeric input control and the rules
//! for changing it.
//!
//! # Overview
//!
//! - `Range`: inclusive `[min, max]` bounds, unbounded by default
//! - `ValueController`: the current value plus every way it can change —
//!   owner pushes (`set_source_value`), button steps (`increase`/`decrease`),
//!   and committed text entries (`handle_text_input`)
//! - **Observer registration**: callers attach handlers for the two
//!   notification kinds instead of relying on implicit reactivity
//!
//! # Value Flow
//!
//! ```text
//! owner value / buttons / text entry → clamp → current value
//!                                                  ↓ (on change)
//!                                 value-updated + change handlers
//! ```
//!
//! The controller never mutates its value except through its own operations;
//! the externally authoritative value reaches it only via `set_source_value`.

pub mod value_controller;

pub use value_controller::{Range, TextInputOutcome, ValueController};
