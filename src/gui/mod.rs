//! GUI module
//!
//! Provides the Slint-based graphical user interface: window setup, callback
//! wiring between the widgets and the value controller, and window geometry
//! persistence.

pub mod gui_controller;

pub use gui_controller::GuiController;
