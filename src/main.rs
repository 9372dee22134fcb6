//! `spinbox` - a clamped numeric input control
//!
//! Desktop application wrapping the value controller in a Slint window:
//! a numeric text field with `-`/`+` buttons, clamped to the configured
//! range, persisting its value and window geometry across sessions.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use spinbox::config::ConfigManager;
use spinbox::error::get_user_friendly_error;
use spinbox::utils;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, loads configuration, builds the GUI, runs the event
/// loop, and persists the final value and window geometry on exit.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("spinbox v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded: bounds {:?}..{:?}, initial value {}",
        config.input.min, config.input.max, config.input.initial
    );

    let gui_controller = match GuiController::new(&config) {
        Ok(gui_controller) => gui_controller,
        Err(e) => {
            error!("Failed to initialize GUI: {e}");
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e).context("Failed to initialize GUI");
        }
    };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    // Persist the final value and window geometry for the next session
    config.input.initial = gui_controller.current_value();
    config.window = gui_controller.window_state();
    if let Err(e) = ConfigManager::save(&config) {
        warn!("Failed to save configuration: {e}");
    }

    info!("spinbox shutting down");

    Ok(())
}
