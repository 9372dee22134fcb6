//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::controller::Range;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings for the numeric input control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Lower bound; `None` leaves the input unbounded below
    pub min: Option<f64>,
    /// Upper bound; `None` leaves the input unbounded above
    pub max: Option<f64>,
    /// Value the control starts with (last committed value from the
    /// previous session)
    pub initial: f64,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Numeric input settings
    pub input: InputSettings,
    /// Window state for persistence
    pub window: WindowState,
}

/// Window state for position and size persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            initial: 0.0,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 320,
            height: 140,
        }
    }
}

impl InputSettings {
    /// Resolve the configured bounds into a [`Range`].
    ///
    /// `None` on either side means unbounded (JSON cannot carry IEEE
    /// infinities, so the open bound is expressed by omission). Inverted
    /// bounds are ignored with a warning rather than handed to the
    /// controller, which applies bounds as given.
    pub fn resolved_range(&self) -> Range {
        let range = Range::new(self.min, self.max);
        if range.min > range.max {
            warn!(
                "configured bounds are inverted (min {} > max {}); ignoring them",
                range.min, range.max
            );
            return Range::default();
        }
        range
    }
}
