//! GUI controller implementation
//!
//! Owns the Slint window and the value controller behind it. Widget
//! callbacks (button clicks, committed text) are forwarded to the
//! controller; controller notifications flow back into window properties.
//!
//! The controller is shared among the Slint callbacks via `Rc<RefCell<_>>`:
//! everything runs on the UI thread, so no locking is involved. Observer
//! handlers run while the controller is mutably borrowed and therefore only
//! touch the window, never the controller itself.

use crate::MainWindow;
use slint::ComponentHandle;
use spinbox::config::{AppConfig, WindowState};
use spinbox::controller::{TextInputOutcome, ValueController};
use spinbox::error::Result;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// GUI controller owning the window and the value state behind it
pub struct GuiController {
    window: MainWindow,
    controller: Rc<RefCell<ValueController>>,
}

impl GuiController {
    /// Build the window from configuration, restore its geometry, and wire
    /// callbacks in both directions.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let window = MainWindow::new()?;

        let range = config.input.resolved_range();
        let controller = Rc::new(RefCell::new(ValueController::new(
            range,
            config.input.initial,
        )));
        info!(
            "Input control ready: range [{}, {}], value {}",
            range.min,
            range.max,
            controller.borrow().value()
        );

        // Restore persisted window geometry
        window.window().set_position(slint::PhysicalPosition::new(
            config.window.x,
            config.window.y,
        ));
        window.window().set_size(slint::PhysicalSize::new(
            config.window.width,
            config.window.height,
        ));

        Self::wire_callbacks(&window, &controller);
        Self::sync_widgets(&window, &controller.borrow());

        Ok(Self { window, controller })
    }

    /// Run the Slint event loop until the window closes.
    pub fn run(&self) -> Result<()> {
        self.window.run()?;
        Ok(())
    }

    /// The value currently held by the control, for persistence at shutdown.
    pub fn current_value(&self) -> f64 {
        self.controller.borrow().value()
    }

    /// Current window geometry, for persistence at shutdown.
    pub fn window_state(&self) -> WindowState {
        let position = self.window.window().position();
        let size = self.window.window().size();
        WindowState {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Attach controller observers to the window and window callbacks to the
    /// controller.
    fn wire_callbacks(window: &MainWindow, controller: &Rc<RefCell<ValueController>>) {
        let range = controller.borrow().range();

        // Controller → window: the value-updated notification refreshes the
        // displayed text and the button headroom. Handlers receive the new
        // value directly; they must not reach back into the controller.
        {
            let weak = window.as_weak();
            controller.borrow_mut().on_value_updated(move |value| {
                if let Some(window) = weak.upgrade() {
                    window.set_value_text(format_value(value).into());
                    window.set_can_decrease(value > range.min);
                    window.set_can_increase(value < range.max);
                }
            });
        }

        // The user-facing change hook; a host application would propagate the
        // value into its own model here.
        controller
            .borrow_mut()
            .on_change(move |value| debug!("value changed to {value}"));

        // Window → controller: button clicks step the value.
        {
            let controller = Rc::clone(controller);
            window.on_decrease_clicked(move || {
                controller.borrow_mut().decrease();
            });
        }
        {
            let controller = Rc::clone(controller);
            window.on_increase_clicked(move || {
                controller.borrow_mut().increase();
            });
        }

        // Committed text goes through validation; whatever the outcome, the
        // field is rewritten with the value actually held so clamped or
        // rejected entries never linger on screen.
        {
            let controller = Rc::clone(controller);
            let weak = window.as_weak();
            window.on_text_edited(move |text| {
                let outcome = controller.borrow_mut().handle_text_input(&text);
                let Some(window) = weak.upgrade() else {
                    return;
                };
                match outcome {
                    TextInputOutcome::Applied(value) => {
                        window.set_value_text(format_value(value).into());
                    }
                    TextInputOutcome::Rejected => {
                        info!("Discarding non-numeric input {:?}", text.as_str());
                        window.set_value_text(format_value(controller.borrow().value()).into());
                    }
                }
            });
        }
    }

    /// Push the controller's current state into the window properties.
    fn sync_widgets(window: &MainWindow, controller: &ValueController) {
        window.set_value_text(format_value(controller.value()).into());
        window.set_can_decrease(controller.can_decrease());
        window.set_can_increase(controller.can_increase());
    }
}

/// Format a value the way the control displays it: whole numbers without a
/// decimal point, everything else in the shortest round-trip form.
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
