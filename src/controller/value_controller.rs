//! Clamped value controller implementation
//!
//! This module implements the controller holding the numeric input's
//! editable state: a single value kept inside an inclusive range, with
//! explicit notification to registered observers on every effective change.

use crate::validate::is_numeric_text;
use tracing::debug;

/// Inclusive numeric bounds for the input value.
///
/// Both bounds default to unbounded. `min <= max` is the caller's
/// responsibility; the controller applies the bounds as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }
}

impl Range {
    /// Create a range from optional bounds; `None` leaves that side unbounded.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.unwrap_or(f64::NEG_INFINITY),
            max: max.unwrap_or(f64::INFINITY),
        }
    }

    /// Constrain `value` to lie within the bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}

/// Outcome of a committed text entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextInputOutcome {
    /// The text parsed as a number; carries the value now current (after
    /// clamping).
    Applied(f64),
    /// The text was not numeric; state is untouched and the caller should
    /// reset any displayed text to the current value.
    Rejected,
}

type ValueHandler = Box<dyn FnMut(f64)>;

/// Controller for a numeric value constrained to an inclusive range.
///
/// The value is clamped once at construction and after every write. Each
/// effective change fires both notification kinds: the value-updated
/// handlers (for the owner to propagate the value, e.g. into a form model)
/// and the change handlers (the user-facing hook). A write that leaves the
/// value unchanged fires neither.
pub struct ValueController {
    /// Bounds applied to every write; immutable for the controller's lifetime
    range: Range,
    /// Current value, always within `range`
    current: f64,
    /// Handlers for the model-synchronization notification
    value_updated_handlers: Vec<ValueHandler>,
    /// Handlers for the user-facing change notification
    change_handlers: Vec<ValueHandler>,
}

impl ValueController {
    /// Create a controller, clamping `initial` into `range`.
    ///
    /// Construction itself does not notify: handlers can only be attached to
    /// an already-built controller.
    pub fn new(range: Range, initial: f64) -> Self {
        Self {
            range,
            current: range.clamp(initial),
            value_updated_handlers: Vec::new(),
            change_handlers: Vec::new(),
        }
    }

    /// The current value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// The bounds this controller applies.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether `decrease` would have an effect. Drives the `-` button's
    /// enabled state.
    pub fn can_decrease(&self) -> bool {
        self.current > self.range.min
    }

    /// Whether `increase` would have an effect. Drives the `+` button's
    /// enabled state.
    pub fn can_increase(&self) -> bool {
        self.current < self.range.max
    }

    /// Register a handler for the value-updated notification.
    pub fn on_value_updated(&mut self, handler: impl FnMut(f64) + 'static) {
        self.value_updated_handlers.push(Box::new(handler));
    }

    /// Register a handler for the user-facing change notification.
    pub fn on_change(&mut self, handler: impl FnMut(f64) + 'static) {
        self.change_handlers.push(Box::new(handler));
    }

    /// Accept a new value pushed by the owner of the authoritative source
    /// value, clamping it into range.
    pub fn set_source_value(&mut self, value: f64) {
        self.write(self.range.clamp(value));
    }

    /// Step the value down by one; no-op at or below the lower bound.
    pub fn decrease(&mut self) {
        if self.current <= self.range.min {
            return;
        }
        self.write(self.current - 1.0);
    }

    /// Step the value up by one; no-op at or above the upper bound.
    pub fn increase(&mut self) {
        if self.current >= self.range.max {
            return;
        }
        self.write(self.current + 1.0);
    }

    /// Apply a committed text entry.
    ///
    /// The raw text is trimmed, validated, parsed, and clamped into range.
    /// Non-numeric text leaves the state untouched and returns
    /// [`TextInputOutcome::Rejected`] so the caller can reset its display.
    pub fn handle_text_input(&mut self, raw: &str) -> TextInputOutcome {
        let text = raw.trim();
        if !is_numeric_text(text) {
            debug!("rejected non-numeric input: {raw:?}");
            return TextInputOutcome::Rejected;
        }

        let Ok(parsed) = text.parse::<f64>() else {
            // The validator only accepts shapes f64 parses, so this arm is
            // unreachable in practice; rejecting keeps the operation total.
            debug!("validated input failed to parse: {text:?}");
            return TextInputOutcome::Rejected;
        };

        let clamped = self.range.clamp(parsed);
        self.write(clamped);
        TextInputOutcome::Applied(clamped)
    }

    /// Clamp and store a value, notifying observers if it differs from the
    /// current one.
    ///
    /// Clamping here keeps the range invariant even for step operations on a
    /// range narrower than the step itself.
    #[expect(
        clippy::float_cmp,
        reason = "exact write-skip check; equal bit patterns mean no effective change"
    )]
    fn write(&mut self, value: f64) {
        let value = self.range.clamp(value);
        if value == self.current {
            return;
        }
        self.current = value;
        for handler in &mut self.value_updated_handlers {
            handler(value);
        }
        for handler in &mut self.change_handlers {
            handler(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Helper: a controller whose notifications are captured into shared vecs.
    fn observed_controller(
        range: Range,
        initial: f64,
    ) -> (ValueController, Rc<RefCell<Vec<f64>>>, Rc<RefCell<Vec<f64>>>) {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let changes = Rc::new(RefCell::new(Vec::new()));

        let mut controller = ValueController::new(range, initial);
        {
            let updates = Rc::clone(&updates);
            controller.on_value_updated(move |v| updates.borrow_mut().push(v));
        }
        {
            let changes = Rc::clone(&changes);
            controller.on_change(move |v| changes.borrow_mut().push(v));
        }

        (controller, updates, changes)
    }

    #[test]
    fn test_clamp_inside_range_is_identity() {
        let range = Range { min: 0.0, max: 10.0 };
        assert_eq!(range.clamp(0.0), 0.0);
        assert_eq!(range.clamp(5.0), 5.0);
        assert_eq!(range.clamp(10.0), 10.0);
    }

    #[test]
    fn test_clamp_saturates_at_bounds() {
        let range = Range { min: 0.0, max: 10.0 };
        assert_eq!(range.clamp(15.0), 10.0);
        assert_eq!(range.clamp(-3.0), 0.0);
    }

    #[test]
    fn test_default_range_is_unbounded() {
        let range = Range::default();
        assert_eq!(range.clamp(1e300), 1e300);
        assert_eq!(range.clamp(-1e300), -1e300);
    }

    #[test]
    fn test_range_from_optional_bounds() {
        let range = Range::new(Some(-5.0), None);
        assert_eq!(range.min, -5.0);
        assert_eq!(range.max, f64::INFINITY);
    }

    #[test]
    fn test_construction_clamps_initial_value() {
        let controller = ValueController::new(Range { min: 0.0, max: 10.0 }, 15.0);
        assert_eq!(controller.value(), 10.0);

        let controller = ValueController::new(Range { min: 0.0, max: 10.0 }, -4.0);
        assert_eq!(controller.value(), 0.0);
    }

    #[test]
    fn test_construction_does_not_notify() {
        // Handlers attach after construction, so the initial clamp is silent.
        let (controller, updates, changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 15.0);
        assert_eq!(controller.value(), 10.0);
        assert!(updates.borrow().is_empty());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_decrease_steps_down_and_stops_at_min() {
        let (mut controller, updates, _changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 5.0);

        controller.decrease();
        assert_eq!(controller.value(), 4.0);

        for _ in 0..10 {
            controller.decrease();
        }
        assert_eq!(controller.value(), 0.0);

        controller.decrease();
        assert_eq!(controller.value(), 0.0);

        // 5 → 4 → 3 → 2 → 1 → 0, then silence
        assert_eq!(*updates.borrow(), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_increase_steps_up_and_stops_at_max() {
        let (mut controller, updates, _changes) =
            observed_controller(Range { min: 0.0, max: 3.0 }, 1.0);

        for _ in 0..10 {
            controller.increase();
        }
        assert_eq!(controller.value(), 3.0);
        assert_eq!(*updates.borrow(), vec![2.0, 3.0]);

        controller.increase();
        assert_eq!(controller.value(), 3.0);
    }

    #[test]
    fn test_stepping_saturates_on_ranges_narrower_than_a_step() {
        let mut controller = ValueController::new(Range { min: 0.0, max: 0.5 }, 0.0);
        controller.increase();
        assert_eq!(controller.value(), 0.5);
        controller.decrease();
        assert_eq!(controller.value(), 0.0);
    }

    #[test]
    fn test_stepping_with_unbounded_range() {
        let mut controller = ValueController::new(Range::default(), 0.0);
        controller.decrease();
        assert_eq!(controller.value(), -1.0);
        controller.increase();
        controller.increase();
        assert_eq!(controller.value(), 1.0);
    }

    #[test]
    fn test_set_source_value_clamps_and_notifies() {
        let (mut controller, updates, changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 5.0);

        controller.set_source_value(42.0);
        assert_eq!(controller.value(), 10.0);
        assert_eq!(*updates.borrow(), vec![10.0]);
        assert_eq!(*changes.borrow(), vec![10.0]);
    }

    #[test]
    fn test_unchanged_write_does_not_notify() {
        let (mut controller, updates, changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 5.0);

        controller.set_source_value(5.0);
        // Clamps to the value already held: not a mutation.
        controller.set_source_value(99.0);
        controller.set_source_value(12.0);

        assert_eq!(controller.value(), 10.0);
        assert_eq!(*updates.borrow(), vec![10.0]);
        assert_eq!(*changes.borrow(), vec![10.0]);
    }

    #[test]
    fn test_text_input_applies_and_fires_both_notifications() {
        let (mut controller, updates, changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 5.0);

        let outcome = controller.handle_text_input("7");
        assert_eq!(outcome, TextInputOutcome::Applied(7.0));
        assert_eq!(controller.value(), 7.0);
        assert_eq!(*updates.borrow(), vec![7.0]);
        assert_eq!(*changes.borrow(), vec![7.0]);
    }

    #[test]
    fn test_text_input_trims_before_validating() {
        let mut controller = ValueController::new(Range { min: 0.0, max: 10.0 }, 5.0);
        assert_eq!(
            controller.handle_text_input("  8  "),
            TextInputOutcome::Applied(8.0)
        );
        assert_eq!(controller.value(), 8.0);
    }

    #[test]
    fn test_text_input_clamps_out_of_range_entries() {
        let mut controller = ValueController::new(Range { min: 0.0, max: 10.0 }, 5.0);
        assert_eq!(
            controller.handle_text_input("42"),
            TextInputOutcome::Applied(10.0)
        );
        assert_eq!(controller.value(), 10.0);
    }

    #[test]
    fn test_text_input_accepts_decimals() {
        let mut controller = ValueController::new(Range { min: 0.0, max: 10.0 }, 5.0);
        assert_eq!(
            controller.handle_text_input("-3.5"),
            TextInputOutcome::Applied(0.0)
        );
        assert_eq!(
            controller.handle_text_input("2.25"),
            TextInputOutcome::Applied(2.25)
        );
    }

    #[test]
    fn test_text_input_rejects_non_numeric_and_keeps_state() {
        let (mut controller, updates, changes) =
            observed_controller(Range { min: 0.0, max: 10.0 }, 5.0);

        assert_eq!(controller.handle_text_input("xyz"), TextInputOutcome::Rejected);
        assert_eq!(controller.handle_text_input(""), TextInputOutcome::Rejected);
        assert_eq!(controller.handle_text_input("01"), TextInputOutcome::Rejected);

        assert_eq!(controller.value(), 5.0);
        assert!(updates.borrow().is_empty());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_headroom_tracks_bounds() {
        let mut controller = ValueController::new(Range { min: 0.0, max: 2.0 }, 0.0);
        assert!(!controller.can_decrease());
        assert!(controller.can_increase());

        controller.increase();
        assert!(controller.can_decrease());
        assert!(controller.can_increase());

        controller.increase();
        assert!(controller.can_decrease());
        assert!(!controller.can_increase());
    }

    // Property-based tests using proptest
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Strategy: an ordered pair of finite bounds.
        fn sorted_bounds() -> impl Strategy<Value = Range> {
            (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(a, b)| Range {
                min: a.min(b),
                max: a.max(b),
            })
        }

        proptest! {
            /// Property: clamping twice gives the same result as clamping once
            #[test]
            fn clamp_is_idempotent(range in sorted_bounds(), v in -1e9f64..1e9) {
                let once = range.clamp(v);
                prop_assert_eq!(range.clamp(once), once);
            }

            /// Property: values already in range pass through unchanged
            #[test]
            fn clamp_is_identity_in_range(range in sorted_bounds(), t in 0.0f64..=1.0) {
                let v = range.min + t * (range.max - range.min);
                let v = v.min(range.max); // rounding guard
                prop_assert_eq!(range.clamp(v), v);
            }

            /// Property: out-of-range values saturate at the violated bound
            #[test]
            fn clamp_saturates(range in sorted_bounds(), v in -1e9f64..1e9) {
                let clamped = range.clamp(v);
                if v > range.max {
                    prop_assert_eq!(clamped, range.max);
                } else if v < range.min {
                    prop_assert_eq!(clamped, range.min);
                } else {
                    prop_assert_eq!(clamped, v);
                }
            }

            /// Property: no sequence of steps escapes the range
            #[test]
            fn stepping_never_escapes_range(
                range in sorted_bounds(),
                initial in -1e6f64..1e6,
                steps in prop::collection::vec(prop::bool::ANY, 0..64)
            ) {
                let mut controller = ValueController::new(range, initial);
                for up in steps {
                    if up {
                        controller.increase();
                    } else {
                        controller.decrease();
                    }
                    prop_assert!(controller.value() >= range.min);
                    prop_assert!(controller.value() <= range.max);
                }
            }

            /// Property: any text entry leaves the value inside the range
            #[test]
            fn text_input_never_escapes_range(
                range in sorted_bounds(),
                initial in -1e6f64..1e6,
                text in ".*"
            ) {
                let mut controller = ValueController::new(range, initial);
                let _ = controller.handle_text_input(&text);
                prop_assert!(controller.value() >= range.min);
                prop_assert!(controller.value() <= range.max);
            }
        }
    }
}
