#![no_main]

use libfuzzer_sys::fuzz_target;
use spinbox::controller::{Range, ValueController};
use spinbox::validate::is_numeric_text;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic the validator or the controller, and
    // the value must stay inside the range after any edit.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = is_numeric_text(s);

        let mut controller = ValueController::new(
            Range {
                min: -50.0,
                max: 50.0,
            },
            0.0,
        );
        let _ = controller.handle_text_input(s);
        let value = controller.value();
        assert!((-50.0..=50.0).contains(&value));
    }
});
