//! Numeric text validation for the input field
//!
//! Decides whether a committed text entry is the plain decimal form of a
//! number before the controller parses and applies it. The accepted shapes
//! are deliberately narrow: no exponent notation, no leading `+`, no
//! thousands separators, and no whitespace anywhere. Callers trim the raw
//! entry before validating.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted shapes, each fully anchored, with an optional leading minus:
/// a decimal with at least one digit on both sides of the point, an integer
/// without leading zeros, or a bare zero.
static NUMERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-?[0-9]+\.[0-9]+|-?[1-9][0-9]*|-?0)$").expect("numeric pattern is valid")
});

/// Returns true if `input` is the text form of a plain decimal number.
///
/// Never panics; any non-matching string (including the empty string)
/// yields `false`.
pub fn is_numeric_text(input: &str) -> bool {
    NUMERIC_TEXT.is_match(input)
}
