//! Lenient parsing of numeric form fields.
//!
//! Form text is read the way a mobile numeric keyboard field is usually
//! consumed: leading whitespace is skipped and the longest leading decimal
//! number is taken, so `"70kg"` reads as `70`. Text without a numeric prefix
//! is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bmi::{evaluate, BmiResult};

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")
        .expect("valid number pattern")
});

/// Parse the leading decimal number of `text`.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// optional exponent. `"Infinity"`, `"NaN"` and comma decimal separators are
/// not recognised (`"70,5"` reads as `70`), and a number too large for `f64`
/// (`"1e400"`) yields `None`.
pub fn parse_numeric_input(text: &str) -> Option<f64> {
    let number = LEADING_NUMBER.find(text.trim_start())?;
    number
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse both form fields and evaluate them.
///
/// Any field that fails to parse is treated as invalid input.
pub fn evaluate_text(weight_text: &str, height_text: &str) -> Option<BmiResult> {
    let weight_kg = parse_numeric_input(weight_text)?;
    let height_cm = parse_numeric_input(height_text)?;
    evaluate(weight_kg, height_cm)
}
