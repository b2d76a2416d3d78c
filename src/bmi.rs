// Copyright 2025 The bmi-evaluator Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Body Mass Index evaluation.
//!
//! This module is the pure core of the crate: it converts a weight in
//! kilograms and a height in centimeters into a BMI value rounded to two
//! decimal places and a weight-status [`Category`]. It performs no I/O and
//! keeps no state, so identical inputs always produce bit-identical results.
//!
//! # Example
//!
//! ```rust
//! use bmi_evaluator::bmi::{evaluate, Category};
//!
//! let result = evaluate(70.0, 175.0).expect("valid measurement");
//! assert_eq!(result.to_string(), "22.86");
//! assert_eq!(result.category, Category::Normal);
//!
//! // Non-positive input produces no result.
//! assert!(evaluate(0.0, 170.0).is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::units::cm_to_m;

/// Values below this are [`Category::Underweight`].
pub const UNDERWEIGHT_UPPER: f64 = 18.5;
/// Values below this (and at least [`UNDERWEIGHT_UPPER`]) are [`Category::Normal`].
pub const NORMAL_UPPER: f64 = 25.0;
/// Values below this (and at least [`NORMAL_UPPER`]) are [`Category::Overweight`].
pub const OVERWEIGHT_UPPER: f64 = 30.0;

/// Weight-status classification, ordered by ascending BMI threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl Category {
    /// All categories in ascending threshold order.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classify a BMI value using half-open intervals, first match wins.
    ///
    /// Callers are expected to pass the already rounded value so that
    /// 18.50, 25.00 and 30.00 land in the upper bucket.
    pub fn from_bmi(value: f64) -> Self {
        if value < UNDERWEIGHT_UPPER {
            Category::Underweight
        } else if value < NORMAL_UPPER {
            Category::Normal
        } else if value < OVERWEIGHT_UPPER {
            Category::Overweight
        } else {
            Category::Obese
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Underweight => write!(f, "Underweight"),
            Category::Normal => write!(f, "Normal"),
            Category::Overweight => write!(f, "Overweight"),
            Category::Obese => write!(f, "Obese"),
        }
    }
}

/// A weight/height pair entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }

    /// Both values must be finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        is_positive_finite(self.weight_kg) && is_positive_finite(self.height_cm)
    }

    pub fn evaluate(&self) -> Option<BmiResult> {
        evaluate(self.weight_kg, self.height_cm)
    }
}

/// The outcome of one evaluation.
///
/// `value` is already rounded to two decimal places; `Display` renders it
/// with exactly two digits after the point (`25.00`, not `25`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: Category,
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Compute the BMI for a weight in kilograms and a height in centimeters.
///
/// Returns `None` when either input is zero, negative, NaN or infinite.
pub fn evaluate(weight_kg: f64, height_cm: f64) -> Option<BmiResult> {
    if !is_positive_finite(weight_kg) || !is_positive_finite(height_cm) {
        return None;
    }

    let height_m = cm_to_m(height_cm);
    let raw = weight_kg / (height_m * height_m);
    if !raw.is_finite() {
        // Subnormal heights can overflow the quotient.
        return None;
    }

    let value = round_to_hundredths(raw);
    Some(BmiResult {
        value,
        category: Category::from_bmi(value),
    })
}

/// Round to two decimal places, halves away from zero.
///
/// Rounding works on the exact binary value, so `2.525` (stored as
/// `2.52499999...`) rounds down to `2.52`. Only values that are exactly
/// representable as `x.xx5` count as halves.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // A half is an odd multiple of 1/200 with no residual.
    let doubled = (value * 200.0).round();
    if doubled % 2.0 != 0.0 && value.mul_add(200.0, -doubled) == 0.0 {
        return (doubled + doubled.signum()) / 2.0 / 100.0;
    }

    // Fixed-precision formatting rounds the exact decimal expansion.
    format!("{value:.2}").parse().unwrap_or(value)
}

#[inline]
fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
