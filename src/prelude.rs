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

//! The bmi-evaluator prelude.
//!
//! ```rust
//! use bmi_evaluator::prelude::*;
//!
//! let result = evaluate(50.0, 180.0).unwrap();
//! assert_eq!(result.category, Category::Underweight);
//! ```

// Core evaluator
pub use crate::bmi::{evaluate, BmiResult, Category, Measurement};

// Error types
pub use crate::error::{Error, Result};

// Form input and units
pub use crate::utils::{cm_to_m, evaluate_text, m_to_cm, parse_numeric_input};

// Presentation
pub use crate::app_state::{AppState, NutritionState};
pub use crate::locale::Locale;
pub use crate::nutrition::{NutritionClient, NutritionFacts};
