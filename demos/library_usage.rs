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

//! Example of using bmi-evaluator as a library.
//!
//! Run with: cargo run --example library_usage

use bmi_evaluator::prelude::*;

fn main() {
    println!("=== bmi-evaluator Library Usage Example ===\n");

    let measurements = [(70.0, 175.0), (50.0, 180.0), (95.0, 170.0), (0.0, 170.0)];

    for (weight_kg, height_cm) in measurements {
        match evaluate(weight_kg, height_cm) {
            Some(result) => println!(
                "{weight_kg:>6.1} kg {height_cm:>6.1} cm -> BMI {result} ({} / {})",
                Locale::English.category_label(result.category),
                Locale::Indonesian.category_label(result.category),
            ),
            None => println!("{weight_kg:>6.1} kg {height_cm:>6.1} cm -> invalid measurement"),
        }
    }

    // Form text is parsed leniently, like a numeric keyboard field.
    println!("\n--- Form Input ---");
    let mut state = AppState::new();
    for (weight, height) in [("70kg", "175 cm"), ("abc", "175")] {
        state.set_weight(weight);
        state.set_height(height);
        let accepted = state.calculate();
        let shown = state
            .result
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{weight:?} / {height:?}: accepted={accepted}, showing {shown}");
    }

    println!("\n=== Example Complete ===");
}
