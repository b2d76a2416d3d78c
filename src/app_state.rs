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

use crate::bmi::BmiResult;
use crate::nutrition::NutritionFacts;
use crate::utils::evaluate_text;

/// Outcome of the sample nutrition lookup for the current result.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NutritionState {
    /// No lookup was requested.
    #[default]
    NotRequested,
    Loaded(NutritionFacts),
    /// The lookup failed or returned no product.
    Unavailable,
}

/// Form state of the calculator screen.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub weight_input: String,
    pub height_input: String,
    pub result: Option<BmiResult>,
    pub nutrition: NutritionState,
    pub is_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight_input = text.into();
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height_input = text.into();
    }

    /// Evaluate the current form text.
    ///
    /// Returns `false` and leaves the displayed result and nutrition state
    /// untouched when the input is invalid.
    pub fn calculate(&mut self) -> bool {
        match evaluate_text(&self.weight_input, &self.height_input) {
            Some(result) => {
                self.result = Some(result);
                true
            }
            None => false,
        }
    }

    pub fn begin_lookup(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_lookup(&mut self, facts: Option<NutritionFacts>) {
        self.nutrition = match facts {
            Some(facts) => NutritionState::Loaded(facts),
            None => NutritionState::Unavailable,
        };
        self.is_loading = false;
    }

    pub fn should_show_result(&self) -> bool {
        self.result.is_some() && !self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Category;

    fn state_with(weight: &str, height: &str) -> AppState {
        let mut state = AppState::new();
        state.set_weight(weight);
        state.set_height(height);
        state
    }

    #[test]
    fn test_calculate_sets_result() {
        let mut state = state_with("70", "175");
        assert!(state.calculate());
        let result = state.result.unwrap();
        assert_eq!(result.to_string(), "22.86");
        assert_eq!(result.category, Category::Normal);
        assert!(state.should_show_result());
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut state = state_with("95", "170");
        assert!(state.calculate());
        state.finish_lookup(Some(NutritionFacts::default()));
        let previous = state.result;

        state.set_weight("-5");
        assert!(!state.calculate());
        assert_eq!(state.result, previous);
        assert_eq!(
            state.nutrition,
            NutritionState::Loaded(NutritionFacts::default())
        );

        state.set_weight("abc");
        assert!(!state.calculate());
        assert_eq!(state.result, previous);
    }

    #[test]
    fn test_invalid_input_without_previous_result() {
        let mut state = state_with("70", "0");
        assert!(!state.calculate());
        assert!(state.result.is_none());
        assert!(!state.should_show_result());
    }

    #[test]
    fn test_new_result_replaces_old() {
        let mut state = state_with("50", "180");
        state.calculate();
        assert_eq!(state.result.unwrap().category, Category::Underweight);

        state.set_weight("95");
        state.set_height("170");
        state.calculate();
        assert_eq!(state.result.unwrap().category, Category::Obese);
    }

    #[test]
    fn test_lookup_hides_result_while_loading() {
        let mut state = state_with("70", "175");
        state.calculate();
        state.begin_lookup();
        assert!(!state.should_show_result());

        state.finish_lookup(None);
        assert!(state.should_show_result());
        assert_eq!(state.nutrition, NutritionState::Unavailable);
    }
}
