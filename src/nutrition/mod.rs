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

//! Sample nutrition lookup.
//!
//! After a successful evaluation the application can show the nutrient
//! table of one fixed product from the Open Food Facts API. The lookup does
//! not depend on the measurement and is kept entirely outside of
//! [`crate::bmi`].

pub mod client;
pub mod types;

pub use client::NutritionClient;
pub use types::{parse_product_response, NutritionFacts};
