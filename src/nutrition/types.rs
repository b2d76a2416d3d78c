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

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Nutrient values of a single product, per 100 g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub product_name: Option<String>,
    pub energy_kcal_100g: Option<f64>,
    pub proteins_100g: Option<f64>,
    pub fat_100g: Option<f64>,
    pub carbohydrates_100g: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    product: Option<Product>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_f64")]
    energy_kcal_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    proteins_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    fat_100g: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    carbohydrates_100g: Option<f64>,
}

impl From<Product> for NutritionFacts {
    fn from(product: Product) -> Self {
        Self {
            product_name: product.product_name.filter(|name| !name.trim().is_empty()),
            energy_kcal_100g: product.nutriments.energy_kcal_100g,
            proteins_100g: product.nutriments.proteins_100g,
            fat_100g: product.nutriments.fat_100g,
            carbohydrates_100g: product.nutriments.carbohydrates_100g,
        }
    }
}

/// Nutrient fields show up both as JSON numbers and as numeric strings.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Parse a product lookup response body.
///
/// A document without a `product` object is the "no data" state and
/// yields `Ok(None)`; malformed JSON is an error.
pub fn parse_product_response(body: &str) -> Result<Option<NutritionFacts>> {
    let response: ProductResponse = serde_json::from_str(body)?;
    Ok(response.product.map(NutritionFacts::from))
}
