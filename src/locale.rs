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

//! Display strings for the two supported languages.

use clap::ValueEnum;

use crate::bmi::Category;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "id")]
    Indonesian,
}

/// Every hardcoded string shown to the user.
#[derive(Debug, Clone, Copy)]
pub struct UiStrings {
    pub title: &'static str,
    pub weight_prompt: &'static str,
    pub height_prompt: &'static str,
    pub bmi_label: &'static str,
    pub status_label: &'static str,
    pub invalid_input: &'static str,
    pub loading: &'static str,
    pub nutrition_title: &'static str,
    /// Printed before the product block; `{status}` and `{product}` are substituted.
    pub nutrition_intro: &'static str,
    pub calories: &'static str,
    pub protein: &'static str,
    pub fat: &'static str,
    pub carbs: &'static str,
    pub per_100g: &'static str,
    pub nutrition_closing: &'static str,
    pub nutrition_unavailable: &'static str,
    pub quit_hint: &'static str,
}

const ENGLISH: UiStrings = UiStrings {
    title: "BMI Calculator",
    weight_prompt: "Weight (kg)",
    height_prompt: "Height (cm)",
    bmi_label: "Your BMI",
    status_label: "Status",
    invalid_input: "Weight and height must be positive numbers.",
    loading: "Fetching nutrition information...",
    nutrition_title: "Nutrition Advice:",
    nutrition_intro: "Based on your BMI ({status}), watch your nutrient intake. Here is sample nutrition information for \"{product}\":",
    calories: "Calories",
    protein: "Protein",
    fat: "Fat",
    carbs: "Carbohydrates",
    per_100g: "per 100g",
    nutrition_closing: "Remember to keep a balanced diet and consult a nutritionist for more personal advice.",
    nutrition_unavailable: "Nutrition information is not available right now. Please consult a nutritionist for more personal advice.",
    quit_hint: "Enter q to quit.",
};

const INDONESIAN: UiStrings = UiStrings {
    title: "Kalkulator BMI",
    weight_prompt: "Berat (kg)",
    height_prompt: "Tinggi (cm)",
    bmi_label: "BMI Anda",
    status_label: "Status",
    invalid_input: "Berat dan tinggi harus berupa angka positif.",
    loading: "Mengambil informasi nutrisi...",
    nutrition_title: "Saran Nutrisi:",
    nutrition_intro: "Berdasarkan BMI Anda ({status}), perhatikan asupan nutrisi Anda. Berikut contoh informasi nutrisi dari produk \"{product}\":",
    calories: "Kalori",
    protein: "Protein",
    fat: "Lemak",
    carbs: "Karbohidrat",
    per_100g: "per 100g",
    nutrition_closing: "Ingat untuk selalu menjaga pola makan seimbang dan berkonsultasi dengan ahli gizi untuk saran yang lebih personal.",
    nutrition_unavailable: "Tidak dapat mengambil informasi nutrisi saat ini. Silakan konsultasikan dengan ahli gizi untuk saran yang lebih personal.",
    quit_hint: "Ketik q untuk keluar.",
};

impl Locale {
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Indonesian => &INDONESIAN,
        }
    }

    pub fn category_label(self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::English, Category::Underweight) => "Underweight",
            (Locale::English, Category::Normal) => "Normal",
            (Locale::English, Category::Overweight) => "Overweight",
            (Locale::English, Category::Obese) => "Obese",
            (Locale::Indonesian, Category::Underweight) => "Kekurangan Berat Badan",
            (Locale::Indonesian, Category::Normal) => "Normal",
            (Locale::Indonesian, Category::Overweight) => "Kelebihan Berat Badan",
            (Locale::Indonesian, Category::Obese) => "Obesitas",
        }
    }

    /// The nutrition intro with status and product name filled in.
    pub fn nutrition_intro(self, category: Category, product: &str) -> String {
        self.strings()
            .nutrition_intro
            .replace("{status}", self.category_label(category))
            .replace("{product}", product)
    }
}
