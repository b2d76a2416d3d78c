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

use std::io::Write;

use crossterm::style::Color;
use serde::Serialize;

use crate::app_state::{AppState, NutritionState};
use crate::bmi::{BmiResult, Category, NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use crate::common::config::ThemeConfig;
use crate::error::Result;
use crate::locale::Locale;
use crate::nutrition::NutritionFacts;
use crate::ui::text::{format_nutrient, print_colored_text, println_colored_text};

/// Range covered by the scale bar.
const SCALE_MIN: f64 = 10.0;
const SCALE_MAX: f64 = 40.0;
const SCALE_WIDTH: usize = 30;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct JsonError<'a> {
    ok: bool,
    error: &'a str,
}

#[derive(Serialize)]
struct EvaluationJson<'a> {
    bmi: f64,
    category: Category,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nutrition: Option<Option<&'a NutritionFacts>>,
}

/// Writes results for one display language.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    locale: Locale,
    use_color: bool,
}

impl Renderer {
    pub fn new(locale: Locale, use_color: bool) -> Self {
        Self { locale, use_color }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn render_title<W: Write>(&self, out: &mut W) -> Result<()> {
        println_colored_text(
            out,
            self.locale.strings().title,
            ThemeConfig::title_color(),
            self.use_color,
        )
    }

    /// Render the result area of the screen. Nothing is written while a
    /// lookup is in flight or before the first valid evaluation.
    pub fn render_state<W: Write>(&self, out: &mut W, state: &AppState) -> Result<()> {
        if !state.should_show_result() {
            return Ok(());
        }
        let Some(result) = state.result else {
            return Ok(());
        };

        self.render_result(out, &result)?;
        match &state.nutrition {
            NutritionState::NotRequested => {}
            NutritionState::Loaded(facts) => self.render_nutrition(out, &result, facts)?,
            NutritionState::Unavailable => self.render_nutrition_unavailable(out)?,
        }
        out.flush()?;
        Ok(())
    }

    pub fn render_result<W: Write>(&self, out: &mut W, result: &BmiResult) -> Result<()> {
        let strings = self.locale.strings();
        let color = ThemeConfig::category_color(result.category);

        writeln!(out, "{}: {result}", strings.bmi_label)?;
        write!(out, "{}: ", strings.status_label)?;
        println_colored_text(
            out,
            self.locale.category_label(result.category),
            color,
            self.use_color,
        )?;
        self.render_scale(out, result)?;
        Ok(())
    }

    /// A fixed-width bar marking where the value sits between the
    /// category thresholds.
    pub fn render_scale<W: Write>(&self, out: &mut W, result: &BmiResult) -> Result<()> {
        let position = scale_position(result.value);

        print_colored_text(out, "[", Color::White, self.use_color)?;
        for i in 0..SCALE_WIDTH {
            let cell_value =
                SCALE_MIN + (i as f64 + 0.5) * (SCALE_MAX - SCALE_MIN) / SCALE_WIDTH as f64;
            let cell_color = ThemeConfig::category_color(Category::from_bmi(cell_value));
            if i == position {
                print_colored_text(out, "▲", Color::White, self.use_color)?;
            } else {
                print_colored_text(out, "▬", cell_color, self.use_color)?;
            }
        }
        print_colored_text(out, "]", Color::White, self.use_color)?;
        writeln!(out)?;

        let legend = format!(
            "{SCALE_MIN:.0}  {UNDERWEIGHT_UPPER}  {NORMAL_UPPER:.0}  {OVERWEIGHT_UPPER:.0}  {SCALE_MAX:.0}"
        );
        println_colored_text(out, &legend, ThemeConfig::muted_color(), self.use_color)
    }

    fn render_nutrition<W: Write>(
        &self,
        out: &mut W,
        result: &BmiResult,
        facts: &NutritionFacts,
    ) -> Result<()> {
        let strings = self.locale.strings();
        writeln!(out)?;
        println_colored_text(out, strings.nutrition_title, Color::White, self.use_color)?;

        let product = facts.product_name.as_deref().unwrap_or("-");
        writeln!(out, "{}", self.locale.nutrition_intro(result.category, product))?;
        writeln!(
            out,
            "  • {}: {} kcal {}",
            strings.calories,
            format_nutrient(facts.energy_kcal_100g),
            strings.per_100g
        )?;
        for (label, value) in [
            (strings.protein, facts.proteins_100g),
            (strings.fat, facts.fat_100g),
            (strings.carbs, facts.carbohydrates_100g),
        ] {
            writeln!(
                out,
                "  • {label}: {}g {}",
                format_nutrient(value),
                strings.per_100g
            )?;
        }
        writeln!(out, "{}", strings.nutrition_closing)?;
        Ok(())
    }

    fn render_nutrition_unavailable<W: Write>(&self, out: &mut W) -> Result<()> {
        let strings = self.locale.strings();
        writeln!(out)?;
        println_colored_text(out, strings.nutrition_title, Color::White, self.use_color)?;
        writeln!(out, "{}", strings.nutrition_unavailable)?;
        Ok(())
    }

    /// Render the state as a single JSON document.
    pub fn render_json<W: Write>(&self, out: &mut W, state: &AppState) -> Result<()> {
        match state.result {
            Some(result) => {
                let nutrition = match &state.nutrition {
                    NutritionState::NotRequested => None,
                    NutritionState::Loaded(facts) => Some(Some(facts)),
                    NutritionState::Unavailable => Some(None),
                };
                let data = EvaluationJson {
                    bmi: result.value,
                    category: result.category,
                    label: self.locale.category_label(result.category),
                    nutrition,
                };
                serde_json::to_writer_pretty(&mut *out, &JsonOut { ok: true, data })?;
            }
            None => {
                let error = JsonError {
                    ok: false,
                    error: self.locale.strings().invalid_input,
                };
                serde_json::to_writer_pretty(&mut *out, &error)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

fn scale_position(value: f64) -> usize {
    let clamped = value.clamp(SCALE_MIN, SCALE_MAX);
    let ratio = (clamped - SCALE_MIN) / (SCALE_MAX - SCALE_MIN);
    ((ratio * SCALE_WIDTH as f64) as usize).min(SCALE_WIDTH - 1)
}
