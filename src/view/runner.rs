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

use crossterm::tty::IsTty;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app_state::AppState;
use crate::cli::{DisplayArgs, EvalArgs, InteractiveArgs};
use crate::common::config::{AppConfig, ThemeConfig};
use crate::error::Result;
use crate::nutrition::NutritionClient;
use crate::ui::render::Renderer;
use crate::ui::text::println_colored_text;

fn renderer_for(display: &DisplayArgs) -> Renderer {
    let use_color = !display.no_color && std::io::stdout().is_tty();
    Renderer::new(display.lang, use_color)
}

fn nutrition_client_for(display: &DisplayArgs) -> Result<Option<NutritionClient>> {
    if !display.nutrition {
        return Ok(None);
    }
    Ok(Some(NutritionClient::with_url(display.nutrition_url.as_str())?))
}

/// Run the optional lookup for a freshly calculated result.
async fn refresh_nutrition(state: &mut AppState, client: Option<&NutritionClient>) {
    let Some(client) = client else {
        return;
    };
    state.begin_lookup();
    let facts = client.lookup_or_none().await;
    state.finish_lookup(facts);
}

/// Evaluate one measurement from the command line.
///
/// Returns `Ok(false)` when the measurement was invalid.
pub async fn run_eval_mode<W: Write>(args: &EvalArgs, out: &mut W) -> Result<bool> {
    let renderer = renderer_for(&args.display);
    run_eval_with_renderer(args, &renderer, out).await
}

pub async fn run_eval_with_renderer<W: Write>(
    args: &EvalArgs,
    renderer: &Renderer,
    out: &mut W,
) -> Result<bool> {
    let client = nutrition_client_for(&args.display)?;

    let mut state = AppState::new();
    state.set_weight(args.weight.as_str());
    state.set_height(args.height.as_str());
    let valid = state.calculate();
    tracing::debug!(
        weight = %args.weight,
        height = %args.height,
        valid,
        "Evaluated measurement"
    );

    if valid {
        refresh_nutrition(&mut state, client.as_ref()).await;
    }

    if args.json {
        renderer.render_json(out, &state)?;
    } else if valid {
        renderer.render_state(out, &state)?;
    } else {
        eprintln!("{}", renderer.locale().strings().invalid_input);
    }
    out.flush()?;
    Ok(valid)
}

/// Prompt for weight and height pairs until end of input or a quit command.
pub async fn run_interactive_mode(args: &InteractiveArgs) -> Result<()> {
    let renderer = renderer_for(&args.display);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_interactive_with(args, &renderer, stdin, &mut stdout).await
}

pub async fn run_interactive_with<R, W>(
    args: &InteractiveArgs,
    renderer: &Renderer,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let client = nutrition_client_for(&args.display)?;
    let strings = renderer.locale().strings();
    let mut lines = input.lines();
    let mut state = AppState::new();

    renderer.render_title(out)?;
    writeln!(out, "{}", strings.quit_hint)?;

    loop {
        let Some(weight) = prompt(out, &mut lines, strings.weight_prompt).await? else {
            break;
        };
        let Some(height) = prompt(out, &mut lines, strings.height_prompt).await? else {
            break;
        };

        state.set_weight(weight);
        state.set_height(height);
        if state.calculate() {
            if client.is_some() {
                println_colored_text(
                    out,
                    strings.loading,
                    ThemeConfig::muted_color(),
                    renderer.use_color(),
                )?;
                out.flush()?;
            }
            refresh_nutrition(&mut state, client.as_ref()).await;
        } else {
            tracing::debug!("Ignoring invalid measurement, keeping previous result");
            writeln!(out, "{}", strings.invalid_input)?;
        }

        writeln!(out)?;
        renderer.render_state(out, &state)?;
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Print a prompt and read one line. `None` on end of input or quit.
async fn prompt<R, W>(
    out: &mut W,
    lines: &mut tokio::io::Lines<R>,
    label: &str,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{label}: ")?;
    out.flush()?;

    let Some(line) = lines.next_line().await? else {
        writeln!(out)?;
        return Ok(None);
    };
    let line = line.trim().to_string();
    if AppConfig::QUIT_COMMANDS
        .iter()
        .any(|cmd| line.eq_ignore_ascii_case(cmd))
    {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn eval_args(weight: &str, height: &str, json: bool) -> EvalArgs {
        EvalArgs {
            weight: weight.to_string(),
            height: height.to_string(),
            json,
            display: DisplayArgs {
                no_color: true,
                ..DisplayArgs::default()
            },
        }
    }

    fn closed_port_url() -> String {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        format!("http://127.0.0.1:{port}/product.json")
    }

    fn with_nutrition(display: DisplayArgs) -> DisplayArgs {
        DisplayArgs {
            nutrition: true,
            nutrition_url: closed_port_url(),
            ..display
        }
    }

    async fn interactive(input: &str, lang: Locale) -> String {
        interactive_with(input, lang, false).await
    }

    async fn interactive_with(input: &str, lang: Locale, nutrition: bool) -> String {
        let mut display = DisplayArgs {
            lang,
            no_color: true,
            ..DisplayArgs::default()
        };
        if nutrition {
            display = with_nutrition(display);
        }
        let args = InteractiveArgs { display };
        let renderer = Renderer::new(lang, false);
        let mut out = Vec::new();
        run_interactive_with(&args, &renderer, input.as_bytes(), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_eval_valid_measurement() {
        let renderer = Renderer::new(Locale::English, false);
        let mut out = Vec::new();
        let valid = run_eval_with_renderer(&eval_args("70", "175", false), &renderer, &mut out)
            .await
            .unwrap();
        assert!(valid);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Your BMI: 22.86"));
        assert!(out.contains("Status: Normal"));
    }

    #[tokio::test]
    async fn test_eval_invalid_measurement_writes_nothing() {
        let renderer = Renderer::new(Locale::English, false);
        let mut out = Vec::new();
        let valid = run_eval_with_renderer(&eval_args("0", "170", false), &renderer, &mut out)
            .await
            .unwrap();
        assert!(!valid);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_eval_invalid_measurement_as_json() {
        let renderer = Renderer::new(Locale::English, false);
        let mut out = Vec::new();
        let valid = run_eval_with_renderer(&eval_args("abc", "170", true), &renderer, &mut out)
            .await
            .unwrap();
        assert!(!valid);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], false);
    }

    #[tokio::test]
    async fn test_interactive_single_pair() {
        let out = interactive("70\n175\n", Locale::English).await;
        assert!(out.starts_with("BMI Calculator\n"));
        assert!(out.contains("Weight (kg): "));
        assert!(out.contains("Height (cm): "));
        assert!(out.contains("Your BMI: 22.86"));
    }

    #[tokio::test]
    async fn test_interactive_invalid_pair_keeps_previous_result() {
        let out = interactive("95\n170\n-5\n170\n", Locale::Indonesian).await;
        assert!(out.contains("Berat dan tinggi harus berupa angka positif."));
        assert_eq!(out.matches("BMI Anda: 32.87").count(), 2);
        assert_eq!(out.matches("Status: Obesitas").count(), 2);
    }

    #[tokio::test]
    async fn test_interactive_invalid_first_pair_shows_no_result() {
        let out = interactive("abc\n170\n", Locale::English).await;
        assert!(out.contains("Weight and height must be positive numbers."));
        assert!(!out.contains("Your BMI"));
    }

    #[tokio::test]
    async fn test_interactive_quit_command() {
        let out = interactive("q\n70\n175\n", Locale::English).await;
        assert!(!out.contains("Your BMI"));
        assert!(!out.contains("Height (cm)"));
    }

    #[tokio::test]
    async fn test_interactive_replaces_result() {
        let out = interactive("50\n180\n95\n170\n", Locale::English).await;
        let first = out.find("Status: Underweight").unwrap();
        let second = out.find("Status: Obese").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_eval_with_unreachable_nutrition_shows_no_data() {
        let renderer = Renderer::new(Locale::English, false);
        let mut args = eval_args("70", "175", false);
        args.display = with_nutrition(args.display);
        let mut out = Vec::new();
        let valid = run_eval_with_renderer(&args, &renderer, &mut out)
            .await
            .unwrap();
        assert!(valid);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Your BMI: 22.86"));
        assert!(out.contains("Nutrition Advice:"));
        assert!(out.contains("Nutrition information is not available right now."));
    }

    #[tokio::test]
    async fn test_eval_with_unreachable_nutrition_as_json() {
        let renderer = Renderer::new(Locale::English, false);
        let mut args = eval_args("70", "175", true);
        args.display = with_nutrition(args.display);
        let mut out = Vec::new();
        run_eval_with_renderer(&args, &renderer, &mut out)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], true);
        assert!(value["data"].get("nutrition").is_some());
        assert!(value["data"]["nutrition"].is_null());
    }

    #[tokio::test]
    async fn test_eval_invalid_measurement_skips_lookup() {
        let renderer = Renderer::new(Locale::English, false);
        let mut args = eval_args("-5", "170", false);
        args.display = with_nutrition(args.display);
        let mut out = Vec::new();
        let valid = run_eval_with_renderer(&args, &renderer, &mut out)
            .await
            .unwrap();
        assert!(!valid);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_interactive_nutrition_lookup_after_valid_pair() {
        let out = interactive_with("70\n175\n", Locale::English, true).await;
        assert_eq!(out.matches("Fetching nutrition information...").count(), 1);
        let loading = out.find("Fetching nutrition information...").unwrap();
        let unavailable = out
            .find("Nutrition information is not available right now.")
            .unwrap();
        assert!(loading < unavailable);
        assert!(out.contains("Your BMI: 22.86"));
    }

    #[tokio::test]
    async fn test_interactive_nutrition_block_kept_after_invalid_pair() {
        let out = interactive_with("70\n175\nabc\n175\n", Locale::Indonesian, true).await;
        // The invalid pair does not trigger a second lookup.
        assert_eq!(out.matches("Mengambil informasi nutrisi...").count(), 1);
        assert!(out.contains("Berat dan tinggi harus berupa angka positif."));
        assert_eq!(out.matches("BMI Anda: 22.86").count(), 2);
        assert_eq!(
            out.matches("Tidak dapat mengambil informasi nutrisi saat ini.")
                .count(),
            2
        );
    }
}
