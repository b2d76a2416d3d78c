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

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::error::{Error, Result};

pub fn print_colored_text<W: Write>(
    out: &mut W,
    text: &str,
    fg_color: Color,
    use_color: bool,
) -> Result<()> {
    let queued = if use_color {
        queue!(out, SetForegroundColor(fg_color), Print(text), ResetColor)
    } else {
        queue!(out, Print(text))
    };
    queued.map_err(|e| Error::Terminal(format!("failed to queue output: {e}")))
}

pub fn println_colored_text<W: Write>(
    out: &mut W,
    text: &str,
    fg_color: Color,
    use_color: bool,
) -> Result<()> {
    print_colored_text(out, text, fg_color, use_color)?;
    writeln!(out)?;
    Ok(())
}

// Nutrient values keep up to two decimals without trailing zeros
pub fn format_nutrient(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let s = format!("{v:.2}");
            let s = s.trim_end_matches('0').trim_end_matches('.');
            s.to_string()
        }
        None => "-".to_string(),
    }
}
