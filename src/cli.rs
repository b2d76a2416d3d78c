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

use clap::{Args, Parser, Subcommand};

use crate::common::config::AppConfig;
use crate::locale::Locale;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr. RUST_LOG takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single measurement and exit.
    Eval(EvalArgs),
    /// Prompt for measurements until end of input. (default)
    Interactive(InteractiveArgs),
}

/// Options shared by every mode.
#[derive(Args, Clone, Debug)]
pub struct DisplayArgs {
    /// Display language.
    #[arg(short, long, value_enum, default_value_t = Locale::English)]
    pub lang: Locale,
    /// Show sample nutrition information after a valid result.
    #[arg(short, long)]
    pub nutrition: bool,
    /// Product document used for the nutrition lookup.
    #[arg(long, default_value = AppConfig::NUTRITION_ENDPOINT)]
    pub nutrition_url: String,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Default for DisplayArgs {
    fn default() -> Self {
        Self {
            lang: Locale::English,
            nutrition: false,
            nutrition_url: AppConfig::NUTRITION_ENDPOINT.to_string(),
            no_color: false,
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct EvalArgs {
    /// Body weight in kilograms.
    #[arg(short, long, allow_hyphen_values = true)]
    pub weight: String,
    /// Body height in centimeters.
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: String,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Parser, Clone, Debug, Default)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub display: DisplayArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from([
            "bmi", "eval", "--weight", "70", "--height", "175", "--lang", "id", "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Eval(args)) => {
                assert_eq!(args.weight, "70");
                assert_eq!(args.height, "175");
                assert!(args.json);
                assert_eq!(args.display.lang, Locale::Indonesian);
                assert!(!args.display.nutrition);
                assert_eq!(args.display.nutrition_url, AppConfig::NUTRITION_ENDPOINT);
            }
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_parse_negative_weight() {
        let cli = Cli::try_parse_from(["bmi", "eval", "-w", "-5", "-H", "170"]).unwrap();
        match cli.command {
            Some(Commands::Eval(args)) => assert_eq!(args.weight, "-5"),
            _ => panic!("expected eval command"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["bmi", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_eval_requires_both_fields() {
        assert!(Cli::try_parse_from(["bmi", "eval", "--weight", "70"]).is_err());
    }
}
