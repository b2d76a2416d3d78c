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

use bmi_evaluator::cli::{Cli, Commands, InteractiveArgs};
use bmi_evaluator::common::config::AppConfig;
use bmi_evaluator::view::{run_eval_mode, run_interactive_mode};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        AppConfig::VERBOSE_LOG_FILTER
    } else {
        AppConfig::DEFAULT_LOG_FILTER
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Some(Commands::Eval(args)) => {
            let mut stdout = std::io::stdout();
            run_eval_mode(&args, &mut stdout).await.map(|valid| {
                if valid {
                    0
                } else {
                    AppConfig::EXIT_INVALID_INPUT
                }
            })
        }
        Some(Commands::Interactive(args)) => run_interactive_mode(&args).await.map(|()| 0),
        None => run_interactive_mode(&InteractiveArgs::default())
            .await
            .map(|()| 0),
    };

    match outcome {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(AppConfig::EXIT_FAILURE);
        }
    }
}
