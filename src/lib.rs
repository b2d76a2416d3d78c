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

//! Body Mass Index evaluation.
//!
//! The [`bmi`] module holds the pure evaluator. Everything else supports the
//! `bmi` command-line tool: form parsing, display strings for English and
//! Indonesian, terminal and JSON rendering, and an optional sample nutrition
//! lookup.

pub mod app_state;
pub mod bmi;
pub mod cli;
pub mod error;
pub mod locale;
pub mod nutrition;
pub mod prelude;
pub mod ui;
pub mod utils;
pub mod view;

pub mod common {
    pub mod config;
}

pub use error::{Error, Result};
