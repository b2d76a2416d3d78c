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

//! Unified error types for the bmi-evaluator library.
//!
//! An invalid measurement is never an error: [`crate::bmi::evaluate`]
//! simply returns `None`. The variants here cover the parts of the crate
//! that talk to the outside world, namely the nutrition lookup and the
//! terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use bmi_evaluator::{nutrition::NutritionClient, Result};
//!
//! async fn product_name() -> Result<Option<String>> {
//!     let client = NutritionClient::new()?;
//!     let facts = client.fetch_product().await?;
//!     Ok(facts.and_then(|f| f.product_name))
//! }
//! ```

use thiserror::Error;

/// The main error type for bmi-evaluator operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be built, sent or read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body was not the expected JSON document.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing to or reading from the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for bmi-evaluator operations.
pub type Result<T> = std::result::Result<T, Error>;
