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

use std::time::Duration;

use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::nutrition::types::{parse_product_response, NutritionFacts};

/// HTTP client for the fixed product lookup.
#[derive(Debug, Clone)]
pub struct NutritionClient {
    client: reqwest::Client,
    url: String,
}

impl NutritionClient {
    /// Create a client pointed at the default Open Food Facts product.
    pub fn new() -> Result<Self> {
        Self::with_url(AppConfig::NUTRITION_ENDPOINT)
    }

    /// Create a client pointed at another product document.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(AppConfig::CONNECTION_TIMEOUT_SECS))
            .timeout(Duration::from_secs(AppConfig::REQUEST_TIMEOUT_SECS))
            .user_agent(AppConfig::USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the product document.
    ///
    /// `Ok(None)` means the server answered but had no product data.
    pub async fn fetch_product(&self) -> Result<Option<NutritionFacts>> {
        tracing::debug!("Fetching nutrition data from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let facts = parse_product_response(&body)?;
        if facts.is_none() {
            tracing::debug!("Response from {} carried no product", self.url);
        }
        Ok(facts)
    }

    /// Fetch the product, collapsing every failure into the "no data" state.
    pub async fn lookup_or_none(&self) -> Option<NutritionFacts> {
        match self.fetch_product().await {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!("Failed to fetch nutrition information: {e}");
                None
            }
        }
    }
}
