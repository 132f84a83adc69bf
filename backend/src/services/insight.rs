//! Ledger insights from a text-generation service
//!
//! Summaries are best effort: every failure becomes a fixed user-facing
//! message instead of an error.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{build_insight_prompt, insight_records, Transaction};

use crate::error::AppResult;

pub const NO_TRANSACTIONS_MESSAGE: &str = "Add some transactions to get AI insights!";
pub const NOT_CONFIGURED_MESSAGE: &str = "AI insights are not configured.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Unable to generate insights at this time.";
pub const SERVICE_ERROR_MESSAGE: &str = "Error connecting to AI service.";

/// A service that turns a prompt into free text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Clone, Default)]
pub struct InsightService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl InsightService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Insights turned off; every summary is the not-configured message
    pub fn disabled() -> Self {
        Self::default()
    }

    pub async fn summarize(&self, transactions: &[Transaction]) -> String {
        if transactions.is_empty() {
            return NO_TRANSACTIONS_MESSAGE.to_string();
        }
        let Some(generator) = &self.generator else {
            return NOT_CONFIGURED_MESSAGE.to_string();
        };

        let prompt = match build_insight_prompt(&insight_records(transactions)) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build insight prompt");
                return SERVICE_ERROR_MESSAGE.to_string();
            }
        };

        match generator.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Insight generation failed");
                SERVICE_ERROR_MESSAGE.to_string()
            }
        }
    }
}
