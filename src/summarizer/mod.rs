// file: src/summarizer/mod.rs
// description: summarization capability abstraction and pass-through adapter
// reference: internal module structure

pub mod huggingface;
pub mod lead;

use crate::config::{BackendKind, SummarizerConfig};
use crate::describer::word_count;
use crate::error::Result;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, info};

pub use huggingface::HuggingFaceSummarizer;
pub use lead::LeadSummarizer;

/// Generation bounds forwarded to the model, measured in word-pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    pub min_length: u32,
    pub max_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 43,
            do_sample: false,
        }
    }
}

/// When to summarize and with what bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub min_words: usize,
    pub params: SummaryParams,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_words: 20,
            params: SummaryParams::default(),
        }
    }
}

impl From<&SummarizerConfig> for SummaryOptions {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            min_words: config.min_words,
            params: SummaryParams {
                min_length: config.min_length,
                max_length: config.max_length,
                do_sample: config.do_sample,
            },
        }
    }
}

/// A text-to-text model that compresses a description.
pub trait Summarizer {
    fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> impl Future<Output = Result<String>> + Send;

    fn name(&self) -> &str;
}

/// What the adapter did with a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    PassedThrough(String),
    Summarized(String),
}

impl SummaryOutcome {
    pub fn into_content(self) -> String {
        match self {
            SummaryOutcome::PassedThrough(text) | SummaryOutcome::Summarized(text) => text,
        }
    }

    pub fn is_summarized(&self) -> bool {
        matches!(self, SummaryOutcome::Summarized(_))
    }
}

/// Returns short descriptions untouched, otherwise asks the summarizer.
pub async fn generate_summary<S: Summarizer>(
    summarizer: &S,
    description: &str,
    options: &SummaryOptions,
) -> Result<SummaryOutcome> {
    let words = word_count(description);
    if words < options.min_words {
        debug!("Description has {} words, skipping summarization", words);
        return Ok(SummaryOutcome::PassedThrough(description.to_string()));
    }

    debug!(
        "Summarizing {} words with {} (min_length={}, max_length={})",
        words,
        summarizer.name(),
        options.params.min_length,
        options.params.max_length
    );
    let summary = summarizer.summarize(description, &options.params).await?;
    Ok(SummaryOutcome::Summarized(summary))
}

/// Backend chosen at startup from configuration.
pub enum SummarizerBackend {
    HuggingFace(HuggingFaceSummarizer),
    Lead(LeadSummarizer),
}

impl SummarizerBackend {
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let backend = match config.backend {
            BackendKind::HuggingFace => SummarizerBackend::HuggingFace(
                HuggingFaceSummarizer::new(
                    config.api_url.clone(),
                    config.model.clone(),
                    config.api_token.clone(),
                )?,
            ),
            BackendKind::Lead => SummarizerBackend::Lead(LeadSummarizer::new()),
        };

        info!("Summarizer ready: {}", backend.name());
        Ok(backend)
    }
}

impl Summarizer for SummarizerBackend {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        match self {
            SummarizerBackend::HuggingFace(inner) => inner.summarize(text, params).await,
            SummarizerBackend::Lead(inner) => inner.summarize(text, params).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            SummarizerBackend::HuggingFace(inner) => inner.name(),
            SummarizerBackend::Lead(inner) => inner.name(),
        }
    }
}
