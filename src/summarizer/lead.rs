// file: src/summarizer/lead.rs
// description: offline extractive summarizer that keeps the leading words

use crate::error::Result;
use crate::summarizer::{SummaryParams, Summarizer};

/// Deterministic stand-in for a hosted model. Keeps the first
/// `max_length` whitespace-separated words; text with fewer than
/// `min_length` words is returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct LeadSummarizer;

impl LeadSummarizer {
    pub fn new() -> Self {
        Self
    }
}

impl Summarizer for LeadSummarizer {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < params.min_length as usize {
            return Ok(text.to_string());
        }

        let keep = words.len().min(params.max_length as usize);
        Ok(words[..keep].join(" "))
    }

    fn name(&self) -> &str {
        "lead"
    }
}
