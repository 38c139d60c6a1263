// file: src/summarizer/huggingface.rs
// description: Hugging Face inference API client for seq2seq summarization models
// reference: https://huggingface.co/docs/api-inference/tasks/summarization

use crate::error::{PipelineError, Result};
use crate::summarizer::{SummaryParams, Summarizer};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummarizationResponse {
    Summaries(Vec<SummaryData>),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct SummaryData {
    summary_text: String,
}

pub struct HuggingFaceSummarizer {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(api_url: String, model: String, api_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!("{}/{}", api_url.trim_end_matches('/'), model);

        Ok(Self {
            client,
            endpoint,
            model,
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        let request = SummarizationRequest {
            inputs: text,
            parameters: params,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        debug!(
            "Requesting summary from {} for {} chars",
            self.model,
            text.len()
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = builder.send().await.map_err(|e| {
            PipelineError::Summarization(format!("Failed to send inference request: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Summarization(format!(
                "Inference request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await.map_err(|e| {
            PipelineError::Summarization(format!("Failed to read inference response: {}", e))
        })?;

        parse_summary(&body)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn parse_summary(body: &str) -> Result<String> {
    let parsed: SummarizationResponse = serde_json::from_str(body).map_err(|e| {
        PipelineError::Summarization(format!("Failed to parse inference response: {}", e))
    })?;

    match parsed {
        SummarizationResponse::Summaries(summaries) => summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or_else(|| {
                PipelineError::Summarization("No summary returned by inference API".to_string())
            }),
        SummarizationResponse::Error { error } => Err(PipelineError::Summarization(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_joins_model() {
        let summarizer = HuggingFaceSummarizer::new(
            "https://api-inference.huggingface.co/models/".to_string(),
            "facebook/bart-large-cnn".to_string(),
            None,
        )
        .unwrap();

        assert_eq!(
            summarizer.endpoint(),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
        assert_eq!(summarizer.name(), "facebook/bart-large-cnn");
    }

    #[test]
    fn test_request_body_shape() {
        let params = SummaryParams::default();
        let request = SummarizationRequest {
            inputs: "some text",
            parameters: &params,
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "inputs": "some text",
                "parameters": {"min_length": 20, "max_length": 43, "do_sample": false},
                "options": {"wait_for_model": true}
            })
        );
    }

    #[test]
    fn test_parse_summary_text() {
        let body = r#"[{"summary_text": "An exterior brick wall on level 1."}]"#;
        assert_eq!(
            parse_summary(body).unwrap(),
            "An exterior brick wall on level 1."
        );
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Model facebook/bart-large-cnn is currently loading"}"#;
        match parse_summary(body) {
            Err(PipelineError::Summarization(message)) => {
                assert!(message.contains("currently loading"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_summary("[]").is_err());
        assert!(parse_summary("not json").is_err());
    }
}
