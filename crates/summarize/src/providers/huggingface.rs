use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::provider::{SummarizeError, SummaryProvider};

/// Hosted inference API client for a pretrained summarization model.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_token: Option<String>,
}

impl HuggingFaceProvider {
    pub fn new(api_url: String, model: String, api_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            model,
            api_token,
        }
    }
}

/// Pull the summary out of the inference API response shape
/// `[{"summary_text": "..."}]`.
fn parse_summary(resp: &serde_json::Value) -> Result<String, SummarizeError> {
    resp[0]["summary_text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SummarizeError::Parse("missing [0].summary_text".into()))
}

#[async_trait]
impl SummaryProvider for HuggingFaceProvider {
    async fn summarize(&self, text: &str, max_new_tokens: u32) -> Result<String, SummarizeError> {
        let url = format!("{}/models/{}", self.api_url, self.model);

        // Greedy decoding; over-long inputs are truncated by the service
        // rather than rejected.
        let body = json!({
            "inputs": text,
            "parameters": {
                "max_new_tokens": max_new_tokens,
                "truncation": "longest_first",
                "do_sample": false,
            },
            "options": { "wait_for_model": true },
        });

        debug!("Hugging Face request to {}", url);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        parse_summary(&resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_text() {
        let resp = json!([{ "summary_text": "A short summary." }]);
        assert_eq!(parse_summary(&resp).unwrap(), "A short summary.");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let resp = json!({ "error": "Model facebook/bart-large-cnn is currently loading" });
        assert!(matches!(parse_summary(&resp), Err(SummarizeError::Parse(_))));
    }

    #[test]
    fn empty_array_is_a_parse_error() {
        let resp = json!([]);
        assert!(matches!(parse_summary(&resp), Err(SummarizeError::Parse(_))));
    }
}
