use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::provider::{SummarizeError, SummaryProvider};

/// Local model backend via the Ollama generate API.
pub struct OllamaProvider {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            model,
        }
    }
}

#[async_trait]
impl SummaryProvider for OllamaProvider {
    async fn summarize(&self, text: &str, max_new_tokens: u32) -> Result<String, SummarizeError> {
        let url = format!("{}/api/generate", self.url);

        let body = json!({
            "model": self.model,
            "prompt": format!("Summarize the following text in a few sentences:\n\n{}", text),
            "stream": false,
            "options": {
                "temperature": 0.0,
                "num_predict": max_new_tokens,
            },
        });

        debug!("Ollama request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let content = resp["response"]
            .as_str()
            .ok_or_else(|| SummarizeError::Parse("missing response".into()))?
            .to_string();

        Ok(content)
    }
}
