pub mod huggingface;
pub mod ollama;

use gist_core::Config;

use crate::provider::{SummarizeError, SummaryProvider};

/// Create the appropriate summary provider based on config.
pub fn create_provider(config: &Config) -> Result<Box<dyn SummaryProvider>, SummarizeError> {
    match config.summarizer.provider.as_str() {
        "huggingface" => Ok(Box::new(huggingface::HuggingFaceProvider::new(
            config.huggingface.api_url.clone(),
            config.huggingface.model.clone(),
            config.huggingface.api_token.clone(),
        ))),
        "ollama" => Ok(Box::new(ollama::OllamaProvider::new(
            config.ollama.url.clone(),
            config.ollama.model.clone(),
        ))),
        other => Err(SummarizeError::NotConfigured(format!(
            "unknown summary provider: '{}'",
            other
        ))),
    }
}
