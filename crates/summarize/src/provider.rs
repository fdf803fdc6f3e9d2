use async_trait::async_trait;

/// Trait for summary model backends. Each backend wraps a pretrained
/// generative model's decoding procedure behind a single call.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Produce an abstractive summary of `text`, generating at most
    /// `max_new_tokens` new tokens. Inputs longer than the model maximum
    /// are truncated by the backend, not rejected.
    async fn summarize(&self, text: &str, max_new_tokens: u32) -> Result<String, SummarizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Transport-level failure (DNS, connect, timeout, reset). Surfaced to
    /// users as a generic connectivity message; no finer distinction.
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Network(error.to_string())
    }
}
