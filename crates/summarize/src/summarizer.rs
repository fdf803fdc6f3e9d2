use tracing::debug;

use crate::chunker::split_chunks;
use crate::provider::{SummarizeError, SummaryProvider};

/// Chunked summarization pipeline around a pretrained summary model.
///
/// Splits input into fixed-size character windows, summarizes each window
/// independently, and joins the per-window summaries with a single space in
/// window order. Each window is summarized with no awareness of its
/// neighbors. Constructed once at startup and shared read-only across
/// requests.
pub struct Summarizer {
    provider: Box<dyn SummaryProvider>,
    chunk_max_chars: usize,
    max_new_tokens: u32,
}

impl Summarizer {
    pub fn new(
        provider: Box<dyn SummaryProvider>,
        chunk_max_chars: usize,
        max_new_tokens: u32,
    ) -> Self {
        Self {
            provider,
            chunk_max_chars,
            max_new_tokens,
        }
    }

    /// Build from config, creating the appropriate provider.
    pub fn from_config(config: &gist_core::Config) -> Result<Self, SummarizeError> {
        let provider = crate::providers::create_provider(config)?;
        Ok(Self::new(
            provider,
            config.summarizer.chunk_max_chars,
            config.summarizer.max_new_tokens,
        ))
    }

    /// Summarize `text` chunk by chunk. A failure on any chunk aborts the
    /// whole call; no partial result is returned.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let chunks = split_chunks(text, self.chunk_max_chars);
        debug!(
            "Summarizing {} chars in {} chunks",
            text.chars().count(),
            chunks.len()
        );

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            summaries.push(self.provider.summarize(chunk, self.max_new_tokens).await?);
        }

        Ok(summaries.join(" "))
    }
}
