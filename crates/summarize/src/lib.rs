pub mod chunker;
pub mod provider;
pub mod providers;
pub mod summarizer;

pub use provider::{SummarizeError, SummaryProvider};
pub use summarizer::Summarizer;
