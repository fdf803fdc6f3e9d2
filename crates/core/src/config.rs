use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
    pub huggingface: HuggingFaceConfig,
    pub ollama: OllamaConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            summarizer: SummarizerConfig::from_env(),
            huggingface: HuggingFaceConfig::from_env(),
            ollama: OllamaConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:      {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  summarizer:  provider={}, chunk_max_chars={}, max_new_tokens={}",
            self.summarizer.provider,
            self.summarizer.chunk_max_chars,
            self.summarizer.max_new_tokens
        );
        tracing::info!(
            "  huggingface: model={}, token={}",
            self.huggingface.model,
            if self.huggingface.api_token.is_some() { "set" } else { "(none)" }
        );
        tracing::info!("  ollama:      url={}, model={}", self.ollama.url, self.ollama.model);
    }

    /// Return a redacted view safe for logs and debugging (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "server": { "host": self.server.host, "port": self.server.port },
            "summarizer": {
                "provider": self.summarizer.provider,
                "chunk_max_chars": self.summarizer.chunk_max_chars,
                "max_new_tokens": self.summarizer.max_new_tokens,
            },
            "huggingface": {
                "api_url": self.huggingface.api_url,
                "model": self.huggingface.model,
                "token_set": self.huggingface.api_token.is_some(),
            },
            "ollama": { "url": self.ollama.url, "model": self.ollama.model },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 8080),
        }
    }
}

// ── Summarizer ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// "huggingface" or "ollama"
    pub provider: String,
    /// Maximum characters per input chunk.
    pub chunk_max_chars: usize,
    /// Maximum new tokens generated per chunk summary.
    pub max_new_tokens: u32,
}

impl SummarizerConfig {
    fn from_env() -> Self {
        Self {
            provider: env_or("SUMMARY_PROVIDER", "huggingface"),
            chunk_max_chars: env_usize("CHUNK_MAX_CHARS", 1024).max(1),
            max_new_tokens: env_u32("SUMMARY_MAX_NEW_TOKENS", 200),
        }
    }
}

// ── Hugging Face inference API ────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    pub api_url: String,
    pub model: String,
    pub api_token: Option<String>,
}

impl HuggingFaceConfig {
    fn from_env() -> Self {
        Self {
            api_url: env_or("HF_API_URL", "https://api-inference.huggingface.co"),
            model: env_or("HF_MODEL", "facebook/bart-large-cnn"),
            api_token: env_opt("HF_API_TOKEN"),
        }
    }
}

// ── Ollama (local models) ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub url: String,
    pub model: String,
}

impl OllamaConfig {
    fn from_env() -> Self {
        Self {
            url: env_or("OLLAMA_URL", "http://localhost:11434"),
            model: env_or("OLLAMA_MODEL", "llama3.2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Note: assumes the test environment does not set these vars.
        let config = Config::from_env();
        assert_eq!(config.summarizer.chunk_max_chars, 1024);
        assert_eq!(config.summarizer.max_new_tokens, 200);
        assert_eq!(config.summarizer.provider, "huggingface");
        assert_eq!(config.huggingface.model, "facebook/bart-large-cnn");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn redacted_summary_hides_token() {
        let mut config = Config::from_env();
        config.huggingface.api_token = Some("secret".to_string());
        let summary = config.redacted_summary().to_string();
        assert!(!summary.contains("secret"));
        assert!(summary.contains("\"token_set\":true"));
    }
}
