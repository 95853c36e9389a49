use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub completion_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub debug: bool,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            completion_url: env::var("COHERE_API_URL")
                .unwrap_or_else(|_| "https://api.cohere.ai".into()),
            api_key: env::var("COHERE_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("COHERE_MODEL").unwrap_or_else(|_| "command-r-plus".into()),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
            max_tokens: env::var("MAX_TOKENS")
                .unwrap_or_else(|_| "1024".into())
                .parse()
                .unwrap_or(1024),
            temperature: env::var("TEMPERATURE")
                .unwrap_or_else(|_| "0.9".into())
                .parse()
                .unwrap_or(0.9),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),
        }
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/v1/chat", self.completion_url.trim_end_matches('/'))
    }
}
