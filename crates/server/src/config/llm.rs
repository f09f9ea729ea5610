use serde::Deserialize;

use aeval_llm::LlmConfig;

/// Configuration for the language model used to classify requests.
///
/// The API key is usually supplied through `AEVAL_API_KEY` rather than the
/// config file.
#[derive(Debug, Deserialize)]
pub struct LlmServerConfig {
    /// OpenAI-compatible chat completions endpoint.
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    /// Model to use.
    #[serde(default = "default_llm_model")]
    pub model: String,
    /// API key for authentication.
    #[serde(default)]
    pub api_key: String,
    /// Temperature for LLM sampling.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens in the response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds. Unset means the HTTP client default.
    pub timeout_seconds: Option<u64>,
}

impl Default for LlmServerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            model: default_llm_model(),
            api_key: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: None,
        }
    }
}

impl LlmServerConfig {
    /// Client configuration for [`aeval_llm::HttpLlmClient`].
    pub fn client_config(&self) -> LlmConfig {
        let config = LlmConfig::new(&self.endpoint, &self.model, &self.api_key)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);
        match self.timeout_seconds {
            Some(seconds) => config.with_timeout(seconds),
            None => config,
        }
    }
}

fn default_llm_endpoint() -> String {
    "https://api.z.ai/api/paas/v4/chat/completions".to_owned()
}

fn default_llm_model() -> String {
    "glm-4.7".to_owned()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}
