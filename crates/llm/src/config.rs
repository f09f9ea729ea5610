/// Configuration for the HTTP chat completion client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OpenAI-compatible API endpoint (e.g., `https://api.z.ai/api/paas/v4/chat/completions`).
    pub endpoint: String,
    /// Model to use (e.g., `glm-4.7`).
    pub model: String,
    /// API key for authentication.
    pub api_key: String,
    /// Request timeout in seconds. `None` leaves the transport default in place.
    pub timeout_seconds: Option<u64>,
    /// Temperature for LLM sampling.
    pub temperature: f64,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Create a new config with the given endpoint, model, and API key.
    ///
    /// Defaults: no timeout, temperature 0.7, max 2000 tokens.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            timeout_seconds: None,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Set the temperature for LLM sampling.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum tokens in the response.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
