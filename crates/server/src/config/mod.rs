mod catalog;
mod llm;
mod server;


pub use catalog::*;
pub use llm::*;
pub use server::*;

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::ServerError;

/// Top-level configuration for the AEval server, loaded from a TOML file and
/// then overridden from the environment.
#[derive(Debug, Default, Deserialize)]
pub struct AevalConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Language model configuration.
    #[serde(default)]
    pub llm: LlmServerConfig,
    /// Catalog data location.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AevalConfig {
    /// Read `path` if it exists, otherwise start from defaults, then apply
    /// `AEVAL_*` overrides and validate.
    ///
    /// Overrides come from the process environment, falling back to a `.env`
    /// file in the working directory when one exists.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        Self::load_with_env_file(path, Path::new(".env"))
    }

    /// [`load`](Self::load) with an explicit dotenv file location.
    pub fn load_with_env_file(path: &Path, env_file: &Path) -> Result<Self, ServerError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)?
        } else {
            Self::default()
        };
        let dotenv = read_env_file(env_file)?;
        config.apply_overrides(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| dotenv.get(key).cloned())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ServerError> {
        toml::from_str(contents).map_err(|e| ServerError::Config(format!("invalid config: {e}")))
    }

    /// Apply overrides looked up by variable name.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ServerError> {
        if let Some(v) = lookup("AEVAL_API_KEY") {
            self.llm.api_key = v;
        }
        if let Some(v) = lookup("AEVAL_MODEL") {
            self.llm.model = v;
        }
        if let Some(v) = lookup("AEVAL_LLM_ENDPOINT") {
            self.llm.endpoint = v;
        }
        if let Some(v) = lookup("AEVAL_TEMPERATURE") {
            self.llm.temperature = parse_var("AEVAL_TEMPERATURE", &v)?;
        }
        if let Some(v) = lookup("AEVAL_MAX_TOKENS") {
            self.llm.max_tokens = parse_var("AEVAL_MAX_TOKENS", &v)?;
        }
        if let Some(v) = lookup("AEVAL_LLM_TIMEOUT_SECONDS") {
            self.llm.timeout_seconds = Some(parse_var("AEVAL_LLM_TIMEOUT_SECONDS", &v)?);
        }
        if let Some(v) = lookup("AEVAL_DATA_DIR") {
            self.catalog.data_dir = v;
        }
        if let Some(v) = lookup("AEVAL_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("AEVAL_PORT") {
            self.server.port = parse_var("AEVAL_PORT", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(ServerError::Config(
                "an LLM API key is required (set AEVAL_API_KEY or llm.api_key)".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ServerError::Config(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.max_tokens == 0 {
            return Err(ServerError::Config(
                "llm.max_tokens must be greater than zero".into(),
            ));
        }
        self.cors.origin_headers()?;
        Ok(())
    }
}

impl CorsConfig {
    /// Allowed origins as header values.
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ServerError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    ServerError::Config(format!("invalid CORS origin {origin:?}: {e}"))
                })
            })
            .collect()
    }
}

/// Variables from a dotenv file. A missing file yields none.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ServerError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ServerError::Config(format!("cannot read {}: {e}", path.display())))?;
    entries
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(|e| ServerError::Config(format!("invalid entry in {}: {e}", path.display())))
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid value for {name}: {e}")))
}
