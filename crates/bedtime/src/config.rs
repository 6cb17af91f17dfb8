use std::time::Duration;

use crate::error::Error;
use crate::gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Connection settings for the Gemini API.
///
/// Every setting can come from the command line or the environment. The API
/// key is only ever read from `GEMINI_API_KEY` or `--api-key`.
#[derive(Debug, Clone, clap::Args)]
pub struct GeminiOptions {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used to write the story
    #[arg(long, env = "BEDTIME_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "BEDTIME_TIMEOUT", default_value = "120")]
    pub timeout: u64,
}

impl GeminiOptions {
    /// Build a client, failing before any request is made if the key is missing.
    pub fn client(&self) -> Result<GeminiClient, Error> {
        if self.timeout == 0 {
            return Err(Error::Config("timeout must be at least one second".into()));
        }

        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        Ok(GeminiClient::new(api_key)?
            .with_base_url(&self.gemini_url)
            .with_model(&self.model)
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}
