pub mod elevenlabs_tts_provider;
pub mod google_translate_provider;
pub mod google_tts_provider;
pub mod registry;
pub mod simulated_provider;
pub mod synthesis_provider;
pub mod translation_provider;

use std::sync::Arc;

pub use elevenlabs_tts_provider::ElevenLabsTtsProvider;
pub use google_translate_provider::GoogleTranslateProvider;
pub use google_tts_provider::GoogleTtsProvider;
pub use registry::ProviderRegistry;
pub use simulated_provider::{SimulatedElevenLabsTts, SimulatedGoogleTts, SimulatedTranslator};
pub use synthesis_provider::SynthesisProvider;
pub use translation_provider::TranslationProvider;

use crate::infrastructure::auth::TokenProvider;
use crate::infrastructure::config::Config;

/// Failure of a single call against a real backend.
/// Callers substitute the simulated variant's outcome instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum ProviderCallError {
    #[error("credentials not configured")]
    MissingCredentials,
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Authentication mode for the Google backends.
/// Clones share one token provider, the cache stays process-wide.
#[derive(Clone)]
pub enum GoogleAuth {
    ServiceAccount(Arc<TokenProvider>),
    ApiKey(String),
    Unconfigured,
}

impl GoogleAuth {
    /// Resolve the auth mode from configuration, preferring the service account
    pub fn from_config(config: &Config) -> Self {
        if let Some(json) = &config.google_service_account_json {
            match TokenProvider::from_json(json) {
                Ok(provider) => return GoogleAuth::ServiceAccount(Arc::new(provider)),
                Err(err) => {
                    tracing::warn!(error = %err, "Service account credentials unusable");
                }
            }
        }
        match &config.google_api_key {
            Some(key) => GoogleAuth::ApiKey(key.clone()),
            None => GoogleAuth::Unconfigured,
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, GoogleAuth::Unconfigured)
    }

    /// Attach credentials to an outgoing request
    pub async fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ProviderCallError> {
        match self {
            GoogleAuth::ServiceAccount(tokens) => {
                let token = tokens
                    .bearer_token()
                    .await
                    .map_err(|e| ProviderCallError::Auth(e.to_string()))?;
                Ok(request.bearer_auth(token))
            }
            GoogleAuth::ApiKey(key) => Ok(request.query(&[("key", key.as_str())])),
            GoogleAuth::Unconfigured => Err(ProviderCallError::MissingCredentials),
        }
    }
}
