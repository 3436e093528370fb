use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use super::simulated_provider::SimulatedElevenLabsTts;
use super::synthesis_provider::SynthesisProvider;
use super::ProviderCallError;
use crate::domain::costs::pricing::{operation_cost, Operation};
use crate::domain::costs::ProviderId;
use crate::domain::synthesis::SynthesisOutcome;
use crate::infrastructure::config::Config;

const BASE_URL: &str = "https://api.elevenlabs.io/v1";
const MODEL_ID: &str = "eleven_multilingual_v2";
const VOICE_STABILITY: f64 = 0.5;
const VOICE_SIMILARITY_BOOST: f64 = 0.75;

/// Audio duration estimate for the ElevenLabs voice family
pub const SECONDS_PER_CHAR: f64 = 0.06;

/// ElevenLabs implementation of the synthesis capability.
/// The multilingual voice model handles every target language with one
/// voice id, so the locale only tags the outcome.
pub struct ElevenLabsTtsProvider {
    api_key: Option<String>,
    voice_id: String,
    http: reqwest::Client,
    simulator: SimulatedElevenLabsTts,
}

impl ElevenLabsTtsProvider {
    pub fn new(api_key: Option<String>, voice_id: String) -> Self {
        Self {
            api_key,
            voice_id,
            http: reqwest::Client::new(),
            simulator: SimulatedElevenLabsTts::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.elevenlabs_api_key.clone(),
            config.elevenlabs_voice_id.clone(),
        )
    }

    /// Call the ElevenLabs API, returns raw MP3 bytes
    async fn request_synthesis(&self, text: &str) -> Result<Vec<u8>, ProviderCallError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderCallError::MissingCredentials)?;

        let payload = json!({
            "text": text,
            "model_id": MODEL_ID,
            "voice_settings": {
                "stability": VOICE_STABILITY,
                "similarity_boost": VOICE_SIMILARITY_BOOST,
            },
        });

        let response = self
            .http
            .post(format!("{}/text-to-speech/{}", BASE_URL, self.voice_id))
            .header("xi-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderCallError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SynthesisProvider for ElevenLabsTtsProvider {
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome {
        if self.api_key.is_none() {
            tracing::debug!(
                locale,
                "No ElevenLabs API key configured, using simulated synthesis"
            );
            return self.simulator.outcome(text, locale);
        }

        let start_time = std::time::Instant::now();

        match self.request_synthesis(text).await {
            Ok(audio_bytes) => {
                let character_count = text.chars().count();

                tracing::info!(
                    provider = "elevenlabs",
                    locale,
                    voice_id = %self.voice_id,
                    characters_count = character_count,
                    audio_size_bytes = audio_bytes.len(),
                    latency_ms = start_time.elapsed().as_millis() as u64,
                    "TTS synthesis completed"
                );

                SynthesisOutcome {
                    succeeded: true,
                    audio_payload: BASE64.encode(&audio_bytes),
                    estimated_duration_seconds: character_count as f64 * SECONDS_PER_CHAR,
                    character_count,
                    language_code: locale.to_string(),
                    voice_identifier: self.voice_id.clone(),
                    cost_estimate: operation_cost(
                        character_count,
                        ProviderId::ElevenLabs,
                        Operation::Synthesize,
                    ),
                    is_simulated: false,
                    error_detail: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    provider = "elevenlabs",
                    locale,
                    error = %err,
                    "TTS backend failed, substituting simulated outcome"
                );
                self.simulator.outcome(text, locale)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_provider_simulates() {
        let provider = ElevenLabsTtsProvider::new(None, "21m00Tcm4TlvDq8ikWAM".to_string());
        let outcome = provider.synthesize("hello world", "en-US").await;

        assert!(outcome.succeeded);
        assert!(outcome.is_simulated);
        assert_eq!(outcome.voice_identifier, "demo_voice");
    }
}
