use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::simulated_provider::SimulatedGoogleTts;
use super::synthesis_provider::SynthesisProvider;
use super::{GoogleAuth, ProviderCallError};
use crate::domain::costs::pricing::{operation_cost, Operation};
use crate::domain::costs::ProviderId;
use crate::domain::synthesis::{voice, SynthesisOutcome};

const TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Audio duration estimate for the Google voice family
pub const SECONDS_PER_CHAR: f64 = 0.05;

/// Google Cloud TTS implementation of the synthesis capability
pub struct GoogleTtsProvider {
    auth: GoogleAuth,
    http: reqwest::Client,
    simulator: SimulatedGoogleTts,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

impl GoogleTtsProvider {
    pub fn new(auth: GoogleAuth) -> Self {
        Self {
            auth,
            http: reqwest::Client::new(),
            simulator: SimulatedGoogleTts::new(),
        }
    }

    /// Call the TTS API for a single text, returns base64 audio
    async fn request_synthesis(
        &self,
        text: &str,
        locale: &str,
        voice_name: &str,
    ) -> Result<String, ProviderCallError> {
        let payload = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": locale,
                "name": voice_name,
                "ssmlGender": "NEUTRAL",
            },
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": 1.0,
                "pitch": 0.0,
            },
        });

        let request = self.http.post(TTS_URL).json(&payload);
        let request = self.auth.authorize(request).await?;

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderCallError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| ProviderCallError::MalformedResponse(e.to_string()))?;

        Ok(parsed.audio_content)
    }
}

#[async_trait]
impl SynthesisProvider for GoogleTtsProvider {
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome {
        if !self.auth.is_configured() {
            tracing::debug!(
                locale,
                "No Google credentials configured, using simulated synthesis"
            );
            return self.simulator.outcome(text, locale);
        }

        let voice_name = voice::voice_for_locale(locale);
        let start_time = std::time::Instant::now();

        match self.request_synthesis(text, locale, &voice_name).await {
            Ok(audio_payload) => {
                let character_count = text.chars().count();

                tracing::info!(
                    provider = "google_tts",
                    locale,
                    voice = %voice_name,
                    characters_count = character_count,
                    audio_size_bytes = audio_payload.len(),
                    latency_ms = start_time.elapsed().as_millis() as u64,
                    "TTS synthesis completed"
                );

                SynthesisOutcome {
                    succeeded: true,
                    audio_payload,
                    estimated_duration_seconds: character_count as f64 * SECONDS_PER_CHAR,
                    character_count,
                    language_code: locale.to_string(),
                    voice_identifier: voice_name,
                    cost_estimate: operation_cost(
                        character_count,
                        ProviderId::GoogleCloud,
                        Operation::Synthesize,
                    ),
                    is_simulated: false,
                    error_detail: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    provider = "google_tts",
                    locale,
                    error = %err,
                    "TTS backend failed, substituting simulated outcome"
                );
                self.simulator.outcome(text, locale)
            }
        }
    }
}
