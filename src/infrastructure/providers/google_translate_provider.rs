use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::simulated_provider::SimulatedTranslator;
use super::translation_provider::TranslationProvider;
use super::{GoogleAuth, ProviderCallError};
use crate::domain::costs::pricing::{operation_cost, Operation};
use crate::domain::costs::ProviderId;
use crate::domain::translation::TranslationOutcome;

const TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";
const REAL_CONFIDENCE: f32 = 0.98;

/// Google Cloud Translation implementation of the translation capability.
/// Any failed call substitutes the simulated variant's outcome instead of
/// surfacing an error to the pipeline.
pub struct GoogleTranslateProvider {
    auth: GoogleAuth,
    http: reqwest::Client,
    simulator: SimulatedTranslator,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl GoogleTranslateProvider {
    pub fn new(auth: GoogleAuth) -> Self {
        Self {
            auth,
            http: reqwest::Client::new(),
            simulator: SimulatedTranslator::new(),
        }
    }

    /// Call the Translation API for a single text
    async fn request_translation(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String, ProviderCallError> {
        let payload = json!({
            "q": text,
            "target": target_language,
            "source": source_language,
            "format": "text",
        });

        let request = self.http.post(TRANSLATE_URL).json(&payload);
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

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderCallError::MalformedResponse(e.to_string()))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                ProviderCallError::MalformedResponse("response carried no translations".to_string())
            })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationOutcome {
        if !self.auth.is_configured() {
            tracing::debug!(
                target_language,
                "No Google credentials configured, using simulated translation"
            );
            return self.simulator.outcome(text, target_language, source_language);
        }

        let start_time = std::time::Instant::now();

        match self
            .request_translation(text, target_language, source_language)
            .await
        {
            Ok(translated_text) => {
                let character_count = text.chars().count();

                tracing::info!(
                    provider = "google_translate",
                    target_language,
                    source_language,
                    characters_count = character_count,
                    latency_ms = start_time.elapsed().as_millis() as u64,
                    "Translation completed"
                );

                TranslationOutcome {
                    succeeded: true,
                    translated_text,
                    source_lang: source_language.to_string(),
                    target_lang: target_language.to_string(),
                    character_count,
                    confidence: REAL_CONFIDENCE,
                    cost_estimate: operation_cost(
                        character_count,
                        ProviderId::GoogleCloud,
                        Operation::Translate,
                    ),
                    is_simulated: false,
                    error_detail: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    provider = "google_translate",
                    target_language,
                    error = %err,
                    "Translation backend failed, substituting simulated outcome"
                );
                self.simulator.outcome(text, target_language, source_language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_provider_simulates() {
        let provider = GoogleTranslateProvider::new(GoogleAuth::Unconfigured);
        let outcome = provider.translate("Bom dia", "es", "pt").await;

        assert!(outcome.succeeded);
        assert!(outcome.is_simulated);
        assert_eq!(outcome.translated_text, "[ES] Bom dia");
    }
}
