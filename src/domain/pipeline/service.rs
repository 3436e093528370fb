use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use uuid::Uuid;

use super::error::PipelineError;
use super::model::{LanguageResult, PipelineRun};
use crate::domain::costs::ProviderId;
use crate::domain::synthesis::voice;
use crate::infrastructure::config::Config;
use crate::infrastructure::providers::ProviderRegistry;

const AUDIO_PREVIEW_CHARS: usize = 100;

pub struct PipelineService {
    registry: Arc<ProviderRegistry>,
    source_language: String,
}

impl PipelineService {
    pub fn new(registry: Arc<ProviderRegistry>, source_language: String) -> Self {
        Self {
            registry,
            source_language,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ProviderRegistry::from_config(config)),
            config.source_language.clone(),
        )
    }
}

#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Process one narration script into every target language
    ///
    /// This operation:
    /// - Translates the source text per language (skipped for the source
    ///   language itself)
    /// - Synthesizes speech with the backend selected by `provider_id`
    /// - Aggregates per-language costs and timings
    ///
    /// One language failing never aborts the remaining languages. Empty text
    /// or an empty language list is a caller error and fails fast.
    async fn process(
        &self,
        source_text: &str,
        target_languages: &[String],
        provider_id: &str,
    ) -> Result<PipelineRun, PipelineError>;
}

#[async_trait]
impl PipelineApi for PipelineService {
    async fn process(
        &self,
        source_text: &str,
        target_languages: &[String],
        provider_id: &str,
    ) -> Result<PipelineRun, PipelineError> {
        if source_text.trim().is_empty() {
            return Err(PipelineError::Invalid(
                "source text must not be empty".to_string(),
            ));
        }
        if target_languages.is_empty() {
            return Err(PipelineError::Invalid(
                "at least one target language is required".to_string(),
            ));
        }

        let run_id = Uuid::new_v4();
        tracing::info!(
            run_id = %run_id,
            provider = provider_id,
            language_count = target_languages.len(),
            text_length = source_text.len(),
            "Pipeline run started"
        );

        let start_time = Instant::now();
        let mut languages = Vec::with_capacity(target_languages.len());
        let mut success_count = 0;
        let mut total_cost = 0.0;

        for language in target_languages {
            let result = self
                .process_language(run_id, source_text, language, provider_id)
                .await;

            if result.success {
                success_count += 1;
                total_cost += result.total_cost;
            }

            languages.push(result);
        }

        let total_time_seconds = start_time.elapsed().as_secs_f64();

        tracing::info!(
            run_id = %run_id,
            success_count,
            language_count = languages.len(),
            total_cost,
            total_time_seconds,
            "Pipeline run completed"
        );

        Ok(PipelineRun {
            run_id,
            source_text: source_text.to_string(),
            provider: provider_id.to_string(),
            languages,
            success_count,
            total_cost,
            total_time_seconds,
        })
    }
}

impl PipelineService {
    /// Run translate + synthesize for a single language.
    /// Failures are converted into a failed result so the caller's loop can
    /// keep going.
    async fn process_language(
        &self,
        run_id: Uuid,
        source_text: &str,
        language: &str,
        provider_id: &str,
    ) -> LanguageResult {
        let start_time = Instant::now();
        let locale = voice::locale_for_language(language);

        // 1. Translate, unless the target is already the source language
        let (translation, translated_text, translate_cost) =
            if language == self.source_language {
                (None, source_text.to_string(), 0.0)
            } else {
                let outcome = self
                    .registry
                    .translator()
                    .translate(source_text, language, &self.source_language)
                    .await;

                if !outcome.succeeded {
                    tracing::warn!(
                        run_id = %run_id,
                        language,
                        error = outcome.error_detail.as_deref().unwrap_or("unknown"),
                        "Translation step failed"
                    );
                    return LanguageResult::failure(
                        language,
                        "Translation failed",
                        start_time.elapsed().as_secs_f64(),
                    );
                }

                let text = outcome.translated_text.clone();
                let cost = outcome.cost_estimate;
                (Some(outcome), text, cost)
            };

        // 2. Select the synthesis backend for the requested provider
        let synthesizer = match ProviderId::parse(provider_id)
            .and_then(|id| self.registry.synthesizer(id))
        {
            Some(synthesizer) => synthesizer,
            None => {
                tracing::warn!(run_id = %run_id, language, provider = provider_id, "Unsupported provider");
                return LanguageResult::failure(
                    language,
                    format!("Provider {} not supported", provider_id),
                    start_time.elapsed().as_secs_f64(),
                );
            }
        };

        // 3. Synthesize the translated text
        let synthesis = synthesizer.synthesize(&translated_text, &locale).await;
        if !synthesis.succeeded {
            tracing::warn!(
                run_id = %run_id,
                language,
                error = synthesis.error_detail.as_deref().unwrap_or("unknown"),
                "Synthesis step failed"
            );
            return LanguageResult::failure(
                language,
                "TTS failed",
                start_time.elapsed().as_secs_f64(),
            );
        }

        let tts_cost = synthesis.cost_estimate;
        let total_cost = translate_cost + tts_cost;
        let processing_time_seconds = start_time.elapsed().as_secs_f64();

        tracing::info!(
            run_id = %run_id,
            language,
            locale = %locale,
            simulated = synthesis.is_simulated,
            translate_cost,
            tts_cost,
            processing_time_seconds,
            "Language processed"
        );

        LanguageResult {
            language: language.to_string(),
            success: true,
            audio_preview: Some(audio_preview(&synthesis.audio_payload)),
            audio_duration_seconds: synthesis.estimated_duration_seconds,
            is_simulated: synthesis.is_simulated,
            translated_text: Some(translated_text),
            translation,
            synthesis: Some(synthesis),
            translate_cost,
            tts_cost,
            total_cost,
            processing_time_seconds,
            error: None,
        }
    }
}

/// Truncate the payload to a fixed display prefix, the full payload stays on
/// the synthesis outcome
fn audio_preview(payload: &str) -> String {
    if payload.chars().count() > AUDIO_PREVIEW_CHARS {
        let prefix: String = payload.chars().take(AUDIO_PREVIEW_CHARS).collect();
        format!("{}...", prefix)
    } else {
        payload.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_audio_preview_truncates_long_payloads() {
        let payload = "A".repeat(250);
        let preview = audio_preview(&payload);
        assert_eq!(preview.len(), AUDIO_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_audio_preview_keeps_short_payloads_intact() {
        assert_eq!(audio_preview("short"), "short");
    }
}
