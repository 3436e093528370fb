//! Shared fixtures and provider doubles for the integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use polyvoice::domain::costs::ProviderId;
use polyvoice::domain::synthesis::SynthesisOutcome;
use polyvoice::domain::translation::TranslationOutcome;
use polyvoice::infrastructure::config::Config;
use polyvoice::infrastructure::providers::{
    ProviderRegistry, SimulatedGoogleTts, SimulatedTranslator, SynthesisProvider,
    TranslationProvider,
};
use polyvoice::PipelineService;

/// A pipeline wired to the real registry with no credentials configured,
/// every backend runs in simulation mode
pub fn simulated_pipeline() -> PipelineService {
    PipelineService::from_config(&Config::simulation_only())
}

/// A pipeline with an explicitly assembled registry, for fault injection
pub fn pipeline_with(
    translator: Arc<dyn TranslationProvider>,
    synthesizers: HashMap<ProviderId, Arc<dyn SynthesisProvider>>,
) -> PipelineService {
    PipelineService::new(
        Arc::new(ProviderRegistry::new(translator, synthesizers)),
        "pt".to_string(),
    )
}

pub fn simulated_synthesizers() -> HashMap<ProviderId, Arc<dyn SynthesisProvider>> {
    let mut map: HashMap<ProviderId, Arc<dyn SynthesisProvider>> = HashMap::new();
    map.insert(ProviderId::GoogleCloud, Arc::new(SimulatedGoogleTts::new()));
    map
}

/// Synthesizer double that fails for one locale and delegates to the
/// simulation for every other
pub struct SelectiveFailingSynthesizer {
    pub failing_locale: String,
    inner: SimulatedGoogleTts,
}

impl SelectiveFailingSynthesizer {
    pub fn failing_for(locale: &str) -> Self {
        Self {
            failing_locale: locale.to_string(),
            inner: SimulatedGoogleTts::new(),
        }
    }
}

#[async_trait]
impl SynthesisProvider for SelectiveFailingSynthesizer {
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome {
        if locale == self.failing_locale {
            return SynthesisOutcome {
                succeeded: false,
                audio_payload: String::new(),
                estimated_duration_seconds: 0.0,
                character_count: text.chars().count(),
                language_code: locale.to_string(),
                voice_identifier: String::new(),
                cost_estimate: 0.0,
                is_simulated: false,
                error_detail: Some("injected synthesis failure".to_string()),
            };
        }
        self.inner.outcome(text, locale)
    }
}

/// Translator double that always reports failure
pub struct FailingTranslator;

#[async_trait]
impl TranslationProvider for FailingTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationOutcome {
        TranslationOutcome {
            succeeded: false,
            translated_text: String::new(),
            source_lang: source_language.to_string(),
            target_lang: target_language.to_string(),
            character_count: text.chars().count(),
            confidence: 0.0,
            cost_estimate: 0.0,
            is_simulated: false,
            error_detail: Some("injected translation failure".to_string()),
        }
    }
}

/// Working translator for fault-injection registries
pub fn simulated_translator() -> Arc<dyn TranslationProvider> {
    Arc::new(SimulatedTranslator::new())
}
