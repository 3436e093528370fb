use std::collections::HashMap;
use std::sync::Arc;

use super::elevenlabs_tts_provider::ElevenLabsTtsProvider;
use super::google_translate_provider::GoogleTranslateProvider;
use super::google_tts_provider::GoogleTtsProvider;
use super::synthesis_provider::SynthesisProvider;
use super::translation_provider::TranslationProvider;
use crate::domain::costs::ProviderId;
use crate::infrastructure::config::Config;

/// Explicit provider_id to backend mapping used by the pipeline.
/// Translation always goes through the Google backend; synthesis is selected
/// per run. Providers without a synthesis backend (openai) are simply absent
/// from the map and surface as unsupported.
pub struct ProviderRegistry {
    translator: Arc<dyn TranslationProvider>,
    synthesizers: HashMap<ProviderId, Arc<dyn SynthesisProvider>>,
}

impl ProviderRegistry {
    pub fn new(
        translator: Arc<dyn TranslationProvider>,
        synthesizers: HashMap<ProviderId, Arc<dyn SynthesisProvider>>,
    ) -> Self {
        Self {
            translator,
            synthesizers,
        }
    }

    /// Wire up the real backends from configuration.
    /// Both Google backends share one auth handle and thus one token cache.
    pub fn from_config(config: &Config) -> Self {
        let google_auth = super::GoogleAuth::from_config(config);

        let mut synthesizers: HashMap<ProviderId, Arc<dyn SynthesisProvider>> = HashMap::new();
        synthesizers.insert(
            ProviderId::GoogleCloud,
            Arc::new(GoogleTtsProvider::new(google_auth.clone())),
        );
        synthesizers.insert(
            ProviderId::ElevenLabs,
            Arc::new(ElevenLabsTtsProvider::from_config(config)),
        );

        tracing::info!(
            google_configured = config.google_configured(),
            elevenlabs_configured = config.elevenlabs_configured(),
            "Provider registry initialized"
        );

        Self {
            translator: Arc::new(GoogleTranslateProvider::new(google_auth)),
            synthesizers,
        }
    }

    pub fn translator(&self) -> Arc<dyn TranslationProvider> {
        self.translator.clone()
    }

    pub fn synthesizer(&self, provider: ProviderId) -> Option<Arc<dyn SynthesisProvider>> {
        self.synthesizers.get(&provider).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_maps_synthesis_backends() {
        let registry = ProviderRegistry::from_config(&Config::simulation_only());
        assert!(registry.synthesizer(ProviderId::GoogleCloud).is_some());
        assert!(registry.synthesizer(ProviderId::ElevenLabs).is_some());
        assert!(registry.synthesizer(ProviderId::OpenAi).is_none());
    }
}
