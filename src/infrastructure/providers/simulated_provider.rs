//! Deterministic provider simulations.
//!
//! Used directly when no credentials are configured and as the substitute
//! result whenever a real backend call fails. Outcomes carry the same cost
//! estimates as their real counterparts.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::synthesis_provider::SynthesisProvider;
use super::translation_provider::TranslationProvider;
use crate::domain::costs::pricing::{operation_cost, Operation};
use crate::domain::costs::ProviderId;
use crate::domain::synthesis::{voice, SynthesisOutcome};
use crate::domain::translation::TranslationOutcome;

const SIMULATED_CONFIDENCE: f32 = 0.95;
const SIMULATED_ELEVENLABS_VOICE: &str = "demo_voice";

/// Deterministic translation stand-in: prefixes the text with the
/// upper-cased target language tag
#[derive(Debug, Default, Clone)]
pub struct SimulatedTranslator;

impl SimulatedTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form shared by the trait impl and the real provider's
    /// fallback path
    pub fn outcome(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationOutcome {
        let character_count = text.chars().count();

        TranslationOutcome {
            succeeded: true,
            translated_text: format!("[{}] {}", target_language.to_uppercase(), text),
            source_lang: source_language.to_string(),
            target_lang: target_language.to_string(),
            character_count,
            confidence: SIMULATED_CONFIDENCE,
            cost_estimate: operation_cost(
                character_count,
                ProviderId::GoogleCloud,
                Operation::Translate,
            ),
            is_simulated: true,
            error_detail: None,
        }
    }
}

#[async_trait]
impl TranslationProvider for SimulatedTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationOutcome {
        self.outcome(text, target_language, source_language)
    }
}

/// Deterministic stand-in for Google Cloud TTS
#[derive(Debug, Default, Clone)]
pub struct SimulatedGoogleTts;

impl SimulatedGoogleTts {
    pub fn new() -> Self {
        Self
    }

    pub fn outcome(&self, text: &str, locale: &str) -> SynthesisOutcome {
        let character_count = text.chars().count();
        let payload = format!("AUDIO_DATA_FOR_{}_{}_CHARS", locale, character_count);

        SynthesisOutcome {
            succeeded: true,
            audio_payload: BASE64.encode(payload.as_bytes()),
            estimated_duration_seconds: character_count as f64
                * super::google_tts_provider::SECONDS_PER_CHAR,
            character_count,
            language_code: locale.to_string(),
            voice_identifier: voice::voice_for_locale(locale),
            cost_estimate: operation_cost(
                character_count,
                ProviderId::GoogleCloud,
                Operation::Synthesize,
            ),
            is_simulated: true,
            error_detail: None,
        }
    }
}

#[async_trait]
impl SynthesisProvider for SimulatedGoogleTts {
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome {
        self.outcome(text, locale)
    }
}

/// Deterministic stand-in for ElevenLabs
#[derive(Debug, Default, Clone)]
pub struct SimulatedElevenLabsTts;

impl SimulatedElevenLabsTts {
    pub fn new() -> Self {
        Self
    }

    pub fn outcome(&self, text: &str, locale: &str) -> SynthesisOutcome {
        let character_count = text.chars().count();
        let payload = format!("ELEVENLABS_AUDIO_{}_CHARS", character_count);

        SynthesisOutcome {
            succeeded: true,
            audio_payload: BASE64.encode(payload.as_bytes()),
            estimated_duration_seconds: character_count as f64
                * super::elevenlabs_tts_provider::SECONDS_PER_CHAR,
            character_count,
            language_code: locale.to_string(),
            voice_identifier: SIMULATED_ELEVENLABS_VOICE.to_string(),
            cost_estimate: operation_cost(
                character_count,
                ProviderId::ElevenLabs,
                Operation::Synthesize,
            ),
            is_simulated: true,
            error_detail: None,
        }
    }
}

#[async_trait]
impl SynthesisProvider for SimulatedElevenLabsTts {
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome {
        self.outcome(text, locale)
    }
}
