use async_trait::async_trait;

use crate::domain::synthesis::SynthesisOutcome;

/// Capability for synthesizing speech from narration text.
/// Abstracts the underlying TTS backend (Google Cloud TTS, ElevenLabs, or
/// their deterministic simulations).
///
/// Implementations are responsible for:
/// - Provider-specific voice selection
/// - Falling back to the simulated variant when the backend cannot answer
/// - Estimating audio duration from character count
#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Synthesize speech for text in the given TTS locale
    ///
    /// Returns an outcome whose `audio_payload` is base64-encoded audio
    async fn synthesize(&self, text: &str, locale: &str) -> SynthesisOutcome;
}
