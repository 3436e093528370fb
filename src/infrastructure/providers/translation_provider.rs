use async_trait::async_trait;

use crate::domain::translation::TranslationOutcome;

/// Capability for translating narration text into a target language.
/// Abstracts the underlying backend (Google Cloud Translation or the
/// deterministic simulation used when no credentials are configured).
///
/// Implementations always yield an outcome: a real backend that cannot
/// answer substitutes its simulated sibling's result and marks it as such.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate text into `target_language`
    ///
    /// # Arguments
    /// * `text` - Non-empty source text
    /// * `target_language` - Two-letter target language code
    /// * `source_language` - Two-letter source language code
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> TranslationOutcome;
}
