use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::synthesis::SynthesisOutcome;
use crate::domain::translation::TranslationOutcome;

/// Result of processing one target language through translate + synthesize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageResult {
    pub language: String,
    pub success: bool,
    /// Text handed to synthesis: the translation, or the source text when
    /// translation was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    /// None when the target language equals the source language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<SynthesisOutcome>,
    /// Truncated payload prefix for display; the full payload stays in
    /// `synthesis`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_preview: Option<String>,
    pub audio_duration_seconds: f64,
    pub translate_cost: f64,
    pub tts_cost: f64,
    pub total_cost: f64,
    pub processing_time_seconds: f64,
    pub is_simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LanguageResult {
    /// A failed result for one language; other languages keep processing
    pub fn failure(language: &str, error: impl Into<String>, processing_time_seconds: f64) -> Self {
        Self {
            language: language.to_string(),
            success: false,
            translated_text: None,
            translation: None,
            synthesis: None,
            audio_preview: None,
            audio_duration_seconds: 0.0,
            translate_cost: 0.0,
            tts_cost: 0.0,
            total_cost: 0.0,
            processing_time_seconds,
            is_simulated: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregate result of one pipeline invocation.
/// Owned by the caller once returned, nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub run_id: Uuid,
    pub source_text: String,
    /// Provider identifier exactly as supplied by the caller
    pub provider: String,
    /// One entry per requested language, in request order
    pub languages: Vec<LanguageResult>,
    pub success_count: usize,
    /// Sum over successful languages only
    pub total_cost: f64,
    pub total_time_seconds: f64,
}
