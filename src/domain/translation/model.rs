use serde::{Deserialize, Serialize};

/// Outcome of one translate invocation for one target language.
/// Recomputed on every call, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcome {
    pub succeeded: bool,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub character_count: usize,
    /// Fixed per-variant constant, not derived from the backend response
    pub confidence: f32,
    pub cost_estimate: f64,
    pub is_simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}
