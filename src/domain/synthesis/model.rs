use serde::{Deserialize, Serialize};

/// Outcome of one speech synthesis invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisOutcome {
    pub succeeded: bool,
    /// Base64-encoded audio bytes as returned by the backend
    pub audio_payload: String,
    /// Always an estimate from character count, never measured from audio
    pub estimated_duration_seconds: f64,
    pub character_count: usize,
    pub language_code: String,
    pub voice_identifier: String,
    pub cost_estimate: f64,
    pub is_simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}
