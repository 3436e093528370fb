use serde::{Deserialize, Serialize};

/// Identifiers for the narration providers the system can compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "elevenlabs")]
    ElevenLabs,
    #[serde(rename = "google_cloud")]
    GoogleCloud,
    #[serde(rename = "openai")]
    OpenAi,
}

impl ProviderId {
    /// Get the provider identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::ElevenLabs => "elevenlabs",
            ProviderId::GoogleCloud => "google_cloud",
            ProviderId::OpenAi => "openai",
        }
    }

    /// Parse a provider identifier from its string form
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "elevenlabs" => Some(ProviderId::ElevenLabs),
            "google_cloud" => Some(ProviderId::GoogleCloud),
            "openai" => Some(ProviderId::OpenAi),
            _ => None,
        }
    }

    /// All providers with a pricing profile, in comparison order
    pub fn all() -> [ProviderId; 3] {
        [
            ProviderId::ElevenLabs,
            ProviderId::GoogleCloud,
            ProviderId::OpenAi,
        ]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static pricing and quality metadata for one provider.
/// Read-only after initialization, costs are in BRL per character.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderProfile {
    pub display_name: &'static str,
    pub tts_cost_per_char: f64,
    pub translate_cost_per_char: f64,
    /// Subjective quality score, 0-100
    pub quality_score: u8,
    /// Typical synthesis latency
    pub latency_ms: u32,
}

/// Workload parameters for the monthly cost projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    pub videos_per_day: u32,
    pub target_languages: Vec<String>,
    pub avg_chars_per_video: u32,
    pub current_provider: ProviderId,
    pub target_provider: ProviderId,
}

impl WorkloadConfig {
    /// Build a workload config, deduplicating the language list while
    /// preserving first-occurrence order
    pub fn new(
        videos_per_day: u32,
        target_languages: Vec<String>,
        avg_chars_per_video: u32,
        current_provider: ProviderId,
        target_provider: ProviderId,
    ) -> Self {
        Self {
            videos_per_day,
            target_languages: dedup_preserving_order(target_languages),
            avg_chars_per_video,
            current_provider,
            target_provider,
        }
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            videos_per_day: 200,
            target_languages: vec!["en".to_string(), "es".to_string(), "fr".to_string()],
            avg_chars_per_video: 1000,
            current_provider: ProviderId::ElevenLabs,
            target_provider: ProviderId::GoogleCloud,
        }
    }
}

fn dedup_preserving_order(languages: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    languages
        .into_iter()
        .filter(|lang| seen.insert(lang.clone()))
        .collect()
}

/// Projected monthly cost for one provider under a given workload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostProjection {
    pub display_name: String,
    pub tts_cost: f64,
    pub translate_cost: f64,
    pub total_cost: f64,
    pub cost_per_video: f64,
    pub quality_score: u8,
    pub latency_ms: u32,
}

/// Monthly savings when migrating from one provider to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationSavings {
    pub current_provider: ProviderId,
    pub target_provider: ProviderId,
    pub monthly_savings: f64,
    pub savings_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_id_round_trips_through_strings() {
        for provider in ProviderId::all() {
            assert_eq!(ProviderId::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn test_provider_id_rejects_unknown_identifiers() {
        assert_eq!(ProviderId::parse("azure"), None);
        assert_eq!(ProviderId::parse(""), None);
        assert_eq!(ProviderId::parse("ElevenLabs"), None);
    }

    #[test]
    fn test_workload_config_deduplicates_languages_in_order() {
        let config = WorkloadConfig::new(
            10,
            vec![
                "en".to_string(),
                "es".to_string(),
                "en".to_string(),
                "fr".to_string(),
                "es".to_string(),
            ],
            500,
            ProviderId::ElevenLabs,
            ProviderId::GoogleCloud,
        );
        assert_eq!(config.target_languages, vec!["en", "es", "fr"]);
    }

    #[test]
    fn test_workload_config_defaults() {
        let config = WorkloadConfig::default();
        assert_eq!(config.videos_per_day, 200);
        assert_eq!(config.avg_chars_per_video, 1000);
        assert_eq!(config.target_languages, vec!["en", "es", "fr"]);
        assert_eq!(config.current_provider, ProviderId::ElevenLabs);
        assert_eq!(config.target_provider, ProviderId::GoogleCloud);
    }
}
