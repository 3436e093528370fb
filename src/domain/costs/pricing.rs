//! Static per-provider pricing table and cost formulas.
//!
//! Rates come from the public pricing pages of each provider, converted from
//! USD to BRL at a fixed exchange rate. Subscription-priced providers carry a
//! per-character estimate derived from the reference workload they bundle.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::model::{ProviderId, ProviderProfile};

/// Fixed USD to BRL conversion applied to all source pricing
pub const USD_BRL_RATE: f64 = 5.2;

/// ElevenLabs Creator plan: $0.30 per 1000 characters
const ELEVENLABS_TTS_PER_CHAR: f64 = 0.30 / 1000.0 * USD_BRL_RATE;

/// Subscription estimate: $120/month over 30 days x 200 videos x 3 languages x 1000 chars
const SUBSCRIPTION_TRANSLATE_PER_CHAR: f64 =
    120.0 / (30.0 * 200.0 * 3.0 * 1000.0) * USD_BRL_RATE;

/// Google Cloud TTS: $4 per million characters
const GOOGLE_TTS_PER_CHAR: f64 = 4.0 / 1_000_000.0 * USD_BRL_RATE;

/// Google Cloud Translation: $20 per million characters
const GOOGLE_TRANSLATE_PER_CHAR: f64 = 20.0 / 1_000_000.0 * USD_BRL_RATE;

/// OpenAI TTS: $15 per million characters
const OPENAI_TTS_PER_CHAR: f64 = 15.0 / 1_000_000.0 * USD_BRL_RATE;

static PROVIDER_PROFILES: Lazy<BTreeMap<ProviderId, ProviderProfile>> = Lazy::new(|| {
    BTreeMap::from([
        (
            ProviderId::ElevenLabs,
            ProviderProfile {
                display_name: "ElevenLabs + OpenAI Translate",
                tts_cost_per_char: ELEVENLABS_TTS_PER_CHAR,
                translate_cost_per_char: SUBSCRIPTION_TRANSLATE_PER_CHAR,
                quality_score: 95,
                latency_ms: 2000,
            },
        ),
        (
            ProviderId::GoogleCloud,
            ProviderProfile {
                display_name: "Google Cloud TTS + Translate",
                tts_cost_per_char: GOOGLE_TTS_PER_CHAR,
                translate_cost_per_char: GOOGLE_TRANSLATE_PER_CHAR,
                quality_score: 80,
                latency_ms: 800,
            },
        ),
        (
            ProviderId::OpenAi,
            ProviderProfile {
                display_name: "OpenAI TTS + Translate",
                tts_cost_per_char: OPENAI_TTS_PER_CHAR,
                translate_cost_per_char: SUBSCRIPTION_TRANSLATE_PER_CHAR,
                quality_score: 85,
                latency_ms: 1500,
            },
        ),
    ])
});

/// Billable operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Translate,
    Synthesize,
}

/// Look up the static profile for a provider
pub fn profile(provider: ProviderId) -> &'static ProviderProfile {
    &PROVIDER_PROFILES[&provider]
}

/// All provider profiles, keyed by identifier
pub fn profiles() -> &'static BTreeMap<ProviderId, ProviderProfile> {
    &PROVIDER_PROFILES
}

/// Cost of one operation, linear in character count
pub fn operation_cost(characters: usize, provider: ProviderId, operation: Operation) -> f64 {
    let profile = profile(provider);
    let rate = match operation {
        Operation::Translate => profile.translate_cost_per_char,
        Operation::Synthesize => profile.tts_cost_per_char,
    };
    characters as f64 * rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_cost_is_linear_in_characters() {
        let one = operation_cost(1, ProviderId::GoogleCloud, Operation::Synthesize);
        let thousand = operation_cost(1000, ProviderId::GoogleCloud, Operation::Synthesize);
        assert!((thousand - one * 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_operation_cost_zero_characters_is_free() {
        for provider in ProviderId::all() {
            assert_eq!(operation_cost(0, provider, Operation::Translate), 0.0);
            assert_eq!(operation_cost(0, provider, Operation::Synthesize), 0.0);
        }
    }

    #[test]
    fn test_google_rates_match_published_pricing() {
        let profile = profile(ProviderId::GoogleCloud);
        assert!((profile.tts_cost_per_char - 4.0 / 1_000_000.0 * USD_BRL_RATE).abs() < 1e-15);
        assert!((profile.translate_cost_per_char - 20.0 / 1_000_000.0 * USD_BRL_RATE).abs() < 1e-15);
    }

    #[test]
    fn test_every_provider_has_a_profile() {
        for provider in ProviderId::all() {
            let profile = profile(provider);
            assert!(!profile.display_name.is_empty());
            assert!(profile.tts_cost_per_char > 0.0);
            assert!(profile.translate_cost_per_char > 0.0);
            assert!(profile.quality_score <= 100);
        }
    }
}
