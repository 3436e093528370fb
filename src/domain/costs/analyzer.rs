use std::collections::BTreeMap;

use super::model::{CostProjection, MigrationSavings, ProviderId, WorkloadConfig};
use super::pricing;

const DAYS_PER_MONTH: u32 = 30;

/// Projects monthly narration costs per provider from a workload description.
/// Pure computation over the static pricing table, no I/O.
pub struct CostAnalyzer;

impl CostAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Project monthly costs for every provider under the given workload
    pub fn project_monthly_costs(
        &self,
        config: &WorkloadConfig,
    ) -> BTreeMap<ProviderId, CostProjection> {
        let monthly_videos = config.videos_per_day as u64 * DAYS_PER_MONTH as u64;
        let total_characters = monthly_videos
            * config.target_languages.len() as u64
            * config.avg_chars_per_video as u64;

        pricing::profiles()
            .iter()
            .map(|(provider, profile)| {
                let tts_cost = total_characters as f64 * profile.tts_cost_per_char;
                let translate_cost = total_characters as f64 * profile.translate_cost_per_char;
                let total_cost = tts_cost + translate_cost;
                let cost_per_video = if monthly_videos == 0 {
                    0.0
                } else {
                    total_cost / monthly_videos as f64
                };

                (
                    *provider,
                    CostProjection {
                        display_name: profile.display_name.to_string(),
                        tts_cost,
                        translate_cost,
                        total_cost,
                        cost_per_video,
                        quality_score: profile.quality_score,
                        latency_ms: profile.latency_ms,
                    },
                )
            })
            .collect()
    }

    /// Monthly savings when migrating from the configured current provider
    /// to the configured target provider
    pub fn projected_savings(&self, config: &WorkloadConfig) -> MigrationSavings {
        let projections = self.project_monthly_costs(config);
        let current_cost = projections[&config.current_provider].total_cost;
        let target_cost = projections[&config.target_provider].total_cost;

        let monthly_savings = current_cost - target_cost;
        let savings_percent = if current_cost == 0.0 {
            0.0
        } else {
            monthly_savings / current_cost * 100.0
        };

        MigrationSavings {
            current_provider: config.current_provider,
            target_provider: config.target_provider,
            monthly_savings,
            savings_percent,
        }
    }
}

impl Default for CostAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::costs::pricing::USD_BRL_RATE;

    fn workload(videos_per_day: u32, languages: &[&str], avg_chars: u32) -> WorkloadConfig {
        WorkloadConfig::new(
            videos_per_day,
            languages.iter().map(|l| l.to_string()).collect(),
            avg_chars,
            ProviderId::ElevenLabs,
            ProviderId::GoogleCloud,
        )
    }

    #[test]
    fn test_reference_workload_matches_published_google_rates() {
        // 200 videos/day, 2 languages, 1000 chars: 6000 videos and 12M chars a month
        let analyzer = CostAnalyzer::new();
        let projections = analyzer.project_monthly_costs(&workload(200, &["en", "es"], 1000));
        let google = &projections[&ProviderId::GoogleCloud];

        let expected_tts = 12_000_000.0 * 4.0 / 1_000_000.0 * USD_BRL_RATE;
        let expected_translate = 12_000_000.0 * 20.0 / 1_000_000.0 * USD_BRL_RATE;

        assert!((google.tts_cost - expected_tts).abs() < 1e-6, "{}", google.tts_cost);
        assert!((google.translate_cost - expected_translate).abs() < 1e-6);
        assert!((google.total_cost - (expected_tts + expected_translate)).abs() < 1e-6);
        assert!((google.cost_per_video - google.total_cost / 6000.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let analyzer = CostAnalyzer::new();
        let config = workload(120, &["en", "de", "it"], 800);

        let first = analyzer.project_monthly_costs(&config);
        let second = analyzer.project_monthly_costs(&config);

        for provider in ProviderId::all() {
            assert_eq!(first[&provider].total_cost, second[&provider].total_cost);
            assert_eq!(first[&provider].cost_per_video, second[&provider].cost_per_video);
        }
    }

    #[test]
    fn test_total_cost_grows_with_average_characters() {
        let analyzer = CostAnalyzer::new();
        let small = analyzer.project_monthly_costs(&workload(100, &["en", "es"], 500));
        let large = analyzer.project_monthly_costs(&workload(100, &["en", "es"], 501));

        for provider in ProviderId::all() {
            assert!(
                large[&provider].total_cost > small[&provider].total_cost,
                "total cost must strictly increase for {provider}"
            );
        }
    }

    #[test]
    fn test_zero_videos_yields_zero_cost_per_video() {
        let analyzer = CostAnalyzer::new();
        let projections = analyzer.project_monthly_costs(&workload(0, &["en"], 1000));

        for provider in ProviderId::all() {
            assert_eq!(projections[&provider].total_cost, 0.0);
            assert_eq!(projections[&provider].cost_per_video, 0.0);
        }
    }

    #[test]
    fn test_projection_covers_every_provider() {
        let analyzer = CostAnalyzer::new();
        let projections = analyzer.project_monthly_costs(&WorkloadConfig::default());
        assert_eq!(projections.len(), ProviderId::all().len());
    }

    #[test]
    fn test_savings_are_consistent_with_projections() {
        let analyzer = CostAnalyzer::new();
        let config = workload(200, &["en", "es", "fr"], 1000);

        let projections = analyzer.project_monthly_costs(&config);
        let savings = analyzer.projected_savings(&config);

        let expected = projections[&ProviderId::ElevenLabs].total_cost
            - projections[&ProviderId::GoogleCloud].total_cost;
        assert!((savings.monthly_savings - expected).abs() < 1e-9);
        assert!(savings.savings_percent > 0.0);
    }
}
