use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub google_project_id: String,
    /// Static API key for the Google backends, if configured
    pub google_api_key: Option<String>,
    /// Service account credentials as a JSON document, if configured
    pub google_service_account_json: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: String,
    /// Fixed source language of the narration scripts
    pub source_language: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

const DEFAULT_ELEVENLABS_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            google_project_id: env::var("GOOGLE_CLOUD_PROJECT")
                .unwrap_or_else(|_| "demo-project".to_string()),
            google_api_key: env::var("GOOGLE_CLOUD_API_KEY").ok(),
            google_service_account_json: env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY").ok(),
            elevenlabs_voice_id: env::var("ELEVENLABS_VOICE_ID")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_VOICE_ID.to_string()),
            source_language: env::var("SOURCE_LANGUAGE").unwrap_or_else(|_| "pt".to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    /// A config with no credentials at all, every provider runs simulated
    pub fn simulation_only() -> Self {
        Config {
            google_project_id: "demo-project".to_string(),
            google_api_key: None,
            google_service_account_json: None,
            elevenlabs_api_key: None,
            elevenlabs_voice_id: DEFAULT_ELEVENLABS_VOICE_ID.to_string(),
            source_language: "pt".to_string(),
            log_format: LogFormat::Pretty,
        }
    }

    pub fn google_configured(&self) -> bool {
        self.google_api_key.is_some() || self.google_service_account_json.is_some()
    }

    pub fn elevenlabs_configured(&self) -> bool {
        self.elevenlabs_api_key.is_some()
    }
}
