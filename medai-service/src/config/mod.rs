use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct MedaiConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

/// Gemini API settings. The key is read from the environment exactly once,
/// at startup; a missing key is not fatal, the completion endpoint just
/// reports itself unavailable while the static endpoints keep serving.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
}

impl MedaiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(MedaiConfig {
            common,
            gemini: GeminiSettings { api_key },
        })
    }
}
