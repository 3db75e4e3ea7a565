use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::types::Language;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
    pub scheduler: SchedulerConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub default_language: Language,
}

/// Where the in-memory stores are seeded from
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Seed file path; the embedded seed is used when unset
    pub path: Option<PathBuf>,
}

/// Scheduled publishing worker configuration
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub enabled: bool,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct PreferencesConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            seed: SeedConfig::from_env()?,
            scheduler: SchedulerConfig::from_env()?,
            preferences: PreferencesConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_NAME: &'static str = "newsroom-core";

    pub fn from_env() -> Result<Self, String> {
        let name = env::var("APP_NAME").unwrap_or_else(|_| Self::DEFAULT_NAME.to_string());

        let default_language = env::var("DEFAULT_LANGUAGE")
            .unwrap_or_else(|_| Language::En.code().to_string())
            .parse::<Language>()
            .map_err(|e| format!("Invalid DEFAULT_LANGUAGE: {}", e))?;

        Ok(Self {
            name,
            default_language,
        })
    }
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, String> {
        let path = env::var("SEED_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { path })
    }
}

impl SchedulerConfig {
    const DEFAULT_INTERVAL_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let enabled = parse_bool(
            "SCHEDULER_ENABLED",
            &env::var("SCHEDULER_ENABLED").unwrap_or_else(|_| "true".to_string()),
        )?;

        let interval_secs = env::var("SCHEDULER_INTERVAL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SCHEDULER_INTERVAL_SECS must be a valid number".to_string())?;

        if interval_secs == 0 {
            return Err("SCHEDULER_INTERVAL_SECS must be greater than zero".to_string());
        }

        Ok(Self {
            enabled,
            interval: Duration::from_secs(interval_secs),
        })
    }
}

impl PreferencesConfig {
    const DEFAULT_PATH: &'static str = ".newsroom-preferences.json";

    pub fn from_env() -> Result<Self, String> {
        let path = env::var("PREFERENCES_PATH").unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("{} must be a boolean (true/false)", name)),
    }
}
