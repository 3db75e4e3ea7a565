use serde::{Deserialize, Serialize};

use crate::core::config::SeedConfig;
use crate::core::error::Result;
use crate::features::articles::models::Article;
use crate::features::authors::models::Author;
use crate::features::categories::models::Category;
use crate::features::elections::models::{ElectionRace, ElectoralMap};

const EMBEDDED_SEED: &str = include_str!("../../seed/newsroom.json");

/// Initial content for the in-memory stores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub races: Vec<ElectionRace>,
    #[serde(default)]
    pub electoral_maps: Vec<ElectoralMap>,
}

impl Seed {
    /// Read the configured seed file, or the seed compiled into the binary
    pub fn load(config: &SeedConfig) -> Result<Self> {
        match &config.path {
            Some(path) => {
                tracing::info!("Loading seed data from {}", path.display());
                let raw = std::fs::read_to_string(path)?;
                Self::parse(&raw)
            }
            None => {
                tracing::info!("Loading embedded seed data");
                Self::embedded()
            }
        }
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_SEED)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
