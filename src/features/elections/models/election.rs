use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::BilingualText;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: BilingualText,
    pub party: BilingualText,
    /// Hex color for party branding
    pub party_color: String,
    pub photo: String,
    pub votes: u64,
    /// Whole-number share of the race total
    pub percentage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<BilingualText>,
    #[serde(default)]
    pub is_winner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceKind {
    Presidential,
    Parliamentary,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceStatus {
    Live,
    Final,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionRace {
    pub id: String,
    pub name: BilingualText,
    #[serde(rename = "type")]
    pub kind: RaceKind,
    pub candidates: Vec<Candidate>,
    pub total_votes: u64,
    /// Share of votes counted so far, 0..=100
    pub reporting_percentage: u32,
    pub status: RaceStatus,
    pub last_updated: DateTime<Utc>,
}

impl ElectionRace {
    pub fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}

/// Per-region results. A `None` vote count means the region has not reported
/// for that candidate yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: BilingualText,
    pub winner_id: Option<String>,
    pub votes: HashMap<String, Option<u64>>,
    pub reporting_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectoralMap {
    pub race_id: String,
    pub regions: Vec<Region>,
}

/// Column of the live results table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsField {
    Name,
    Party,
    Votes,
    #[default]
    Percentage,
}
