use crate::core::error::{AppError, Result};
use crate::features::elections::models::{
    Candidate, ElectionRace, ElectoralMap, RaceStatus, Region, StandingsField,
};
use crate::shared::types::{Language, SortDirection};

/// Election coverage: races, live standings and the regional map
#[derive(Debug, Clone, Default)]
pub struct ElectionService {
    races: Vec<ElectionRace>,
    maps: Vec<ElectoralMap>,
}

impl ElectionService {
    pub fn new(races: Vec<ElectionRace>, maps: Vec<ElectoralMap>) -> Self {
        Self { races, maps }
    }

    pub fn races(&self) -> &[ElectionRace] {
        &self.races
    }

    pub fn get_race(&self, race_id: &str) -> Option<&ElectionRace> {
        self.races.iter().find(|r| r.id == race_id)
    }

    pub fn with_status(&self, status: RaceStatus) -> Vec<&ElectionRace> {
        self.races.iter().filter(|r| r.status == status).collect()
    }

    pub fn live_races(&self) -> Vec<&ElectionRace> {
        self.with_status(RaceStatus::Live)
    }

    pub fn final_races(&self) -> Vec<&ElectionRace> {
        self.with_status(RaceStatus::Final)
    }

    pub fn map_for_race(&self, race_id: &str) -> Option<&ElectoralMap> {
        self.maps.iter().find(|m| m.race_id == race_id)
    }

    /// Record a new vote count for a candidate and refresh the race totals
    pub fn record_votes(
        &mut self,
        race_id: &str,
        candidate_id: &str,
        votes: u64,
        reporting_percentage: u32,
    ) -> Result<()> {
        let race = self
            .races
            .iter_mut()
            .find(|r| r.id == race_id)
            .ok_or_else(|| AppError::NotFound(format!("Race '{}' not found", race_id)))?;

        if race.status == RaceStatus::Final {
            return Err(AppError::Conflict(format!(
                "Race '{}' has already been called",
                race_id
            )));
        }

        let candidate = race
            .candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Candidate '{}' not found", candidate_id))
            })?;
        candidate.votes = votes;

        race.reporting_percentage = reporting_percentage.min(100);
        race.last_updated = chrono::Utc::now();
        Self::recompute_percentages(race);

        tracing::debug!(
            "Votes recorded: race_id={}, candidate_id={}, votes={}",
            race_id,
            candidate_id,
            votes
        );
        Ok(())
    }

    // =========================================================================
    // RACE RESULTS
    // =========================================================================

    /// Candidates ordered for the live results table. Text columns compare the
    /// given language.
    pub fn standings(
        race: &ElectionRace,
        field: StandingsField,
        direction: SortDirection,
        language: Language,
    ) -> Vec<&Candidate> {
        let mut candidates: Vec<&Candidate> = race.candidates.iter().collect();
        candidates.sort_by(|a, b| {
            let ordering = match field {
                StandingsField::Name => a.name.get(language).cmp(b.name.get(language)),
                StandingsField::Party => a.party.get(language).cmp(b.party.get(language)),
                StandingsField::Votes => a.votes.cmp(&b.votes),
                StandingsField::Percentage => a.percentage.cmp(&b.percentage),
            };
            direction.apply(ordering)
        });
        candidates
    }

    /// Set `total_votes` to the candidate sum and every percentage to the
    /// rounded share of it
    pub fn recompute_percentages(race: &mut ElectionRace) {
        let total: u64 = race.candidates.iter().map(|c| c.votes).sum();
        race.total_votes = total;

        for candidate in race.candidates.iter_mut() {
            candidate.percentage = rounded_share(candidate.votes, total);
        }
    }

    /// Most votes; ties go to the first listed candidate
    pub fn leader(race: &ElectionRace) -> Option<&Candidate> {
        race.candidates
            .iter()
            .fold(None::<&Candidate>, |best, candidate| match best {
                Some(current) if current.votes >= candidate.votes => Some(current),
                _ => Some(candidate),
            })
    }

    // =========================================================================
    // ELECTORAL MAP
    // =========================================================================

    /// Votes counted in a region; unreported entries count as zero
    pub fn region_total_votes(region: &Region) -> u64 {
        region.votes.values().map(|v| v.unwrap_or(0)).sum()
    }

    /// Rounded percentage of the region's counted votes won by `candidate_id`
    pub fn region_share(region: &Region, candidate_id: &str) -> u32 {
        let votes = region
            .votes
            .get(candidate_id)
            .copied()
            .flatten()
            .unwrap_or(0);
        rounded_share(votes, Self::region_total_votes(region))
    }

    /// Mean reporting percentage across regions, rounded; zero for an empty map
    pub fn average_reporting(map: &ElectoralMap) -> u32 {
        if map.regions.is_empty() {
            return 0;
        }
        let sum: u64 = map
            .regions
            .iter()
            .map(|r| u64::from(r.reporting_percentage))
            .sum();
        (sum as f64 / map.regions.len() as f64).round() as u32
    }

    /// Regions with a declared winner
    pub fn called_regions(map: &ElectoralMap) -> Vec<&Region> {
        map.regions.iter().filter(|r| r.winner_id.is_some()).collect()
    }

    /// Regions that have finished counting
    pub fn completed_regions(map: &ElectoralMap) -> Vec<&Region> {
        map.regions
            .iter()
            .filter(|r| r.reporting_percentage >= 100)
            .collect()
    }
}

fn rounded_share(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
