mod election;

pub use election::{
    Candidate, ElectionRace, ElectoralMap, RaceKind, RaceStatus, Region, StandingsField,
};
