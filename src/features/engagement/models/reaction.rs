use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl ReactionType {
    pub const ALL: [ReactionType; 6] = [
        ReactionType::Like,
        ReactionType::Love,
        ReactionType::Haha,
        ReactionType::Wow,
        ReactionType::Sad,
        ReactionType::Angry,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionType::Like => "👍",
            ReactionType::Love => "❤️",
            ReactionType::Haha => "😂",
            ReactionType::Wow => "😮",
            ReactionType::Sad => "😢",
            ReactionType::Angry => "😠",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactionType::Like => write!(f, "like"),
            ReactionType::Love => write!(f, "love"),
            ReactionType::Haha => write!(f, "haha"),
            ReactionType::Wow => write!(f, "wow"),
            ReactionType::Sad => write!(f, "sad"),
            ReactionType::Angry => write!(f, "angry"),
        }
    }
}

/// Per-article reaction counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub like: u64,
    #[serde(default)]
    pub love: u64,
    #[serde(default)]
    pub haha: u64,
    #[serde(default)]
    pub wow: u64,
    #[serde(default)]
    pub sad: u64,
    #[serde(default)]
    pub angry: u64,
}

impl Reactions {
    pub fn get(&self, kind: ReactionType) -> u64 {
        match kind {
            ReactionType::Like => self.like,
            ReactionType::Love => self.love,
            ReactionType::Haha => self.haha,
            ReactionType::Wow => self.wow,
            ReactionType::Sad => self.sad,
            ReactionType::Angry => self.angry,
        }
    }

    /// Increment one counter and return its new value
    pub fn add(&mut self, kind: ReactionType) -> u64 {
        let counter = match kind {
            ReactionType::Like => &mut self.like,
            ReactionType::Love => &mut self.love,
            ReactionType::Haha => &mut self.haha,
            ReactionType::Wow => &mut self.wow,
            ReactionType::Sad => &mut self.sad,
            ReactionType::Angry => &mut self.angry,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn total(&self) -> u64 {
        ReactionType::ALL.iter().map(|k| self.get(*k)).sum()
    }

    /// The most used reaction, if any were given. Ties go to the earlier type.
    pub fn top(&self) -> Option<ReactionType> {
        ReactionType::ALL
            .iter()
            .copied()
            .filter(|k| self.get(*k) > 0)
            .fold(None, |best: Option<ReactionType>, k| match best {
                Some(b) if self.get(b) >= self.get(k) => Some(b),
                _ => Some(k),
            })
    }
}
