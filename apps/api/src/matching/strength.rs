use serde::{Deserialize, Serialize};

pub const STRONG_MATCH_THRESHOLD: u32 = 80;
pub const GOOD_MATCH_THRESHOLD: u32 = 60;

/// Presentation tier for a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Strong,
    Good,
    /// Below the badge threshold, shown as a raw number only.
    Unbadged,
}

impl MatchStrength {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= STRONG_MATCH_THRESHOLD => MatchStrength::Strong,
            s if s >= GOOD_MATCH_THRESHOLD => MatchStrength::Good,
            _ => MatchStrength::Unbadged,
        }
    }

    pub fn badge(self) -> Option<&'static str> {
        match self {
            MatchStrength::Strong => Some("Strong match"),
            MatchStrength::Good => Some("Good match"),
            MatchStrength::Unbadged => None,
        }
    }

    pub fn is_badged(self) -> bool {
        self != MatchStrength::Unbadged
    }
}
