//! Latest score and tier classification

use serde::{Deserialize, Serialize};

use crate::consts::{MID_TIER_PERCENT, TOP_TIER_PERCENT};

/// A score announced by the host page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub score: f64,
    pub max_score: f64,
}

/// Most recently received score. Starts at 0/0 ("no score yet").
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub final_score: f64,
    pub max_score: f64,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both fields with the update
    pub fn apply(&mut self, update: ScoreUpdate) {
        self.final_score = update.score;
        self.max_score = update.max_score;
    }

    /// Score as a percentage of the maximum.
    ///
    /// `None` when no maximum is set or the ratio is not finite.
    pub fn percentage(&self) -> Option<f64> {
        if self.max_score == 0.0 {
            return None;
        }
        let pct = self.final_score / self.max_score * 100.0;
        pct.is_finite().then_some(pct)
    }

    /// Whether a host score has arrived (maximum is non-zero)
    pub fn has_score(&self) -> bool {
        self.max_score != 0.0
    }

    pub fn tier(&self) -> Tier {
        Tier::classify(self.percentage())
    }
}

/// Visual feedback tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// >= 90%: celebration and fireworks
    Top,
    /// >= 60%
    Mid,
    /// > 0%
    Low,
    /// No usable score (nothing received, zero, negative or degenerate)
    Unscored,
}

impl Tier {
    /// First matching threshold wins; a missing percentage is `Unscored`
    pub fn classify(percentage: Option<f64>) -> Self {
        match percentage {
            Some(p) if p >= TOP_TIER_PERCENT => Tier::Top,
            Some(p) if p >= MID_TIER_PERCENT => Tier::Mid,
            Some(p) if p > 0.0 => Tier::Low,
            _ => Tier::Unscored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::Mid => "mid",
            Tier::Low => "low",
            Tier::Unscored => "unscored",
        }
    }
}
