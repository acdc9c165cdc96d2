//! Final score and the outcome derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final score of a finalized match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

impl Score {
    #[must_use]
    pub const fn new(home: i32, away: i32) -> Self {
        Self { home, away }
    }

    /// Outcome this score stands for.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome::from_score(self.home, self.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Three-way result of a match from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Equal scores. Both teams are rewarded.
    Draw,
    HomeWin,
    AwayWin,
}

impl Outcome {
    /// Derive the outcome from a pair of scores.
    ///
    /// Equality is checked before either comparison.
    #[must_use]
    pub const fn from_score(home: i32, away: i32) -> Self {
        if home == away {
            Self::Draw
        } else if home > away {
            Self::HomeWin
        } else {
            Self::AwayWin
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Draw => "draw",
            Self::HomeWin => "home win",
            Self::AwayWin => "away win",
        };
        f.write_str(label)
    }
}
