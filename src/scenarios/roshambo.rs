use crate::GameTable;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

/// Rock, paper, scissors with configurable stakes, same rules for both seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roshambo {
    pub win: Utility,
    pub lose: Utility,
    pub tie: Utility,
}

impl Default for Roshambo {
    fn default() -> Self {
        Self {
            win: 1.,
            lose: -1.,
            tie: 0.,
        }
    }
}

impl Roshambo {
    pub fn payoff(&self, mine: &Hand, theirs: &Hand) -> Utility {
        if mine.beats(theirs) {
            self.win
        } else if theirs.beats(mine) {
            self.lose
        } else {
            self.tie
        }
    }
    pub fn table(&self) -> GameTable<Hand> {
        let config = self.clone();
        GameTable::symmetric(Hand::all().to_vec(), move |mine: &Hand, theirs: &Hand| {
            Ok(config.payoff(mine, theirs))
        })
    }
}
