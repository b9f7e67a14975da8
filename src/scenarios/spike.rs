use crate::GameTable;
use crate::Player;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// A game where each player earns 2 on their peak choices and 1 elsewhere,
/// whatever the opponent does. Every peak is a dominant strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spike {
    pub lowest: i64,
    pub highest: i64,
    pub peaks: [Vec<i64>; 2],
}

impl Default for Spike {
    fn default() -> Self {
        Self {
            lowest: 0,
            highest: 10,
            peaks: [vec![10], vec![9]],
        }
    }
}

impl Spike {
    pub fn new(peaks1: Vec<i64>, peaks2: Vec<i64>) -> Self {
        Self {
            peaks: [peaks1, peaks2],
            ..Self::default()
        }
    }
    pub fn choices(&self) -> Vec<i64> {
        (self.lowest..=self.highest).collect()
    }
    pub fn table(&self) -> GameTable<i64> {
        let mut table = GameTable::new().with_choices(self.choices());
        for player in Player::all() {
            let peaks = self.peaks[player.index()].clone();
            table.set_payoff_fn(player, move |mine: &i64, _: &i64| {
                Ok(match peaks.contains(mine) {
                    true => 2. as Utility,
                    false => 1. as Utility,
                })
            });
        }
        table
    }
}
