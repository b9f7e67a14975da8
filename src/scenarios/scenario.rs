use super::noise::Noise;
use super::pricing::Pricing;
use super::roshambo::Roshambo;
use super::spike::Spike;
use crate::Choice;
use crate::GameTable;
use crate::Report;
use serde::Deserialize;
use serde::Serialize;

/// Any of the built-in games, as loaded from a JSON configuration file:
///
/// ```json
/// { "game": "pricing", "lowest": 31, "highest": 58 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum Scenario {
    Pricing(Pricing),
    Spike(Spike),
    Roshambo(Roshambo),
    Noise(Noise),
}

impl Scenario {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Build the game and report on it.
    pub fn report(&self, minimax: bool) -> anyhow::Result<Report> {
        match self {
            Self::Pricing(game) => Self::run(game.table(), minimax),
            Self::Spike(game) => Self::run(game.table(), minimax),
            Self::Roshambo(game) => Self::run(game.table(), minimax),
            Self::Noise(game) => Self::run(game.table()?, minimax),
        }
    }

    fn run<C>(table: GameTable<C>, minimax: bool) -> anyhow::Result<Report>
    where
        C: Choice + std::fmt::Display + 'static,
    {
        let mut table = table.with_minimax(minimax);
        table.build(None)?;
        Ok(Report::try_from(&table)?)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pricing(_) => write!(f, "pricing duopoly"),
            Self::Spike(_) => write!(f, "spiked payoffs"),
            Self::Roshambo(_) => write!(f, "rock paper scissors"),
            Self::Noise(_) => write!(f, "random payoffs"),
        }
    }
}
