use crate::Duo;
use crate::GameTable;
use crate::Player;
use crate::Utility;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A general-sum game with integer payoffs drawn uniformly from
/// `[-spread, spread]`, reproducible from its seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Noise {
    pub size: usize,
    pub seed: u64,
    pub spread: i64,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            size: 4,
            seed: 0,
            spread: 9,
        }
    }
}

impl Noise {
    /// Both players' grids keyed `[mine][theirs]`.
    pub fn grids(&self) -> anyhow::Result<Duo<Vec<Utility>>> {
        anyhow::ensure!(self.spread >= 0, "spread must be non-negative, got {}", self.spread);
        let cells = self
            .size
            .checked_mul(self.size)
            .ok_or_else(|| anyhow::anyhow!("{}x{} grid does not fit in memory", self.size, self.size))?;
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        Ok(Duo::from_fn(|_| {
            (0..cells)
                .map(|_| rng.random_range(-self.spread..=self.spread) as Utility)
                .collect()
        }))
    }
    pub fn table(&self) -> anyhow::Result<GameTable<usize>> {
        let size = self.size;
        let grids = Arc::new(self.grids()?);
        let mut table = GameTable::new().with_choices((0..size).collect());
        for player in Player::all() {
            let grids = grids.clone();
            table.set_payoff_fn(player, move |mine: &usize, theirs: &usize| {
                match *mine < size && *theirs < size {
                    true => Ok(grids[player][mine * size + theirs]),
                    false => Err(anyhow::anyhow!("choice ({}, {}) outside {}x{} grid", mine, theirs, size, size)),
                }
            });
        }
        Ok(table)
    }
}
