use super::dominance::Dominance;
use super::minimax::Minimax;
use super::minimax::MinimaxError;
use super::minimax::Mixing;
use super::nash::Equilibria;
use crate::Choice;
use crate::Duo;
use crate::PayoffMatrix;
use crate::Player;

/// Everything derived from one build: the matrix and every analysis over it.
///
/// Immutable once constructed. [`GameTable`] publishes it behind an `Arc`,
/// so readers holding a snapshot never observe a rebuild in progress.
///
/// [`GameTable`]: crate::GameTable
#[derive(Debug, Clone)]
pub struct Analysis<C> {
    matrix: PayoffMatrix<C>,
    dominance: Dominance<C>,
    equilibria: Equilibria<C>,
    mixing: Option<Duo<Result<Mixing, MinimaxError>>>,
}

impl<C> Analysis<C>
where
    C: Choice,
{
    pub fn new(matrix: PayoffMatrix<C>, minimax: bool) -> Self {
        let dominance = Dominance::new(&matrix);
        let equilibria = Equilibria::new(&matrix);
        let mixing = minimax.then(|| Duo::from_fn(|p| Minimax::solve(&matrix, p)));
        if let Some(ref mixing) = mixing {
            for (player, result) in mixing.iter() {
                if let Err(e) = result {
                    log::warn!("{} has no mixed equilibrium: {}", player, e);
                }
            }
        }
        Self {
            matrix,
            dominance,
            equilibria,
            mixing,
        }
    }
    pub fn matrix(&self) -> &PayoffMatrix<C> {
        &self.matrix
    }
    pub fn dominance(&self) -> &Dominance<C> {
        &self.dominance
    }
    pub fn equilibria(&self) -> &Equilibria<C> {
        &self.equilibria
    }
    /// `None` when minimax analysis was not requested for this build.
    pub fn mixing(&self, player: Player) -> Option<&Result<Mixing, MinimaxError>> {
        self.mixing.as_ref().map(|m| &m[player])
    }
}
