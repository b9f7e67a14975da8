use super::domain::Choice;
use super::domain::Domain;
use super::error::TableError;
use super::lines::Lines;
use super::matrix::PayoffMatrix;
use super::payoff::Payoff;
use crate::Analysis;
use crate::Duo;
use crate::Mixing;
use crate::Player;
use crate::Probability;
use crate::Utility;
use std::sync::Arc;

/// A two-player game table over a shared domain of choices.
///
/// The table is `Unbuilt` until [`GameTable::build`] succeeds. Every
/// configuration change drops it back to `Unbuilt`, and every accessor
/// refuses to answer from an `Unbuilt` table. A build computes a fresh
/// [`Analysis`] off to the side and swaps it in only once it is complete,
/// so a failed build leaves the previous state untouched.
pub struct GameTable<C> {
    names: Duo<String>,
    payoffs: Duo<Option<Payoff<C>>>,
    choices: Option<Vec<C>>,
    minimax: bool,
    built: Option<Arc<Analysis<C>>>,
}

impl<C> Default for GameTable<C> {
    fn default() -> Self {
        Self {
            names: Duo::new(crate::PLAYER_1.to_string(), crate::PLAYER_2.to_string()),
            payoffs: Duo::new(None, None),
            choices: None,
            minimax: false,
            built: None,
        }
    }
}

impl<C> GameTable<C>
where
    C: Choice + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Same payoff function for both seats, each called as `(mine, theirs)`.
    pub fn symmetric<F>(choices: Vec<C>, payoff: F) -> Self
    where
        F: Fn(&C, &C) -> anyhow::Result<Utility> + Send + Sync + 'static,
    {
        let payoff: Payoff<C> = Arc::new(payoff);
        Self::new()
            .with_payoff(Player::P1, payoff.clone())
            .with_payoff(Player::P2, payoff)
            .with_choices(choices)
    }

    pub fn with_name(mut self, player: Player, name: impl Into<String>) -> Self {
        self.names[player] = name.into();
        self
    }
    pub fn with_payoff(mut self, player: Player, payoff: Payoff<C>) -> Self {
        self.set_payoff(player, payoff);
        self
    }
    pub fn with_choices(mut self, choices: Vec<C>) -> Self {
        self.set_choices(choices);
        self
    }
    pub fn with_minimax(mut self, minimax: bool) -> Self {
        self.set_minimax(minimax);
        self
    }

    pub fn set_payoff(&mut self, player: Player, payoff: Payoff<C>) {
        self.payoffs[player] = Some(payoff);
        self.invalidate();
    }
    /// Install a payoff function from any closure `(mine, theirs) -> payoff`.
    pub fn set_payoff_fn<F>(&mut self, player: Player, payoff: F)
    where
        F: Fn(&C, &C) -> anyhow::Result<Utility> + Send + Sync + 'static,
    {
        self.set_payoff(player, Arc::new(payoff));
    }
    pub fn set_choices(&mut self, choices: Vec<C>) {
        self.choices = Some(choices);
        self.invalidate();
    }
    pub fn set_minimax(&mut self, minimax: bool) {
        self.minimax = minimax;
        self.invalidate();
    }
    /// Drop derived state. Names are presentation only and do not invalidate.
    pub fn invalidate(&mut self) {
        if self.built.take().is_some() {
            log::debug!("game table invalidated");
        }
    }

    /// (Re)build the matrix and all analyses, from `choices` if given or the
    /// configured choices otherwise. Choices passed here become the
    /// configured choices once the build succeeds.
    pub fn build(&mut self, choices: Option<Vec<C>>) -> Result<(), TableError> {
        let p1 = self.payoffs[Player::P1]
            .as_ref()
            .ok_or(TableError::MissingPayoff(Player::P1))?;
        let p2 = self.payoffs[Player::P2]
            .as_ref()
            .ok_or(TableError::MissingPayoff(Player::P2))?;
        let domain = match choices {
            Some(ref choices) => Domain::new(choices.clone())?,
            None => Domain::new(self.choices.clone().ok_or(TableError::MissingDomain)?)?,
        };
        let n = domain.len();
        let matrix = PayoffMatrix::build(domain, Duo::new(p1, p2))?;
        let analysis = Analysis::new(matrix, self.minimax);
        if let Some(choices) = choices {
            self.choices = Some(choices);
        }
        self.built = Some(Arc::new(analysis));
        log::info!("built {}x{} game table", n, n);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }
    pub fn minimax(&self) -> bool {
        self.minimax
    }
    pub fn name(&self, player: Player) -> &str {
        &self.names[player]
    }
    pub fn choices(&self) -> Option<&[C]> {
        self.choices.as_deref()
    }

    /// Shared handle to the current build, for readers on other threads.
    pub fn snapshot(&self) -> Result<Arc<Analysis<C>>, TableError> {
        self.built.clone().ok_or(TableError::Unbuilt)
    }
    fn analysis(&self) -> Result<&Analysis<C>, TableError> {
        self.built.as_deref().ok_or(TableError::Unbuilt)
    }

    /// The built domain, in order.
    pub fn domain(&self) -> Result<&[C], TableError> {
        Ok(self.analysis()?.matrix().domain().choices())
    }
    /// Payoff pair `(payoff1, payoff2)` when Player 1 picks `p1` and Player 2 picks `p2`.
    pub fn payoffs_at(&self, p1: &C, p2: &C) -> Result<(Utility, Utility), TableError> {
        let matrix = self.analysis()?.matrix();
        let row = matrix.domain().position(p1).ok_or(TableError::Lookup(Player::P1))?;
        let column = matrix.domain().position(p2).ok_or(TableError::Lookup(Player::P2))?;
        Ok(matrix.pair(row, column).into_inner())
    }
    /// Row-by-row traversal of the built matrix.
    pub fn rows(&self) -> Result<Lines<'_, C>, TableError> {
        Ok(self.analysis()?.matrix().rows())
    }
    pub fn dominant_strategies(&self, player: Player) -> Result<&[C], TableError> {
        Ok(self.analysis()?.dominance().dominants(player))
    }
    pub fn dominated_strategies(&self, player: Player) -> Result<&[C], TableError> {
        Ok(self.analysis()?.dominance().dominated(player))
    }
    /// Pure-strategy equilibria as `(p1 choice, p2 choice)`, row-major.
    pub fn nash_equilibria(&self) -> Result<&[(C, C)], TableError> {
        Ok(self.analysis()?.equilibria().pairs())
    }
    pub fn mixing(&self, player: Player) -> Result<&Mixing, TableError> {
        match self.analysis()?.mixing(player) {
            None => Err(TableError::MinimaxDisabled),
            Some(Ok(mixing)) => Ok(mixing),
            Some(Err(reason)) => Err(TableError::Degenerate {
                player,
                reason: *reason,
            }),
        }
    }
    /// Exact mixing ratios for `player`, one per choice in domain order.
    pub fn mixing_ratios(&self, player: Player) -> Result<&[Probability], TableError> {
        Ok(self.mixing(player)?.ratios())
    }
}
