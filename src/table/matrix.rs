use super::domain::Choice;
use super::domain::Domain;
use super::error::TableError;
use super::lines::Lines;
use super::payoff::Payoff;
use crate::Duo;
use crate::Player;
use crate::Utility;

/// Both players' payoffs over every ordered pair of choices.
///
/// Each grid is row-major and keyed by the owner's choice first:
/// Player 1's grid is `[p1][p2]`, Player 2's grid is `[p2][p1]`.
/// [`PayoffMatrix::pair`] undoes that asymmetry for callers.
///
/// Every stored payoff is finite: [`PayoffMatrix::build`] rejects NaN and
/// infinities, so each entry has an exact rational form.
#[derive(Debug, Clone)]
pub struct PayoffMatrix<C> {
    domain: Domain<C>,
    grids: Duo<Vec<Utility>>,
}

/// One row of evaluations: Player 1's payoffs along the row, and
/// Player 2's payoffs for the same cells.
type Sweep = (Vec<Utility>, Vec<Utility>);

impl<C> PayoffMatrix<C>
where
    C: Choice,
{
    /// Evaluate `payoff1(a, b)` and `payoff2(b, a)` for every `(a, b)` in
    /// the domain product. A failing payoff aborts the build.
    pub fn build(domain: Domain<C>, payoffs: Duo<&Payoff<C>>) -> Result<Self, TableError> {
        let n = domain.len();
        log::debug!("evaluating {}x{} payoff matrix", n, n);
        let sweeps = Self::sweeps(&domain, &payoffs)?;
        let mut mine = Vec::with_capacity(n * n);
        let mut them = vec![0.; n * n];
        for (row, (p1, p2)) in sweeps.into_iter().enumerate() {
            mine.extend(p1);
            for (column, utility) in p2.into_iter().enumerate() {
                them[column * n + row] = utility;
            }
        }
        Ok(Self {
            domain,
            grids: Duo::new(mine, them),
        })
    }

    pub fn domain(&self) -> &Domain<C> {
        &self.domain
    }
    pub fn size(&self) -> usize {
        self.domain.len()
    }
    /// Number of stored payoffs for one player.
    pub fn entries(&self, player: Player) -> usize {
        self.grids[player].len()
    }
    /// Payoff to `player` when they pick position `own` against `opponent`.
    pub fn payoff(&self, player: Player, own: usize, opponent: usize) -> Utility {
        self.grids[player][own * self.size() + opponent]
    }
    /// Payoff pair at Player 1's position `row` and Player 2's position `column`.
    pub fn pair(&self, row: usize, column: usize) -> Duo<Utility> {
        Duo::new(
            self.payoff(Player::P1, row, column),
            self.payoff(Player::P2, column, row),
        )
    }

    /// Row-major traversal: one line per Player 1 choice.
    pub fn rows(&self) -> Lines<'_, C> {
        Lines::new(self, Player::P2)
    }
    /// Column-major traversal: one line per Player 2 choice.
    pub fn columns(&self) -> Lines<'_, C> {
        Lines::new(self, Player::P1)
    }
    /// One line per opponent choice, walking `player`'s own choices within it.
    pub fn facing(&self, player: Player) -> Lines<'_, C> {
        Lines::new(self, player)
    }
}

impl<C> PayoffMatrix<C>
where
    C: Choice,
{
    fn sweep(domain: &Domain<C>, payoffs: &Duo<&Payoff<C>>, row: usize) -> Result<Sweep, TableError> {
        let a = domain.choice(row);
        let mut p1 = Vec::with_capacity(domain.len());
        let mut p2 = Vec::with_capacity(domain.len());
        for (column, b) in domain.iter().enumerate() {
            p1.push(Self::cell(payoffs[Player::P1], Player::P1, a, b, (row, column))?);
            p2.push(Self::cell(payoffs[Player::P2], Player::P2, b, a, (row, column))?);
        }
        Ok((p1, p2))
    }

    fn cell(
        payoff: &Payoff<C>,
        player: Player,
        mine: &C,
        theirs: &C,
        (row, column): (usize, usize),
    ) -> Result<Utility, TableError> {
        let utility = payoff(mine, theirs).map_err(|source| TableError::Payoff { player, source })?;
        match utility.is_finite() {
            true => Ok(utility),
            false => Err(TableError::NonFinite {
                player,
                row,
                column,
            }),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn sweeps(domain: &Domain<C>, payoffs: &Duo<&Payoff<C>>) -> Result<Vec<Sweep>, TableError> {
        (0..domain.len())
            .map(|row| Self::sweep(domain, payoffs, row))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn sweeps(domain: &Domain<C>, payoffs: &Duo<&Payoff<C>>) -> Result<Vec<Sweep>, TableError> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        match domain.len() >= crate::PARALLEL_THRESHOLD {
            true => (0..domain.len())
                .into_par_iter()
                .map(|row| Self::sweep(domain, payoffs, row))
                .collect(),
            false => (0..domain.len())
                .map(|row| Self::sweep(domain, payoffs, row))
                .collect(),
        }
    }
}
