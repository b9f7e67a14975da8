use super::system::System;
use crate::Choice;
use crate::PayoffMatrix;
use crate::Player;
use crate::Probability;
use crate::Utility;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

/// Why a player has no mixed strategy that leaves the opponent indifferent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimaxError {
    /// Fewer than two choices: there is nothing to mix.
    Trivial,
    /// The indifference system is inconsistent or underdetermined.
    Singular,
    /// The unique solution puts negative weight on some choice.
    Infeasible,
}

impl std::fmt::Display for MinimaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trivial => write!(f, "a single choice cannot be mixed"),
            Self::Singular => write!(f, "indifference system has no unique solution"),
            Self::Infeasible => write!(f, "indifference solution is not a distribution"),
        }
    }
}

impl std::error::Error for MinimaxError {}

/// One player's mixing ratios, one per choice in domain order, summing to 1,
/// together with the expected payoff they guarantee the opponent.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixing {
    ratios: Vec<Probability>,
    value: Probability,
}

impl Mixing {
    pub fn ratios(&self) -> &[Probability] {
        &self.ratios
    }
    /// The opponent's expected payoff, equal across all their choices.
    pub fn value(&self) -> &Probability {
        &self.value
    }
}

/// Mixed-strategy solver built on the indifference condition.
///
/// For the mixing player, every choice but the last gets an unknown weight
/// and the last gets `1 − Σ` of the others. Each opponent choice `j` has an
/// expected payoff `E_j` that is linear in those unknowns; the equations
/// `E_j − E_0 = 0` for `j ≥ 1` form an `(n−1) × (n−1)` system.
pub struct Minimax;

impl Minimax {
    pub fn solve<C>(matrix: &PayoffMatrix<C>, player: Player) -> Result<Mixing, MinimaxError>
    where
        C: Choice,
    {
        let n = matrix.size();
        if n < 2 {
            return Err(MinimaxError::Trivial);
        }
        let payoffs = Self::opponent(matrix, player);
        let last = n - 1;
        let ref base = payoffs[0];
        let (coefficients, constants) = payoffs
            .iter()
            .skip(1)
            .map(|row| {
                let coefficients = (0..last)
                    .map(|i| (&row[i] - &row[last]) - (&base[i] - &base[last]))
                    .collect::<Vec<Probability>>();
                let constant = &base[last] - &row[last];
                (coefficients, constant)
            })
            .unzip::<_, _, Vec<_>, Vec<_>>();
        let mut ratios = System::new(coefficients, constants)
            .solve()
            .ok_or(MinimaxError::Singular)?;
        let remainder = Probability::one() - ratios.iter().sum::<Probability>();
        ratios.push(remainder);
        if ratios.iter().any(|p| p.is_negative()) {
            return Err(MinimaxError::Infeasible);
        }
        let value = ratios
            .iter()
            .zip(base.iter())
            .map(|(p, u)| p * u)
            .fold(Probability::zero(), |acc, x| acc + x);
        log::debug!("{} mixes over {} choices", player, n);
        Ok(Mixing { ratios, value })
    }

    /// The opponent's payoffs as exact rationals: one row per opponent choice,
    /// one column per choice of the mixing player.
    fn opponent<C>(matrix: &PayoffMatrix<C>, player: Player) -> Vec<Vec<Probability>>
    where
        C: Choice,
    {
        let opponent = player.opponent();
        matrix
            .facing(player)
            .map(|line| line.map(|r| Self::exact(r.payoff(opponent))).collect())
            .collect()
    }

    fn exact(utility: Utility) -> Probability {
        Probability::from_float(utility).expect("payoff matrices hold only finite payoffs")
    }
}
