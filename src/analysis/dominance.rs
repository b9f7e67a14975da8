use crate::Choice;
use crate::Duo;
use crate::Line;
use crate::PayoffMatrix;
use crate::Player;
use crate::Utility;

/// Which end of a line's payoffs a strategy must sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Best response: dominant strategies.
    Best,
    /// Worst response: dominated strategies.
    Worst,
}

impl Extremum {
    fn beats(&self, challenger: Utility, incumbent: Utility) -> bool {
        match self {
            Self::Best => challenger > incumbent,
            Self::Worst => challenger < incumbent,
        }
    }
}

/// Weakly dominant and dominated strategies for both players, in domain order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dominance<C> {
    dominants: Duo<Vec<C>>,
    dominated: Duo<Vec<C>>,
}

impl<C> Dominance<C>
where
    C: Choice,
{
    pub fn new(matrix: &PayoffMatrix<C>) -> Self {
        Self {
            dominants: Duo::from_fn(|p| Self::search(matrix, p, Extremum::Best)),
            dominated: Duo::from_fn(|p| Self::search(matrix, p, Extremum::Worst)),
        }
    }
    pub fn dominants(&self, player: Player) -> &[C] {
        &self.dominants[player]
    }
    pub fn dominated(&self, player: Player) -> &[C] {
        &self.dominated[player]
    }

    /// Choices of `player` that reach the extremum against every opponent
    /// choice: the intersection of each line's local extremum set.
    pub fn search(matrix: &PayoffMatrix<C>, player: Player, extremum: Extremum) -> Vec<C> {
        let mut lines = matrix.facing(player).peekable();
        if lines.peek().is_none() {
            return Vec::new();
        }
        let mut global = vec![true; matrix.size()];
        for line in lines {
            let local = Self::local(line, player, extremum);
            for (keep, hit) in global.iter_mut().zip(local) {
                *keep &= hit;
            }
        }
        let found = matrix.domain().select(&global);
        log::debug!("{} {:?} response set holds {} choices", player, extremum, found.len());
        found
    }

    /// Mask of `player`'s choices achieving the extremum along one line.
    /// Ties join the set; a strictly better payoff replaces it.
    fn local(line: Line<'_, C>, player: Player, extremum: Extremum) -> Vec<bool> {
        let mut mask = vec![false; line.len()];
        let mut members = Vec::new();
        let mut incumbent = None::<Utility>;
        for record in line {
            let utility = record.payoff(player);
            let position = record.position(player);
            match incumbent {
                Some(best) if utility == best => members.push(position),
                Some(best) if !extremum.beats(utility, best) => continue,
                _ => {
                    incumbent = Some(utility);
                    members.clear();
                    members.push(position);
                }
            }
        }
        for position in members {
            mask[position] = true;
        }
        mask
    }
}
