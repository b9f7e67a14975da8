use crate::Duo;
use crate::Player;
use crate::Utility;

/// Snapshot of a single cell, read from the built matrix.
///
/// `row` indexes Player 1's choice and `column` indexes Player 2's,
/// both as positions in the domain regardless of traversal direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a, C> {
    pub choices: Duo<&'a C>,
    pub payoffs: Duo<Utility>,
    pub row: usize,
    pub column: usize,
}

impl<'a, C> Record<'a, C> {
    pub fn choice(&self, player: Player) -> &'a C {
        self.choices[player]
    }
    pub fn payoff(&self, player: Player) -> Utility {
        self.payoffs[player]
    }
    /// Domain position of `player`'s choice in this cell.
    pub fn position(&self, player: Player) -> usize {
        match player {
            Player::P1 => self.row,
            Player::P2 => self.column,
        }
    }
}
