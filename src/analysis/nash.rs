use crate::Choice;
use crate::PayoffMatrix;
use crate::Player;
use crate::Utility;

/// Pure-strategy Nash equilibria.
///
/// A cell qualifies when Player 1's payoff is the best in its column and
/// Player 2's payoff is the best in its row. Both maxima are collected in
/// one pass, cells are tested in a second, so the search is O(n²).
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibria<C>(Vec<(C, C)>);

impl<C> Equilibria<C>
where
    C: Choice,
{
    pub fn new(matrix: &PayoffMatrix<C>) -> Self {
        let n = matrix.size();
        let mut column_best = vec![Utility::NEG_INFINITY; n];
        let mut row_best = vec![Utility::NEG_INFINITY; n];
        for record in matrix.rows().flatten() {
            let p1 = record.payoff(Player::P1);
            let p2 = record.payoff(Player::P2);
            column_best[record.column] = column_best[record.column].max(p1);
            row_best[record.row] = row_best[record.row].max(p2);
        }
        let cells = matrix
            .rows()
            .flatten()
            .filter(|r| r.payoff(Player::P1) == column_best[r.column])
            .filter(|r| r.payoff(Player::P2) == row_best[r.row])
            .map(|r| (r.choice(Player::P1).clone(), r.choice(Player::P2).clone()))
            .collect::<Vec<_>>();
        log::debug!("found {} pure equilibria", cells.len());
        Self(cells)
    }
    /// Equilibrium pairs `(p1 choice, p2 choice)` in row-major order.
    pub fn pairs(&self) -> &[(C, C)] {
        &self.0
    }
    pub fn contains(&self, p1: &C, p2: &C) -> bool {
        self.0.iter().any(|(a, b)| a == p1 && b == p2)
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Domain;
    use crate::Duo;
    use crate::infallible;

    fn equilibria<F>(choices: Vec<u8>, payoff: F) -> Equilibria<u8>
    where
        F: Fn(&u8, &u8) -> Utility + Send + Sync + Copy + 'static,
    {
        let ref f = infallible(payoff);
        let matrix = PayoffMatrix::build(Domain::new(choices).unwrap(), Duo::new(f, f)).unwrap();
        Equilibria::new(&matrix)
    }

    #[test]
    fn prisoners_dilemma_mutual_defection() {
        let found = equilibria(vec![0, 1], |a, b| match (a, b) {
            (0, 0) => 3.,
            (0, 1) => 0.,
            (1, 0) => 5.,
            _ => 1.,
        });
        assert_eq!(found.pairs(), &[(1, 1)]);
    }

    #[test]
    fn coordination_has_one_per_diagonal_cell() {
        let found = equilibria(vec![0, 1, 2], |a, b| if a == b { 1. } else { 0. });
        assert_eq!(found.pairs(), &[(0, 0), (1, 1), (2, 2)]);
        assert!(found.contains(&2, &2));
        assert!(!found.contains(&0, &2));
    }

    #[test]
    fn matching_pennies_has_none() {
        // symmetric payoff for both seats: P1 wants to match, P2 wants to mismatch
        let ref p1 = infallible(|a: &u8, b: &u8| if a == b { 1. } else { -1. });
        let ref p2 = infallible(|a: &u8, b: &u8| if a == b { -1. } else { 1. });
        let matrix = PayoffMatrix::build(Domain::new(vec![0, 1]).unwrap(), Duo::new(p1, p2)).unwrap();
        assert!(Equilibria::new(&matrix).is_empty());
    }

    #[test]
    fn asymmetric_payoffs_use_the_right_axis() {
        // P1 always prefers row 1; P2 prefers the column equal to P1's row
        let ref p1 = infallible(|a: &u8, _: &u8| *a as Utility);
        let ref p2 = infallible(|a: &u8, b: &u8| if a == b { 1. } else { 0. });
        let matrix = PayoffMatrix::build(Domain::new(vec![0, 1]).unwrap(), Duo::new(p1, p2)).unwrap();
        assert_eq!(Equilibria::new(&matrix).pairs(), &[(1, 1)]);
    }
}
