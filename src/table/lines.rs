use super::domain::Choice;
use super::matrix::PayoffMatrix;
use super::record::Record;
use crate::Duo;
use crate::Player;

/// Outer traversal: one [`Line`] per choice of the player who is held fixed.
///
/// Every `Lines` owns its cursor, so any number of traversals may run over
/// the same matrix at once. Cloning forks the cursor where it stands.
#[derive(Debug, Clone)]
pub struct Lines<'a, C> {
    matrix: &'a PayoffMatrix<C>,
    axis: Player,
    cursor: usize,
}

/// Inner traversal: the cells along one row or column.
#[derive(Debug, Clone)]
pub struct Line<'a, C> {
    matrix: &'a PayoffMatrix<C>,
    axis: Player,
    fixed: usize,
    cursor: usize,
}

impl<'a, C> Lines<'a, C> {
    /// `axis` is the player whose choice varies *within* each line.
    pub(crate) fn new(matrix: &'a PayoffMatrix<C>, axis: Player) -> Self {
        Self {
            matrix,
            axis,
            cursor: 0,
        }
    }
    pub fn axis(&self) -> Player {
        self.axis
    }
}

impl<'a, C> Line<'a, C>
where
    C: Choice,
{
    /// Position of the held choice; the row index when walking rows.
    pub fn index(&self) -> usize {
        self.fixed
    }
    /// The choice held fixed along this line.
    pub fn choice(&self) -> &'a C {
        self.matrix.domain().choice(self.fixed)
    }
    /// The player whose choice is held fixed along this line.
    pub fn holder(&self) -> Player {
        self.axis.opponent()
    }
}

impl<'a, C> Iterator for Lines<'a, C>
where
    C: Choice,
{
    type Item = Line<'a, C>;
    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor < self.matrix.size() {
            false => None,
            true => {
                self.cursor += 1;
                Some(Line {
                    matrix: self.matrix,
                    axis: self.axis,
                    fixed: self.cursor - 1,
                    cursor: 0,
                })
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.matrix.size() - self.cursor;
        (n, Some(n))
    }
}

impl<'a, C> Iterator for Line<'a, C>
where
    C: Choice,
{
    type Item = Record<'a, C>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.matrix.size() {
            return None;
        }
        let moving = self.cursor;
        self.cursor += 1;
        let (row, column) = match self.axis {
            Player::P2 => (self.fixed, moving),
            Player::P1 => (moving, self.fixed),
        };
        let domain = self.matrix.domain();
        Some(Record {
            choices: Duo::new(domain.choice(row), domain.choice(column)),
            payoffs: self.matrix.pair(row, column),
            row,
            column,
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.matrix.size() - self.cursor;
        (n, Some(n))
    }
}

impl<'a, C> ExactSizeIterator for Lines<'a, C> where C: Choice {}
impl<'a, C> ExactSizeIterator for Line<'a, C> where C: Choice {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Domain;
    use crate::infallible;

    fn matrix() -> PayoffMatrix<char> {
        let ref p1 = infallible(|a: &char, b: &char| (*a as u32 * 1000 + *b as u32) as f64);
        let ref p2 = infallible(|a: &char, b: &char| (*b as u32 * 1000 + *a as u32) as f64);
        let domain = Domain::new(vec!['x', 'y', 'z']).unwrap();
        PayoffMatrix::build(domain, Duo::new(p1, p2)).unwrap()
    }

    #[test]
    fn rows_walk_in_domain_order() {
        let matrix = matrix();
        let cells = matrix
            .rows()
            .flat_map(|line| line.map(|r| (r.row, r.column, *r.choice(Player::P1), *r.choice(Player::P2))))
            .collect::<Vec<_>>();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (0, 0, 'x', 'x'));
        assert_eq!(cells[5], (1, 2, 'y', 'z'));
        assert_eq!(cells[8], (2, 2, 'z', 'z'));
    }

    #[test]
    fn columns_are_transposed_rows() {
        let matrix = matrix();
        let line = matrix.columns().nth(1).unwrap();
        assert_eq!(line.choice(), &'y');
        assert_eq!(line.holder(), Player::P2);
        let cells = line.map(|r| (r.row, r.column)).collect::<Vec<_>>();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn records_read_both_payoffs() {
        let matrix = matrix();
        let record = matrix.rows().nth(0).unwrap().nth(2).unwrap();
        let x = 'x' as u32 as f64;
        let z = 'z' as u32 as f64;
        // payoff2 is called with (p2 choice, p1 choice)
        assert_eq!(record.payoff(Player::P1), x * 1000. + z);
        assert_eq!(record.payoff(Player::P2), x * 1000. + z);
        assert_eq!(record.position(Player::P2), 2);
    }

    #[test]
    fn traversals_are_independent() {
        let matrix = matrix();
        let mut a = matrix.rows();
        let mut b = matrix.rows();
        a.next();
        a.next();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);
        let mut inner = b.next().unwrap();
        let fork = inner.clone();
        inner.next();
        assert_eq!(inner.len(), 2);
        assert_eq!(fork.len(), 3);
        assert_eq!(a.next().unwrap().index(), 2);
    }
}
