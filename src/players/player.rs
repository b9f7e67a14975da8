/// One of the two seats at the table.
///
/// Player 1 picks the row, Player 2 picks the column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const fn all() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    pub const fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    pub const fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "{}", crate::PLAYER_1),
            Self::P2 => write!(f, "{}", crate::PLAYER_2),
        }
    }
}
