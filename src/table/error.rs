use crate::MinimaxError;
use crate::Player;

/// Everything that can go wrong while building or reading a [`GameTable`].
///
/// [`GameTable`]: crate::GameTable
#[derive(Debug)]
pub enum TableError {
    /// An accessor was called before a successful build, or after the
    /// configuration changed.
    Unbuilt,
    /// No choices were supplied to the build and none were configured.
    MissingDomain,
    /// No payoff function is configured for this player.
    MissingPayoff(Player),
    EmptyDomain,
    /// The choice at this position repeats an earlier one.
    DuplicateChoice(usize),
    /// This player's choice is not part of the built domain.
    Lookup(Player),
    /// A payoff function failed. The caller's error is kept as the source.
    Payoff {
        player: Player,
        source: anyhow::Error,
    },
    /// A payoff function returned NaN or an infinity.
    NonFinite {
        player: Player,
        row: usize,
        column: usize,
    },
    /// Mixing ratios were read from a table built without minimax analysis.
    MinimaxDisabled,
    /// The indifference system for this player has no usable solution.
    Degenerate {
        player: Player,
        reason: MinimaxError,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbuilt => write!(f, "game table has not been built"),
            Self::MissingDomain => write!(f, "no choices configured"),
            Self::MissingPayoff(player) => write!(f, "no payoff function for {}", player),
            Self::EmptyDomain => write!(f, "choice domain is empty"),
            Self::DuplicateChoice(i) => write!(f, "choice at position {} is a duplicate", i),
            Self::Lookup(player) => write!(f, "{}'s choice is not in the domain", player),
            Self::Payoff { player, source } => write!(f, "{}'s payoff failed: {}", player, source),
            Self::NonFinite { player, row, column } => write!(
                f,
                "{}'s payoff at ({}, {}) is not finite",
                player, row, column
            ),
            Self::MinimaxDisabled => write!(f, "minimax analysis was not requested"),
            Self::Degenerate { player, reason } => {
                write!(f, "no mixed equilibrium for {}: {}", player, reason)
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payoff { source, .. } => Some(source.as_ref()),
            Self::Degenerate { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
