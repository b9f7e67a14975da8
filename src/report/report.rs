use crate::Choice;
use crate::GameTable;
use crate::Player;
use crate::TableError;
use serde::Deserialize;
use serde::Serialize;

/// What a player's minimax analysis produced, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mixed {
    /// Exact ratios written as `"n/d"`, in domain order.
    Ratios(Vec<String>),
    /// The reason no mixed equilibrium exists.
    Degenerate(String),
}

/// Serializable view of a built [`GameTable`], assembled only from its
/// public accessors. Payoffs are rounded half-to-even to whole numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub players: [String; 2],
    pub choices: Vec<String>,
    /// `cells[row][column] = [payoff1, payoff2]`.
    pub cells: Vec<Vec<[i64; 2]>>,
    pub dominants: [Vec<String>; 2],
    pub dominated: [Vec<String>; 2],
    pub equilibria: Vec<[String; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixing: Option<[Mixed; 2]>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    fn mixed<C>(table: &GameTable<C>, player: Player) -> Result<Mixed, TableError>
    where
        C: Choice + 'static,
    {
        match table.mixing_ratios(player) {
            Ok(ratios) => Ok(Mixed::Ratios(ratios.iter().map(|p| p.to_string()).collect())),
            Err(TableError::Degenerate { reason, .. }) => Ok(Mixed::Degenerate(reason.to_string())),
            Err(e) => Err(e),
        }
    }
}

impl<C> TryFrom<&GameTable<C>> for Report
where
    C: Choice + std::fmt::Display + 'static,
{
    type Error = TableError;
    fn try_from(table: &GameTable<C>) -> Result<Self, Self::Error> {
        let label = |choices: &[C]| choices.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let cells: Vec<Vec<[i64; 2]>> = table
            .rows()?
            .map(|line| {
                line.map(|r| {
                    [
                        r.payoff(Player::P1).round_ties_even() as i64,
                        r.payoff(Player::P2).round_ties_even() as i64,
                    ]
                })
                .collect::<Vec<_>>()
            })
            .collect();
        let mixing = match table.minimax() {
            false => None,
            true => Some([
                Self::mixed(table, Player::P1)?,
                Self::mixed(table, Player::P2)?,
            ]),
        };
        Ok(Self {
            players: [
                table.name(Player::P1).to_string(),
                table.name(Player::P2).to_string(),
            ],
            choices: label(table.domain()?),
            cells,
            dominants: [
                label(table.dominant_strategies(Player::P1)?),
                label(table.dominant_strategies(Player::P2)?),
            ],
            dominated: [
                label(table.dominated_strategies(Player::P1)?),
                label(table.dominated_strategies(Player::P2)?),
            ],
            equilibria: table
                .nash_equilibria()?
                .iter()
                .map(|(a, b)| [a.to_string(), b.to_string()])
                .collect(),
            mixing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(minimax: bool) -> GameTable<u8> {
        GameTable::symmetric(vec![0, 1], |a: &u8, b: &u8| {
            Ok(match (a, b) {
                (0, 0) => 3.,
                (0, 1) => 0.,
                (1, 0) => 5.,
                _ => 1.5,
            })
        })
        .with_minimax(minimax)
    }

    #[test]
    fn reports_every_section() {
        let mut table = table(false);
        table.build(None).unwrap();
        let report = Report::try_from(&table).unwrap();
        assert_eq!(report.players, ["Player 1".to_string(), "Player 2".to_string()]);
        assert_eq!(report.choices, vec!["0", "1"]);
        assert_eq!(report.cells, vec![vec![[3, 3], [0, 5]], vec![[5, 0], [2, 2]]]);
        assert_eq!(report.dominants, [vec!["1".to_string()], vec!["1".to_string()]]);
        assert_eq!(report.dominated, [vec!["0".to_string()], vec!["0".to_string()]]);
        assert_eq!(report.equilibria, vec![["1".to_string(), "1".to_string()]]);
        assert_eq!(report.mixing, None);
    }

    #[test]
    fn degenerate_mixing_is_reported_not_raised() {
        let mut table = table(true);
        table.build(None).unwrap();
        let report = Report::try_from(&table).unwrap();
        assert!(matches!(report.mixing, Some([Mixed::Degenerate(_), Mixed::Degenerate(_)])));
    }

    #[test]
    fn json_survives_a_round_trip() {
        let mut table = table(true);
        table.build(None).unwrap();
        let report = Report::try_from(&table).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"equilibria\""));
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }

    #[test]
    fn unbuilt_tables_cannot_be_reported() {
        assert!(matches!(Report::try_from(&table(false)), Err(TableError::Unbuilt)));
    }
}
