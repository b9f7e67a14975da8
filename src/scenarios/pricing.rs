use crate::GameTable;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Two sellers pricing the same product.
///
/// Each sells `base_sales + (their price − my price) × sensitivity` units
/// at a margin of `my price − fixed_costs`. Used symmetrically, no price
/// dominates: the best reply always tracks the rival's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub lowest: i64,
    pub highest: i64,
    pub fixed_costs: i64,
    pub base_sales: i64,
    pub sensitivity: i64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            lowest: 31,
            highest: 58,
            fixed_costs: 30,
            base_sales: 100,
            sensitivity: 10,
        }
    }
}

impl Pricing {
    pub fn prices(&self) -> Vec<i64> {
        (self.lowest..=self.highest).collect()
    }
    pub fn profit(&self, mine: i64, theirs: i64) -> Utility {
        let margin = mine - self.fixed_costs;
        let sales = self.base_sales + (theirs - mine) * self.sensitivity;
        (sales * margin) as Utility
    }
    pub fn table(&self) -> GameTable<i64> {
        let config = self.clone();
        GameTable::symmetric(self.prices(), move |mine: &i64, theirs: &i64| {
            Ok(config.profit(*mine, *theirs))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prices_span_the_market() {
        let prices = Pricing::default().prices();
        assert_eq!(prices.len(), 28);
        assert_eq!(prices.first(), Some(&31));
        assert_eq!(prices.last(), Some(&58));
    }

    #[test]
    fn undercutting_wins_volume() {
        let pricing = Pricing::default();
        assert_eq!(pricing.profit(31, 31), 100.);
        assert_eq!(pricing.profit(43, 58), 3250.);
        assert_eq!(pricing.profit(58, 43), -1400.);
        assert_eq!(pricing.profit(58, 58), 2800.);
    }
}
