use gametable::*;
use num_traits::Zero;
use proptest::prelude::*;
use std::sync::Arc;

/// A game over choices `0..n` whose payoffs come from two generated grids.
fn game() -> impl Strategy<Value = (usize, Vec<i8>, Vec<i8>)> {
    (1usize..6).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(-4i8..=4, n * n),
            prop::collection::vec(-4i8..=4, n * n),
        )
    })
}

fn table(n: usize, g1: &[i8], g2: &[i8]) -> GameTable<usize> {
    let g1 = Arc::new(g1.to_vec());
    let g2 = Arc::new(g2.to_vec());
    let mut table = GameTable::new()
        .with_choices((0..n).collect())
        .with_minimax(true);
    table.set_payoff_fn(Player::P1, move |a: &usize, b: &usize| Ok(g1[a * n + b] as Utility));
    table.set_payoff_fn(Player::P2, move |a: &usize, b: &usize| Ok(g2[a * n + b] as Utility));
    table.build(None).unwrap();
    table
}

fn exact(u: Utility) -> Probability {
    Probability::from_float(u).unwrap()
}

proptest! {
    #[test]
    fn matrix_mirrors_payoff_functions((n, g1, g2) in game()) {
        let table = table(n, &g1, &g2);
        let snapshot = table.snapshot().unwrap();
        prop_assert_eq!(snapshot.matrix().entries(Player::P1), n * n);
        prop_assert_eq!(snapshot.matrix().entries(Player::P2), n * n);
        for a in 0..n {
            for b in 0..n {
                let expected = (g1[a * n + b] as Utility, g2[b * n + a] as Utility);
                prop_assert_eq!(table.payoffs_at(&a, &b).unwrap(), expected);
            }
        }
    }

    #[test]
    fn dominants_are_best_everywhere((n, g1, g2) in game()) {
        let table = table(n, &g1, &g2);
        for &a in table.dominant_strategies(Player::P1).unwrap() {
            prop_assert!(a < n);
            for b in 0..n {
                let best = (0..n).map(|x| g1[x * n + b]).max().unwrap();
                prop_assert_eq!(g1[a * n + b], best);
            }
        }
        for &a in table.dominated_strategies(Player::P2).unwrap() {
            prop_assert!(a < n);
            for b in 0..n {
                let worst = (0..n).map(|x| g2[x * n + b]).min().unwrap();
                prop_assert_eq!(g2[a * n + b], worst);
            }
        }
    }

    #[test]
    fn dominance_lists_follow_domain_order((n, g1, g2) in game()) {
        let table = table(n, &g1, &g2);
        for player in Player::all() {
            for list in [table.dominant_strategies(player).unwrap(), table.dominated_strategies(player).unwrap()] {
                prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn equilibria_are_exactly_mutual_best_responses((n, g1, g2) in game()) {
        let table = table(n, &g1, &g2);
        let found = table.nash_equilibria().unwrap();
        let mut expected = Vec::new();
        for a in 0..n {
            for b in 0..n {
                let p1_best = (0..n).all(|x| g1[x * n + b] <= g1[a * n + b]);
                let p2_best = (0..n).all(|y| g2[y * n + a] <= g2[b * n + a]);
                if p1_best && p2_best {
                    expected.push((a, b));
                }
            }
        }
        prop_assert_eq!(found, expected.as_slice());
    }

    #[test]
    fn mixing_leaves_opponent_indifferent((n, g1, g2) in game()) {
        let table = table(n, &g1, &g2);
        let grids = Duo::new(&g1, &g2);
        for player in Player::all() {
            let opponent = player.opponent();
            match table.mixing(player) {
                Ok(mixing) => {
                    let ratios = mixing.ratios();
                    prop_assert_eq!(ratios.len(), n);
                    prop_assert_eq!(ratios.iter().sum::<Probability>(), Probability::from_integer(1.into()));
                    prop_assert!(ratios.iter().all(|p| *p >= Probability::zero()));
                    for j in 0..n {
                        let expected = (0..n)
                            .map(|i| &ratios[i] * exact(grids[opponent][j * n + i] as Utility))
                            .fold(Probability::zero(), |acc, x| acc + x);
                        prop_assert_eq!(&expected, mixing.value());
                    }
                }
                Err(TableError::Degenerate { player: p, .. }) => prop_assert_eq!(p, player),
                Err(e) => prop_assert!(false, "unexpected error {}", e),
            }
        }
    }
}
