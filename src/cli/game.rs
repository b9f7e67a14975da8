use crate::Noise;
use crate::Pricing;
use crate::Roshambo;
use crate::Scenario;
use crate::Spike;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Game {
    #[command(about = "Two sellers choosing prices over a shared range", alias = "price")]
    Pricing {
        #[arg(long, default_value_t = 31)]
        lowest: i64,
        #[arg(long, default_value_t = 58)]
        highest: i64,
        #[arg(long, default_value_t = 30)]
        fixed_costs: i64,
        #[arg(long, default_value_t = 100)]
        base_sales: i64,
        #[arg(long, default_value_t = 10)]
        sensitivity: i64,
    },
    #[command(about = "Payoff 2 on each player's peak choices, 1 elsewhere")]
    Spike {
        #[arg(long, default_value_t = 0)]
        lowest: i64,
        #[arg(long, default_value_t = 10)]
        highest: i64,
        #[arg(long = "p1", value_delimiter = ',', default_value = "10")]
        peaks1: Vec<i64>,
        #[arg(long = "p2", value_delimiter = ',', default_value = "9")]
        peaks2: Vec<i64>,
    },
    #[command(about = "Rock, paper, scissors", alias = "rps")]
    Roshambo {
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        win: f64,
        #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
        lose: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        tie: f64,
    },
    #[command(about = "Seeded random integer payoffs")]
    Noise {
        #[arg(long, default_value_t = 4)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 9)]
        spread: i64,
    },
    #[command(about = "Load a game from a JSON configuration file")]
    Load {
        #[arg(required = true)]
        path: PathBuf,
    },
}

impl TryFrom<Game> for Scenario {
    type Error = anyhow::Error;
    fn try_from(game: Game) -> Result<Self, Self::Error> {
        match game {
            Game::Pricing {
                lowest,
                highest,
                fixed_costs,
                base_sales,
                sensitivity,
            } => Ok(Self::Pricing(Pricing {
                lowest,
                highest,
                fixed_costs,
                base_sales,
                sensitivity,
            })),
            Game::Spike {
                lowest,
                highest,
                peaks1,
                peaks2,
            } => Ok(Self::Spike(Spike {
                lowest,
                highest,
                peaks: [peaks1, peaks2],
            })),
            Game::Roshambo { win, lose, tie } => Ok(Self::Roshambo(Roshambo { win, lose, tie })),
            Game::Noise { size, seed, spread } => Ok(Self::Noise(Noise { size, seed, spread })),
            Game::Load { path } => Scenario::load(&path),
        }
    }
}
