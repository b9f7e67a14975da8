use super::game::Game;
use crate::Scenario;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Analyze a two-player payoff table", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub game: Game,
    /// Also solve for minimax mixing ratios.
    #[arg(long, global = true)]
    pub minimax: bool,
    /// Write the JSON report here instead of stdout (regenerates fixtures).
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
    /// Raise terminal log verbosity; repeat for more.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Mirror DEBUG logs into logs/<unix-time>.log.
    #[arg(long, global = true)]
    pub log_file: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let minimax = self.minimax;
        let scenario = Scenario::try_from(self.game)?;
        log::info!("analyzing {}", scenario);
        let json = scenario.report(minimax)?.to_json()?;
        match self.out {
            Some(path) => {
                std::fs::write(&path, json + "\n")?;
                log::info!("report written to {}", path.display());
            }
            None => writeln!(std::io::stdout().lock(), "{}", json)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["gametable", "rps", "--minimax", "-vv"]).unwrap();
        assert!(args.minimax);
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert!(matches!(args.game, Game::Roshambo { .. }));
    }

    #[test]
    fn spike_peaks_split_on_commas() {
        let args = Args::try_parse_from(["gametable", "spike", "--p1", "2,5", "--p2", "1,3,6"]).unwrap();
        match Scenario::try_from(args.game).unwrap() {
            Scenario::Spike(spike) => assert_eq!(spike.peaks, [vec![2, 5], vec![1, 3, 6]]),
            other => panic!("expected spike, got {}", other),
        }
    }

    #[test]
    fn negative_stakes_parse() {
        let args = Args::try_parse_from(["gametable", "roshambo", "--lose", "-2"]).unwrap();
        assert!(matches!(args.game, Game::Roshambo { lose, .. } if lose == -2.));
    }
}
