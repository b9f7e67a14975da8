//! Payoff tables for finite two-player simultaneous games.
//!
//! A [`GameTable`] evaluates two payoff functions over every pair of choices
//! in a shared [`Domain`], then derives each player's dominant and dominated
//! strategies, the pure-strategy Nash equilibria, and (on request) the exact
//! minimax mixing ratios that leave the opponent indifferent.
//!
//! # Module Structure
//!
//! - `players` - `Player` tags and the `Duo` two-slot container
//! - `table` - domain, payoff functions, matrix, traversal, state machine
//! - `analysis` - dominance, pure Nash equilibria, minimax solver
//! - `report` - serializable snapshot for external formatters
//! - `scenarios` - immutable configurations for well-known games
mod analysis;
mod players;
mod report;
mod scenarios;
mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use analysis::*;
pub use players::*;
pub use report::*;
pub use scenarios::*;
pub use table::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs returned by caller-supplied payoff functions.
pub type Utility = f64;
/// Exact mixing weights produced by the minimax solver.
pub type Probability = num_rational::BigRational;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Default label for the row player.
pub const PLAYER_1: &str = "Player 1";
/// Default label for the column player.
pub const PLAYER_2: &str = "Player 2";
/// Smallest domain for which the parallel matrix build is worth scheduling.
pub const PARALLEL_THRESHOLD: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level, optionally mirrored at
/// DEBUG into a timestamped file under `logs/`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if file {
        std::fs::create_dir_all("logs")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(format!("logs/{}.log", time))?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
