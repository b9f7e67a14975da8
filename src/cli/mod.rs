//! Command-line front end: pick a game, build it, emit a JSON report.
mod args;
mod game;

pub use args::*;
pub use game::*;
