mod analysis;
mod dominance;
mod minimax;
mod nash;
mod system;

pub use analysis::*;
pub use dominance::*;
pub use minimax::*;
pub use nash::*;
pub use system::*;
