mod duo;
mod player;

pub use duo::*;
pub use player::*;
